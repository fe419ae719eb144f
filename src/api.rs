use crate::{
    counter::count_memoized,
    error::StepError,
    steps::{
        Count,
        StepSet,
    },
};

/// Counts the ordered ways to write `distance` as a sum of `step_sizes`.
///
/// Raw input is checked once here: a negative distance, an empty set, and
/// zero, negative or repeated step sizes are all rejected instead of being
/// counted as zero. A count too large for a [`Count`] is an error as well.
///
/// ```
/// use stepcount::count_ordered_compositions;
///
/// assert_eq!(count_ordered_compositions(4, &[1, 2]), Ok(5));
/// assert_eq!(count_ordered_compositions(6, &[3, 2, 1]), Ok(24));
/// assert!(count_ordered_compositions(-1, &[1, 2]).is_err());
/// ```
pub fn count_ordered_compositions(
    distance: i64,
    step_sizes: &[i64],
) -> Result<Count, StepError> {
    if distance < 0 {
        return Err(StepError::NegativeDistance(distance));
    }

    let steps = StepSet::from_signed(step_sizes)?;
    count_memoized(distance as u64, &steps)
}
