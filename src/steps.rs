use std::fmt;

use itertools::Itertools as _;
use smallvec::SmallVec;

use crate::error::StepError;

/// Units left to cover.
pub type Distance = u64;

/// Number of ordered step sequences.
pub type Count = u64;

/// Distinct positive step sizes, kept sorted.
///
/// The only way to get one is through a validating constructor, so the
/// counters downstream never look at zero, negative or repeated sizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepSet(SmallVec<[u64; 8]>);

impl StepSet {
    pub fn new(
        sizes: impl IntoIterator<Item = u64>
    ) -> Result<StepSet, StepError> {
        let sorted = sizes
            .into_iter()
            .sorted_unstable()
            .collect::<SmallVec<[u64; 8]>>();

        if sorted.is_empty() {
            return Err(StepError::EmptyStepSet);
        }

        if sorted[0] == 0 {
            return Err(StepError::NonPositiveStep(0));
        }

        let mut pairs = sorted.iter().tuple_windows();
        if let Some((dupe, _)) = pairs.find(|(a, b)| a == b) {
            return Err(StepError::DuplicateStep(*dupe));
        }

        Ok(StepSet(sorted))
    }

    /// Validates raw, possibly negative input.
    pub fn from_signed(sizes: &[i64]) -> Result<StepSet, StepError> {
        if let Some(bad) = sizes.iter().find(|s| **s <= 0) {
            return Err(StepError::NonPositiveStep(*bad));
        }

        StepSet::new(sizes.iter().map(|s| *s as u64))
    }

    /// The classic staircase: one or two at a time.
    pub fn stairs() -> StepSet {
        StepSet(SmallVec::from_slice(&[1, 2]))
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().copied()
    }

    pub fn is_stairs(&self) -> bool {
        self.0.as_slice() == [1, 2]
    }
}

impl fmt::Display for StepSet {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::StepSet;
    use crate::error::StepError;

    #[test]
    fn input_order_does_not_matter() {
        let a = StepSet::new([3, 1, 2]).unwrap();
        let b = StepSet::new([1, 2, 3]).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.to_string(), "{1, 2, 3}");
        assert_eq!(a.iter().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn rejects_malformed_sets() {
        assert_eq!(StepSet::new(Vec::<u64>::new()), Err(StepError::EmptyStepSet));
        assert_eq!(StepSet::new([2, 0]), Err(StepError::NonPositiveStep(0)));
        assert_eq!(StepSet::new([2, 1, 2]), Err(StepError::DuplicateStep(2)));
        assert_eq!(
            StepSet::from_signed(&[1, -2]),
            Err(StepError::NonPositiveStep(-2))
        );
        assert_eq!(StepSet::from_signed(&[]), Err(StepError::EmptyStepSet));
    }

    #[test]
    fn stairs_is_one_and_two() {
        let stairs = StepSet::stairs();

        assert!(stairs.is_stairs());
        assert!(StepSet::new([2, 1]).unwrap().is_stairs());
        assert!(!StepSet::new([1, 2, 3]).unwrap().is_stairs());
    }
}
