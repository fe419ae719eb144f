use std::fmt;

use crate::{
    counter::Strategy,
    steps::{
        Distance,
        StepSet,
    },
};

/// Everything that can be wrong with a request before counting starts.
///
/// Once a [`StepSet`] exists and the distance is non-negative, counting
/// itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    NegativeDistance(i64),
    EmptyStepSet,
    NonPositiveStep(i64),
    DuplicateStep(u64),
    /// The fixed stairs counter only knows `{1, 2}`.
    UnsupportedSteps(StepSet),
    DistanceTooLarge {
        distance: Distance,
        limit: Distance,
        strategy: Strategy,
    },
    /// The number of ways to cover `distance` does not fit in a `Count`.
    CountOverflow {
        distance: Distance,
        steps: StepSet,
    },
}

impl fmt::Display for StepError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        use StepError::*;

        match self {
            NegativeDistance(distance) => {
                write!(f, "distance must not be negative, got {}", distance)
            },
            EmptyStepSet => write!(f, "at least one step size is required"),
            NonPositiveStep(step) => {
                write!(f, "step sizes must be positive, got {}", step)
            },
            DuplicateStep(step) => {
                write!(f, "step size {} was given more than once", step)
            },
            UnsupportedSteps(steps) => write!(
                f,
                "the stairs counter only takes steps of 1 and 2, got {}",
                steps
            ),
            DistanceTooLarge {
                distance,
                limit,
                strategy,
            } => write!(
                f,
                "distance {} is over the {:?} limit of {}",
                distance, strategy, limit
            ),
            CountOverflow { distance, steps } => write!(
                f,
                "the count for distance {} with {} does not fit in 64 bits",
                distance, steps
            ),
        }
    }
}

impl std::error::Error for StepError {}

#[cfg(test)]
mod test {
    use super::StepError;
    use crate::{
        counter::Strategy,
        steps::StepSet,
    };

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            StepError::NonPositiveStep(-3).to_string(),
            "step sizes must be positive, got -3"
        );
        assert_eq!(
            StepError::DistanceTooLarge {
                distance: 40,
                limit: 32,
                strategy: Strategy::Naive,
            }
            .to_string(),
            "distance 40 is over the Naive limit of 32"
        );
        assert_eq!(
            StepError::CountOverflow {
                distance: 93,
                steps: StepSet::stairs(),
            }
            .to_string(),
            "the count for distance 93 with {1, 2} does not fit in 64 bits"
        );
    }
}
