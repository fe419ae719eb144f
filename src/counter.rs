//! Counting ordered compositions: how many sequences of allowed step sizes sum
//! exactly to a distance, where `1 + 2` and `2 + 1` are different sequences.
//!
//! Three ways of getting the same number:
//!
//! - [`count_stairs`] only knows steps of one and two, and recurses on both.
//! - [`count_naive`] takes any [`StepSet`] and tries every step at every
//!   point. Exponential, with the number of steps as the branching factor.
//! - [`Memo`] is the same recursion, but each distance is solved once per
//!   top-level call. Linear in the distance, and checked: a count that does
//!   not fit in a [`Count`] is an error, not a wrapped number.
//!
//! The naive counters add one per sequence found, so they cannot get near
//! `u64::MAX` in any feasible run and stay unchecked.

use std::collections::HashMap;

use clap::ValueEnum;
use log::{
    debug,
    trace,
};

use crate::{
    error::StepError,
    steps::{
        Count,
        Distance,
        StepSet,
    },
};

/// Ways to climb `distance` stairs one or two at a time.
pub fn count_stairs(distance: Distance) -> Count {
    match distance {
        0 => 1,
        1 => count_stairs(0),
        _ => count_stairs(distance - 1) + count_stairs(distance - 2),
    }
}

/// Ways to cover `distance` with `steps`, recomputing every sub-problem.
pub fn count_naive(
    distance: Distance,
    steps: &StepSet,
) -> Count {
    // the loop below only ever lands on zero from above
    if distance == 0 {
        return 1;
    }

    let mut count = 0;
    for step in steps.iter() {
        if step == distance {
            count += 1;
        }
        else if step < distance {
            count += count_naive(distance - step, steps);
        }
        // overshooting steps contribute nothing
    }

    count
}

/// How much work a memoized run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Distinct distances computed, i.e. entries in the cache.
    pub solved: usize,
    /// Lookups answered from the cache.
    pub hits: usize,
}

/// A memoizing counter for one step set.
///
/// The cache only holds for the step set it was built with, so it lives and
/// dies with this value. Make a new one per top-level count; [`count_memoized`]
/// does exactly that.
#[derive(Debug)]
pub struct Memo<'a> {
    steps: &'a StepSet,
    cache: HashMap<Distance, Count>,
    hits: usize,
}

impl<'a> Memo<'a> {
    pub fn new(steps: &'a StepSet) -> Memo<'a> {
        Memo {
            steps,
            cache: HashMap::new(),
            hits: 0,
        }
    }

    pub fn count(
        mut self,
        distance: Distance,
    ) -> Result<(Count, MemoStats), StepError> {
        let count = self.solve(distance)?;
        let stats = MemoStats {
            solved: self.cache.len(),
            hits: self.hits,
        };

        debug!(
            "memoized count for {} with {} is {} ({} solved, {} hits)",
            distance, self.steps, count, stats.solved, stats.hits
        );

        Ok((count, stats))
    }

    fn solve(
        &mut self,
        distance: Distance,
    ) -> Result<Count, StepError> {
        let count = match self.cache.get(&distance) {
            Some(&known) => {
                self.hits += 1;
                known
            },
            None => self.compute(distance)?,
        };

        // storing a hit again is a no-op
        self.cache.insert(distance, count);
        Ok(count)
    }

    fn compute(
        &mut self,
        distance: Distance,
    ) -> Result<Count, StepError> {
        if distance == 0 {
            return Ok(1);
        }

        let steps = self.steps;
        let mut count: Count = 0;
        for step in steps.iter() {
            // an exact landing goes through solve(0) so that zero gets cached
            // like every other distance
            if step <= distance {
                let rest = self.solve(distance - step)?;
                count = count.checked_add(rest).ok_or_else(|| {
                    StepError::CountOverflow {
                        distance,
                        steps: steps.clone(),
                    }
                })?;
            }
        }

        trace!("solved distance {}: {}", distance, count);
        Ok(count)
    }
}

/// Ways to cover `distance` with `steps`, solving each distance once.
pub fn count_memoized(
    distance: Distance,
    steps: &StepSet,
) -> Result<Count, StepError> {
    Memo::new(steps).count(distance).map(|(count, _)| count)
}

pub fn count_memoized_with_stats(
    distance: Distance,
    steps: &StepSet,
) -> Result<(Count, MemoStats), StepError> {
    Memo::new(steps).count(distance)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Strategy {
    /// Hard-coded steps of one and two.
    Stairs,
    /// Any step set, no cache.
    Naive,
    /// Any step set, one cache per call.
    Memoized,
}

impl Strategy {
    pub fn count(
        &self,
        distance: Distance,
        steps: &StepSet,
    ) -> Result<Count, StepError> {
        use Strategy::*;

        match self {
            Stairs if !steps.is_stairs() => {
                Err(StepError::UnsupportedSteps(steps.clone()))
            },
            Stairs => Ok(count_stairs(distance)),
            Naive => Ok(count_naive(distance, steps)),
            Memoized => count_memoized(distance, steps),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn set(sizes: &[u64]) -> StepSet {
        StepSet::new(sizes.iter().copied()).unwrap()
    }

    #[test]
    fn stairs_follow_fibonacci() {
        let expected = [1, 1, 2, 3, 5, 8, 13];

        for (distance, want) in expected.iter().enumerate() {
            let distance = distance as Distance;
            let stairs = StepSet::stairs();

            assert_eq!(count_stairs(distance), *want);
            assert_eq!(count_naive(distance, &stairs), *want);
            assert_eq!(count_memoized(distance, &stairs), Ok(*want));
        }
    }

    #[test]
    fn three_step_sizes() {
        let steps = set(&[1, 2, 3]);

        assert_eq!(count_naive(6, &steps), 24);
        assert_eq!(count_memoized(6, &steps), Ok(24));
    }

    #[test]
    fn zero_distance_is_one_way() {
        for steps in [set(&[1]), set(&[2, 5]), set(&[7])] {
            assert_eq!(count_naive(0, &steps), 1);
            assert_eq!(count_memoized(0, &steps), Ok(1));
        }
    }

    #[test]
    fn unreachable_distance_is_zero() {
        let evens = set(&[2, 4]);

        assert_eq!(count_naive(7, &evens), 0);
        assert_eq!(count_memoized(7, &evens), Ok(0));
        assert_eq!(count_memoized(1, &set(&[3])), Ok(0));
    }

    #[test]
    fn sixty_stairs() {
        assert_eq!(
            count_memoized(60, &StepSet::stairs()),
            Ok(2_504_730_781_961)
        );
    }

    #[test]
    fn overflow_is_an_error() {
        let stairs = StepSet::stairs();

        // 92 stairs is Fibonacci 93, the largest that fits
        assert_eq!(count_memoized(92, &stairs), Ok(12_200_160_415_121_876_738));
        assert_eq!(
            count_memoized(100, &stairs),
            Err(StepError::CountOverflow {
                distance: 93,
                steps: stairs.clone(),
            })
        );
        assert!(matches!(
            Strategy::Memoized.count(100, &stairs),
            Err(StepError::CountOverflow { .. })
        ));
    }

    #[test]
    fn memo_solves_every_distance_once() {
        let (count, stats) = count_memoized_with_stats(10, &set(&[1, 2, 3])).unwrap();

        assert_eq!(count, 274);
        assert_eq!(stats.solved, 11);
        // 10 down to 3 each find two of their three children cached, 2 finds
        // one
        assert_eq!(stats.hits, 17);
    }

    #[test]
    fn memo_only_visits_reachable_distances() {
        let (count, stats) = count_memoized_with_stats(6, &set(&[2])).unwrap();

        assert_eq!(count, 1);
        // 6, 4, 2, 0
        assert_eq!(stats.solved, 4);
        assert_eq!(stats.hits, 0);
    }

    #[test]
    fn fresh_cache_per_call() {
        let steps = set(&[1, 3]);
        let first = count_memoized(20, &steps).unwrap();
        let second = count_memoized(20, &steps).unwrap();

        assert_eq!(first, second);
        // a different set right after must not see the old entries
        assert_eq!(count_memoized(20, &StepSet::stairs()), Ok(10946));
    }

    #[test]
    fn stairs_strategy_refuses_other_sets() {
        let steps = set(&[1, 3]);

        assert_eq!(
            Strategy::Stairs.count(5, &steps),
            Err(StepError::UnsupportedSteps(steps.clone()))
        );
        assert_eq!(Strategy::Stairs.count(5, &StepSet::stairs()), Ok(8));
        assert_eq!(Strategy::Naive.count(5, &steps), Ok(4));
        assert_eq!(Strategy::Memoized.count(5, &steps), Ok(4));
    }
}
