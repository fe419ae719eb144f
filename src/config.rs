//! Defaults and limits for the terminal command.
//!
//! The counters themselves take any distance; these limits only keep a
//! command from freezing the game tab or running out of stack.

use crate::steps::Distance;

pub const DEFAULT_STEP_SIZES: [i64; 2] = [1, 2];

// The naive counter doubles its work with every extra stair.
pub const NAIVE_DISTANCE_LIMIT: Distance = 32;
pub const STAIRS_DISTANCE_LIMIT: Distance = NAIVE_DISTANCE_LIMIT;

// Bounded by recursion depth, not time.
pub const MEMOIZED_DISTANCE_LIMIT: Distance = 2_000;

/// Stair counts printed by `demo`.
pub const DEMO_STAIRS: [Distance; 3] = [4, 5, 6];

/// `(distance, steps)` pairs printed by `demo`, all small enough for the
/// naive counter.
pub const DEMO_NAIVE: [(Distance, &[u64]); 4] =
    [(4, &[1, 2]), (5, &[1, 2]), (6, &[1, 2]), (6, &[1, 2, 3])];

/// `(distance, steps)` pairs printed by `demo` that only the memoized counter
/// can finish.
pub const DEMO_MEMOIZED: [(Distance, &[u64]); 2] = [(60, &[1, 2]), (30, &[1, 2, 3])];
