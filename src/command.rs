use clap::{
    Args,
    Parser,
};
use itertools::Itertools as _;
use log::{
    info,
    warn,
};

use crate::{
    config::{
        DEFAULT_STEP_SIZES,
        DEMO_MEMOIZED,
        DEMO_NAIVE,
        DEMO_STAIRS,
        MEMOIZED_DISTANCE_LIMIT,
        NAIVE_DISTANCE_LIMIT,
        STAIRS_DISTANCE_LIMIT,
    },
    counter::{
        count_memoized,
        count_memoized_with_stats,
        count_naive,
        count_stairs,
        MemoStats,
        Strategy,
    },
    error::StepError,
    steps::{
        Count,
        Distance,
        StepSet,
    },
};

#[derive(Parser, Debug)]
pub enum AppMode {
    /// Count the ways to cover a distance.
    Count(CountMode),
    /// Run the naive and memoized counters side by side.
    Compare(CompareMode),
    /// Print the worked examples.
    Demo,
}

impl AppMode {
    /// Renders the terminal output for this command. `now` is a millisecond
    /// clock, only read by `compare`.
    pub fn render(
        &self,
        now: impl FnMut() -> f64,
    ) -> Result<String, StepError> {
        use AppMode::*;

        info!("executing {:?}", self);

        match self {
            Count(mode) => mode.render(),
            Compare(mode) => mode.render(now),
            Demo => render_demo(),
        }
    }
}

#[derive(Args, Debug)]
pub struct CountMode {
    #[arg(allow_negative_numbers = true)]
    distance: i64,
    #[arg(
        long,
        short,
        num_args = 1..,
        allow_negative_numbers = true,
        default_values_t = DEFAULT_STEP_SIZES
    )]
    steps: Vec<i64>,
    #[arg(long, value_enum, default_value_t = Strategy::Memoized)]
    strategy: Strategy,
    /// Also report how much work the cache saved.
    #[arg(long)]
    stats: bool,
}

impl CountMode {
    pub fn render(&self) -> Result<String, StepError> {
        let (distance, steps) = checked_request(self.distance, &self.steps)?;
        check_limit(distance, self.strategy)?;

        let mut lines = Vec::with_capacity(2);
        if self.strategy == Strategy::Memoized {
            let (count, stats) = count_memoized_with_stats(distance, &steps)?;
            lines.push(count_line(distance, &steps, count));

            if self.stats {
                lines.push(stats_line(&stats));
            }
        }
        else {
            let count = self.strategy.count(distance, &steps)?;
            lines.push(count_line(distance, &steps, count));

            if self.stats {
                lines.push(format!("no cache with {:?}", self.strategy));
            }
        }

        Ok(lines.into_iter().join("\n"))
    }
}

#[derive(Args, Debug)]
pub struct CompareMode {
    #[arg(allow_negative_numbers = true)]
    distance: i64,
    #[arg(
        long,
        short,
        num_args = 1..,
        allow_negative_numbers = true,
        default_values_t = DEFAULT_STEP_SIZES
    )]
    steps: Vec<i64>,
}

impl CompareMode {
    pub fn render(
        &self,
        mut now: impl FnMut() -> f64,
    ) -> Result<String, StepError> {
        let (distance, steps) = checked_request(self.distance, &self.steps)?;
        check_limit(distance, Strategy::Memoized)?;

        let start = now();
        let (memoized, stats) = count_memoized_with_stats(distance, &steps)?;
        let memoized_ms = now() - start;

        let mut lines = vec![
            format!("distance {} with {}", distance, steps),
            format!(
                "  memoized  {: >20}  {: >8.0} ms   {}",
                memoized,
                memoized_ms,
                stats_line(&stats)
            ),
        ];

        match check_limit(distance, Strategy::Naive) {
            Ok(()) => {
                let start = now();
                let naive = count_naive(distance, &steps);
                let naive_ms = now() - start;

                lines.push(format!(
                    "  naive     {: >20}  {: >8.0} ms",
                    naive, naive_ms
                ));
                lines.push(
                    match naive == memoized {
                        true => "  results agree",
                        false => "  results DIFFER",
                    }
                    .to_owned(),
                );
            },
            Err(e) => lines.push(format!("  naive     skipped: {}", e)),
        }

        Ok(lines.into_iter().join("\n"))
    }
}

/// Builds the argv clap sees from the script's arguments.
///
/// Every argument has to convert; one that doesn't is reported by position
/// and value rather than left out, which would shift the rest.
pub fn command_line<T: std::fmt::Debug>(
    program: &str,
    args: impl IntoIterator<Item = T>,
    to_arg: impl Fn(&T) -> Option<String>,
) -> Result<Vec<String>, String> {
    let mut argv = vec![program.to_owned()];

    for (idx, arg) in args.into_iter().enumerate() {
        match to_arg(&arg) {
            Some(arg) => argv.push(arg),
            None => {
                return Err(format!(
                    "argument {} must be a string or a number, got {:?}",
                    idx + 1,
                    arg
                ))
            },
        }
    }

    Ok(argv)
}

fn render_demo() -> Result<String, StepError> {
    let mut lines = vec!["stairs, one or two at a time:".to_owned()];
    lines.extend(
        DEMO_STAIRS
            .iter()
            .map(|d| format!("  {: >3} stairs: {}", d, count_stairs(*d))),
    );

    lines.push("naive, any steps:".to_owned());
    for (distance, sizes) in DEMO_NAIVE.iter() {
        let steps = StepSet::new(sizes.iter().copied())?;
        lines.push(format!(
            "  {}",
            count_line(*distance, &steps, count_naive(*distance, &steps))
        ));
    }

    lines.push("memoized, any steps:".to_owned());
    for (distance, sizes) in DEMO_MEMOIZED.iter() {
        let steps = StepSet::new(sizes.iter().copied())?;
        let count = count_memoized(*distance, &steps)?;
        lines.push(format!("  {}", count_line(*distance, &steps, count)));
    }

    Ok(lines.into_iter().join("\n"))
}

fn checked_request(
    distance: i64,
    sizes: &[i64],
) -> Result<(Distance, StepSet), StepError> {
    if distance < 0 {
        return Err(StepError::NegativeDistance(distance));
    }

    Ok((distance as Distance, StepSet::from_signed(sizes)?))
}

fn distance_limit(strategy: Strategy) -> Distance {
    use Strategy::*;

    match strategy {
        Stairs => STAIRS_DISTANCE_LIMIT,
        Naive => NAIVE_DISTANCE_LIMIT,
        Memoized => MEMOIZED_DISTANCE_LIMIT,
    }
}

fn check_limit(
    distance: Distance,
    strategy: Strategy,
) -> Result<(), StepError> {
    let limit = distance_limit(strategy);

    if limit < distance {
        warn!("refusing {:?} count for distance {}", strategy, distance);
        return Err(StepError::DistanceTooLarge {
            distance,
            limit,
            strategy,
        });
    }

    Ok(())
}

fn count_line(
    distance: Distance,
    steps: &StepSet,
    count: Count,
) -> String {
    format!("{} with {}: {} ways", distance, steps, count)
}

fn stats_line(stats: &MemoStats) -> String {
    format!(
        "({} distances solved, {} cache hits)",
        stats.solved, stats.hits
    )
}
