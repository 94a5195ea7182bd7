use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::CoreError;
use crate::models::chart::{TimeSeriesPoint, MONTH_NAMES};

/// Number of points in a generated performance series: the current month
/// plus the six before it.
pub const SERIES_MONTHS: usize = 7;

/// Generates the portfolio performance series: a trailing 7-month window of
/// monthly values with a realistic growth shape, plus the derived
/// period-over-period returns.
///
/// The RNG is injected so callers control reproducibility: the live
/// dashboard seeds from entropy, tests pin a seed (or substitute a
/// constant-output RNG) and get bit-identical series.
pub struct SeriesGenerator<R: Rng = StdRng> {
    rng: R,
}

impl SeriesGenerator<StdRng> {
    /// Generator seeded from OS entropy. Every series differs.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed. Same seed, same series.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeriesGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SeriesGenerator<R> {
    /// Generator over an arbitrary RNG.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate the series ending at `current_month0` (zero-based calendar
    /// month, 0 = January) and starting from `baseline`.
    ///
    /// Rules:
    /// - Labels are the 7 consecutive calendar months ending at the current
    ///   month, wrapping across the year boundary.
    /// - The first value is the baseline; each later value moves by a
    ///   uniform random -2% to +6% of its predecessor, rounded to cents.
    /// - `period_return` is the percent change from the previous point,
    ///   rounded to one decimal; `0.0` for the first point.
    ///
    /// Out-of-range month or non-positive baseline is a programmer error
    /// and returns `InvalidArgument`.
    pub fn generate(
        &mut self,
        current_month0: u32,
        baseline: f64,
    ) -> Result<Vec<TimeSeriesPoint>, CoreError> {
        if current_month0 > 11 {
            return Err(CoreError::InvalidArgument(format!(
                "month index must be 0..=11, got {current_month0}"
            )));
        }
        if !baseline.is_finite() || baseline <= 0.0 {
            return Err(CoreError::InvalidArgument(format!(
                "baseline must be a positive number, got {baseline}"
            )));
        }

        let mut points = Vec::with_capacity(SERIES_MONTHS);
        let mut value = round2(baseline);
        points.push(TimeSeriesPoint::new(month_label(current_month0, 0), value, 0.0));

        for i in 1..SERIES_MONTHS {
            let prev = value;
            let r: f64 = self.rng.gen();
            // -2% to +6% of the previous value
            let change = (r * 0.08 - 0.02) * prev;
            // Clamp: a string of worst-case months on a small baseline must
            // not push the series below zero.
            value = round2(prev + change).max(0.0);
            // A sub-cent baseline rounds to zero; there is no return from zero.
            let period_return = if prev > 0.0 {
                round1((value - prev) / prev * 100.0)
            } else {
                0.0
            };
            points.push(TimeSeriesPoint::new(
                month_label(current_month0, i),
                value,
                period_return,
            ));
        }

        Ok(points)
    }
}

/// Label of the i-th point of a series ending at `current_month0`.
/// Point 0 is six months back, point 6 is the current month; adding 6 is
/// the same as subtracting 6 mod 12 and keeps the arithmetic unsigned.
fn month_label(current_month0: u32, i: usize) -> &'static str {
    MONTH_NAMES[(current_month0 as usize + 6 + i) % 12]
}

/// Round to 2 decimal places (monetary values).
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Round to 1 decimal place (percent returns).
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
