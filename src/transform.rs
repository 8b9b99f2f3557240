use crate::TimelineError;
use chrono::prelude::*;

pub const DAYS_PER_YEAR: f64 = 365.25;

pub const TICK_FIRST_YEAR: i32 = 1998;
pub const TICK_STEP_YEARS: usize = 3;

/// Fractional years from `from` to `to`.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    to.signed_duration_since(from).num_days() as f64 / DAYS_PER_YEAR
}

/// Maps a date to its x position on the compressed time axis.
/// Recent dates land near zero and older dates drift further negative,
/// so the latest years get most of the horizontal space.
/// The +1 offset keeps the logarithm defined at the reference date itself;
/// dates past the reference leave its domain and are rejected instead of
/// clamped, an interval reaching into the future is bad input data.
pub fn log_position(date: NaiveDate, reference: NaiveDate) -> Result<f64, TimelineError> {
    if date > reference {
        return Err(TimelineError::Domain { date, reference });
    }
    let years_ago = years_between(date, reference);
    Ok(-(years_ago + 1.0).ln())
}

/// One labelled tick on the nonlinear time axis.
#[derive(Debug, Clone)]
pub struct AxisTick {
    pub position: f64,
    pub year: i32,
}

/// Rebuilds the axis labels for the nonlinear scale: every third year from
/// 1998 up to the reference year, each mapped through the same transform
/// and the same reference date as the data, paired with the literal year.
pub fn axis_ticks(reference: NaiveDate) -> Result<Vec<AxisTick>, TimelineError> {
    let mut ticks = Vec::new();
    for year in (TICK_FIRST_YEAR..=reference.year()).step_by(TICK_STEP_YEARS) {
        let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        ticks.push(AxisTick {
            position: log_position(jan1, reference)?,
            year,
        });
    }
    Ok(ticks)
}
