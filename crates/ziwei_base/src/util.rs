//! Shared index-space utilities.

use crate::branch::EarthlyBranch;
use crate::error::BaseError;

/// Mathematical modulo: the result is always in `[0, m)` for `m > 0`,
/// including for negative `n`.
///
/// # Panics
/// Panics if `m == 0`.
pub const fn modulo(n: i32, m: i32) -> i32 {
    n.rem_euclid(m)
}

/// Map a clock hour to its double-hour branch (时辰).
///
/// Bins are two hours wide starting at 01:00: [01,03) is 丑, [03,05) is 寅,
/// and so on. Both [23:00, 24:00) and [00:00, 01:00) map to 子.
/// Fractional hours are accepted (23.5 is 子).
pub fn hour_to_branch(hour: f64) -> Result<EarthlyBranch, BaseError> {
    if !hour.is_finite() {
        return Err(BaseError::invalid("hour", format!("{hour} is not finite")));
    }
    if !(0.0..24.0).contains(&hour) {
        return Err(BaseError::invalid("hour", format!("{hour} is outside 0..24")));
    }
    let whole = hour.floor() as u8;
    Ok(EarthlyBranch::from_index((whole + 1) / 2))
}
