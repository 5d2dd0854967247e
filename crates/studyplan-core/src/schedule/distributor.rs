//! Even spreading of a minute budget over a number of days.

use crate::error::{PlannerError, Result};

/// Spread `total_minutes` over `num_days` days.
///
/// Every day receives `total_minutes / num_days`; the remainder is handed out
/// one minute at a time starting from day 0, so earlier days are never lighter
/// than later ones and the shares always sum to `total_minutes`.
///
/// # Errors
///
/// Returns `PlannerError::Division` if `num_days` is zero.
///
/// ```rust
/// use studyplan_core::schedule::distribute;
///
/// assert_eq!(distribute(100, 3).unwrap(), vec![34, 33, 33]);
/// ```
pub fn distribute(total_minutes: u32, num_days: u32) -> Result<Vec<u32>> {
    if num_days == 0 {
        return Err(PlannerError::Division { num_days: 0 });
    }

    let base = total_minutes / num_days;
    let remainder = total_minutes % num_days;

    Ok((0..num_days)
        .map(|day| if day < remainder { base + 1 } else { base })
        .collect())
}
