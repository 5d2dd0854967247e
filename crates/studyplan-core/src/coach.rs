//! Short encouragement shown alongside the daily plan.

use jiff::civil::Date;
use log::debug;

const MESSAGES: [&str; 3] = [
    "Small steps every day lead to big results.",
    "Consistency beats intensity. Keep going!",
    "You're building a better future for yourself right now.",
];

/// Message for `date`, picked by day of month so it changes daily but is
/// stable within a day.
pub fn motivation(date: Date) -> &'static str {
    let message = MESSAGES[usize::from(date.day().unsigned_abs()) % MESSAGES.len()];
    debug!(target: "coach", "Motivational message served: {message:?}");
    message
}
