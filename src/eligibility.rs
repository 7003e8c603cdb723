//! Decides which notifications a client is due, given the current date.
//!
//! Pure functions only; all CRM access and dispatching happen in the runner
//! so the rules can be tested without a mock server.

use chrono::{Datelike, NaiveDate};

use crate::national_id::{Gender, NationalId};

/// Reminder windows before contract expiry, in days. A reminder also fires on
/// every day in the final week (<= 7 days left).
const REMINDER_DAYS: [i64; 2] = [30, 14];
const FINAL_WEEK_DAYS: i64 = 7;

/// A notification the client qualifies for on this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    ContractExpired(NaiveDate),
    ContractExpiringSoon(NaiveDate),
    Birthday,
    WomensDay,
}

/// Absolute day difference between two calendar dates.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days().abs()
}

/// Evaluates all notification rules for one client.
///
/// Contract rules and birthday/holiday rules are independent: a missing
/// contract date does not suppress a birthday match and vice versa. Expiry
/// shadows the expiring-soon window, so a contract can never produce both.
pub fn evaluate(
    contract_end: Option<NaiveDate>,
    national_id: Option<&NationalId>,
    today: NaiveDate,
) -> Vec<Decision> {
    let mut decisions = Vec::new();

    if let Some(end) = contract_end {
        if end < today {
            decisions.push(Decision::ContractExpired(end));
        } else {
            let days = days_between(end, today);
            if REMINDER_DAYS.contains(&days) || days <= FINAL_WEEK_DAYS {
                decisions.push(Decision::ContractExpiringSoon(end));
            }
        }
    }

    if let Some(id) = national_id {
        if (id.birth_month, id.birth_day) == (today.month(), today.day()) {
            decisions.push(Decision::Birthday);
        }
        if id.gender == Gender::Female && today.month() == 3 && today.day() == 8 {
            decisions.push(Decision::WomensDay);
        }
    }

    decisions
}
