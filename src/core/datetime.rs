//! Relative date resolution.
//!
//! Turns short phrases such as `tomorrow`, `friday`, `next friday` or
//! `in 3 days` into calendar dates. Phrases are first classified into a
//! [`DatePhrase`] and then resolved against an explicit "today", which keeps
//! the arithmetic testable without touching the system clock.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

static RELATIVE_OFFSET: Lazy<Regex> = Lazy::new(|| {
    // "in 3 days", "in 1 day", "in 2 weeks"
    Regex::new(r"^in (\d+) (day|days|week|weeks)$")
        .unwrap_or_else(|e| panic!("Invalid relative offset regex: {e}"))
});

static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap_or_else(|e| panic!("Invalid ISO date regex: {e}"))
});

const MAX_YEAR: i32 = 9999;

/// A recognized date phrase, before it is anchored to a particular day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePhrase {
    /// `today`
    Today,
    /// `tomorrow`
    Tomorrow,
    /// `next week`: seven days out.
    NextWeek,
    /// `in N day(s)`, N > 0.
    InDays(u32),
    /// `in N week(s)`, N > 0.
    InWeeks(u32),
    /// A bare weekday name. Resolves to today when today is that weekday.
    Weekday(Weekday),
    /// `next <weekday>`: the occurrence in the following week.
    NextWeekday(Weekday),
    /// An explicit `YYYY-MM-DD` date.
    Absolute(NaiveDate),
}

impl DatePhrase {
    /// Classify a phrase. Case and surrounding/inner whitespace runs are ignored.
    ///
    /// Returns `None` when the phrase is not a date, which callers treat as
    /// "keep this text as-is" rather than as an error.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        match normalized.as_str() {
            "today" => return Some(Self::Today),
            "tomorrow" => return Some(Self::Tomorrow),
            "next week" => return Some(Self::NextWeek),
            _ => {},
        }

        if let Some(caps) = RELATIVE_OFFSET.captures(&normalized) {
            let amount: u32 = caps.get(1)?.as_str().parse().ok()?;
            if amount == 0 {
                return None;
            }
            return match caps.get(2)?.as_str() {
                "day" | "days" => Some(Self::InDays(amount)),
                _ => Some(Self::InWeeks(amount)),
            };
        }

        if let Some(rest) = normalized.strip_prefix("next ") {
            return weekday_from_name(rest).map(Self::NextWeekday);
        }

        if let Some(weekday) = weekday_from_name(&normalized) {
            return Some(Self::Weekday(weekday));
        }

        if ISO_DATE.is_match(&normalized) {
            return NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .ok()
                .map(Self::Absolute);
        }

        None
    }

    /// Anchor this phrase to `today`.
    ///
    /// Returns `None` if the result lies after 9999-12-31, since stored
    /// dates must stay four-digit `YYYY-MM-DD` to sort as text.
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> Option<NaiveDate> {
        let offset = match self {
            Self::Today => 0,
            Self::Tomorrow => 1,
            Self::NextWeek => 7,
            Self::InDays(n) => i64::from(n),
            Self::InWeeks(n) => i64::from(n) * 7,
            Self::Weekday(target) => days_until(today.weekday(), target),
            // The plain occurrence is always within the current 7-day window,
            // so the following week's one is exactly seven days later.
            Self::NextWeekday(target) => days_until(today.weekday(), target) + 7,
            Self::Absolute(date) => return Some(date),
        };
        today
            .checked_add_signed(Duration::days(offset))
            .filter(|date| date.year() <= MAX_YEAR)
    }
}

/// Resolve a phrase against an explicit `today`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use quicktodo::core::resolve_date;
///
/// // 2024-06-14 is a Friday.
/// let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
/// assert_eq!(resolve_date("friday", today), Some(today));
/// assert_eq!(resolve_date("next friday", today), NaiveDate::from_ymd_opt(2024, 6, 21));
/// assert_eq!(resolve_date("xyzzy", today), None);
/// ```
#[must_use]
pub fn resolve_date(phrase: &str, today: NaiveDate) -> Option<NaiveDate> {
    DatePhrase::parse(phrase)?.resolve(today)
}

/// The local calendar date right now.
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Days from `from` forward to the next `target`, 0 if they are the same day.
fn days_until(from: Weekday, target: Weekday) -> i64 {
    (i64::from(target.num_days_from_monday()) - i64::from(from.num_days_from_monday())).rem_euclid(7)
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    let weekday = match name {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}
