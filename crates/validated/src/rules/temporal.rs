//! Date and time rules.
//!
//! Every rule compares against "now" read from a [`Clock`] at evaluation
//! time, so a container holding a date can go stale while its value stays
//! the same. Call [`Validated::validate`](crate::Validated::validate) to
//! re-judge it.
//!
//! The `*_day` rules compare calendar days in the value's own time zone.

use chrono::{DateTime, TimeZone, Utc};

use crate::foundation::Rule;

/// Source of the current instant.
pub trait Clock: Send + Sync + 'static {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

// ============================================================================
// INSTANTS
// ============================================================================

/// Value lies after now.
#[must_use]
pub fn is_future<Tz: TimeZone + 'static>() -> Rule<DateTime<Tz>> {
    is_future_at(SystemClock)
}

/// Value lies after `clock.now()`.
#[must_use]
pub fn is_future_at<Tz: TimeZone + 'static>(clock: impl Clock) -> Rule<DateTime<Tz>> {
    Rule::new("is_future", move |value: &DateTime<Tz>| {
        value.with_timezone(&Utc) > clock.now()
    })
}

/// Value lies before now.
#[must_use]
pub fn is_past<Tz: TimeZone + 'static>() -> Rule<DateTime<Tz>> {
    is_past_at(SystemClock)
}

/// Value lies before `clock.now()`.
#[must_use]
pub fn is_past_at<Tz: TimeZone + 'static>(clock: impl Clock) -> Rule<DateTime<Tz>> {
    Rule::new("is_past", move |value: &DateTime<Tz>| {
        value.with_timezone(&Utc) < clock.now()
    })
}

/// Value is exactly now. Only useful with a [`FixedClock`].
#[must_use]
pub fn is_now<Tz: TimeZone + 'static>() -> Rule<DateTime<Tz>> {
    is_now_at(SystemClock)
}

/// Value equals `clock.now()`.
#[must_use]
pub fn is_now_at<Tz: TimeZone + 'static>(clock: impl Clock) -> Rule<DateTime<Tz>> {
    Rule::new("is_now", move |value: &DateTime<Tz>| {
        value.with_timezone(&Utc) == clock.now()
    })
}

// ============================================================================
// CALENDAR DAYS
// ============================================================================

/// Orders the value's calendar day against today's, both in the value's zone.
fn compare_day<Tz: TimeZone>(value: &DateTime<Tz>, now: DateTime<Utc>) -> std::cmp::Ordering {
    let today = now.with_timezone(&value.timezone()).date_naive();
    value.date_naive().cmp(&today)
}

/// Value falls on a later calendar day than today.
#[must_use]
pub fn is_future_day<Tz: TimeZone + 'static>() -> Rule<DateTime<Tz>> {
    is_future_day_at(SystemClock)
}

/// Value falls on a later calendar day than `clock.now()`.
#[must_use]
pub fn is_future_day_at<Tz: TimeZone + 'static>(clock: impl Clock) -> Rule<DateTime<Tz>> {
    Rule::new("is_future_day", move |value: &DateTime<Tz>| {
        compare_day(value, clock.now()).is_gt()
    })
}

/// Value falls on an earlier calendar day than today.
#[must_use]
pub fn is_past_day<Tz: TimeZone + 'static>() -> Rule<DateTime<Tz>> {
    is_past_day_at(SystemClock)
}

/// Value falls on an earlier calendar day than `clock.now()`.
#[must_use]
pub fn is_past_day_at<Tz: TimeZone + 'static>(clock: impl Clock) -> Rule<DateTime<Tz>> {
    Rule::new("is_past_day", move |value: &DateTime<Tz>| {
        compare_day(value, clock.now()).is_lt()
    })
}

/// Value falls on today.
#[must_use]
pub fn is_same_day<Tz: TimeZone + 'static>() -> Rule<DateTime<Tz>> {
    is_same_day_at(SystemClock)
}

/// Value falls on the calendar day of `clock.now()`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use validated::rules::{FixedClock, is_same_day_at};
///
/// let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap());
/// let rule = is_same_day_at(clock);
/// assert!(rule.evaluate(&Utc.with_ymd_and_hms(2024, 3, 10, 23, 59, 0).unwrap()));
/// assert!(!rule.evaluate(&Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap()));
/// ```
#[must_use]
pub fn is_same_day_at<Tz: TimeZone + 'static>(clock: impl Clock) -> Rule<DateTime<Tz>> {
    Rule::new("is_same_day", move |value: &DateTime<Tz>| {
        compare_day(value, clock.now()).is_eq()
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset};

    use super::*;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_future_and_past() {
        let clock = FixedClock(noon());
        let future = is_future_at::<Utc>(clock);
        let past = is_past_at::<Utc>(clock);

        assert!(future.evaluate(&(noon() + Duration::seconds(1))));
        assert!(!future.evaluate(&noon()));
        assert!(past.evaluate(&(noon() - Duration::seconds(1))));
        assert!(!past.evaluate(&noon()));
    }

    #[test]
    fn test_is_now() {
        let rule = is_now_at::<Utc>(FixedClock(noon()));
        assert!(rule.evaluate(&noon()));
        assert!(!rule.evaluate(&(noon() + Duration::milliseconds(1))));
    }

    #[test]
    fn test_day_granularity() {
        let clock = FixedClock(noon());
        let later_today = noon() + Duration::hours(11);
        let tomorrow = noon() + Duration::hours(13);
        let yesterday = noon() - Duration::hours(13);

        assert!(is_same_day_at::<Utc>(clock).evaluate(&later_today));
        assert!(!is_future_day_at::<Utc>(clock).evaluate(&later_today));
        assert!(is_future_day_at::<Utc>(clock).evaluate(&tomorrow));
        assert!(is_past_day_at::<Utc>(clock).evaluate(&yesterday));
        assert!(!is_past_day_at::<Utc>(clock).evaluate(&later_today));
    }

    #[test]
    fn test_day_uses_value_zone() {
        // 23:00 UTC on the 10th is already the 11th in UTC+2.
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 10, 23, 0, 0).unwrap());
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let value = plus_two.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap();

        assert!(is_same_day_at::<FixedOffset>(clock).evaluate(&value));
    }

    #[test]
    fn test_closure_clock() {
        let rule = is_past_at::<Utc>(noon);
        assert!(rule.evaluate(&(noon() - Duration::days(1))));
    }

    #[test]
    fn test_system_clock() {
        let rule = is_past::<Utc>();
        assert!(rule.evaluate(&(Utc::now() - Duration::days(1))));
        assert!(is_future::<Utc>().evaluate(&(Utc::now() + Duration::days(1))));
    }
}
