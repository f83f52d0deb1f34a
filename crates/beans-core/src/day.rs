//! Calendar-day arithmetic.
//!
//! Timestamps are stored in UTC; streaks and "today" are judged at
//! calendar-day granularity in the user's timezone. The offset is captured
//! once at startup and passed explicitly so tests can pin it.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveTime, Offset, TimeZone, Utc};

/// The current local UTC offset.
pub fn local_offset() -> FixedOffset {
    Local::now().offset().fix()
}

/// Calendar day of a timestamp in the given offset.
pub fn day_of(ts: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    ts.with_timezone(&offset).date_naive()
}

/// Half-open UTC range `[start, end)` covering one local calendar day.
pub fn day_bounds(day: NaiveDate, offset: FixedOffset) -> (DateTime<Utc>, DateTime<Utc>) {
    let midnight_local = day.and_time(NaiveTime::MIN);
    let naive_utc = midnight_local - Duration::seconds(i64::from(offset.local_minus_utc()));
    let start = Utc.from_utc_datetime(&naive_utc);
    (start, start + Duration::days(1))
}

/// The day before `day`, if representable.
pub fn yesterday(day: NaiveDate) -> Option<NaiveDate> {
    day.pred_opt()
}
