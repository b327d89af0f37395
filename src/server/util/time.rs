use chrono::{Local, NaiveDateTime};

/// Returns the current wall-clock time in the server's local timezone.
///
/// The local UTC offset is resolved at call time, not cached, so runs that
/// straddle a DST change compare against the offset in effect for that run.
/// All stored event dates, ban expirations and timestamps share this basis.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
