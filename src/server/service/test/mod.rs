
use chrono::{NaiveDate, NaiveDateTime};

/// Builds a fixed local timestamp for deterministic comparisons.
fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}
