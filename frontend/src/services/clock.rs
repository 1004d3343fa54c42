use chrono::{Local, NaiveDateTime};

/// Current wall-clock time in the browser's time zone
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
