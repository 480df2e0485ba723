use chrono::prelude::*;

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

pub(crate) fn utc_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// `MM:SS`, minutes keep growing past 99.
pub(crate) fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
