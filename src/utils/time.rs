use anyhow::{Result, bail};
use chrono::{DateTime, Utc};

/// Convert fractional Unix epoch seconds (as found in the export, e.g.
/// `1683712597.463997`) to a UTC datetime.
pub fn datetime_from_epoch_secs(secs: f64) -> Result<DateTime<Utc>> {
    if !secs.is_finite() || secs < 0.0 {
        bail!("Epoch timestamp out of range: {}", secs);
    }

    let whole = secs.trunc() as i64;
    let nanos = (secs.fract() * 1_000_000_000.0).round() as u32;
    match DateTime::from_timestamp(whole, nanos.min(999_999_999)) {
        Some(dt) => Ok(dt),
        None => bail!("Epoch timestamp out of range: {}", secs),
    }
}

/// Shorten an ISO-8601 timestamp to `yy-mm-dd` for launcher subtitles.
/// Input shorter than a full date is returned unchanged.
pub fn iso_short_date(iso: &str) -> String {
    if iso.len() >= 10 && iso.is_char_boundary(2) && iso.is_char_boundary(10) {
        iso[2..10].to_string()
    } else {
        iso.to_string()
    }
}
