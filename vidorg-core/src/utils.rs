//! Utility functions for formatting durations and sizes.
//!
//! Durations inside probe output are written as `HH:MM:SS.fraction`; these
//! helpers convert between that text form and seconds.

/// Formats seconds as `HH:MM:SS.mmm` (e.g., 3723.456 -> "01:02:03.456").
///
/// Zero, negative, and non-finite inputs yield `"00:00:00.000"`. The value is
/// rounded to whole milliseconds before it is split, so 59.9999 becomes
/// `"00:01:00.000"` rather than a 60-second field.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds <= 0.0 || !seconds.is_finite() {
        return "00:00:00.000".to_string();
    }

    let total_millis = (seconds * 1000.0).round() as u64;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let secs = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;
    format!("{hours:02}:{minutes:02}:{secs:02}.{millis:03}")
}

/// Parses an `HH:MM:SS.fraction` string into seconds. Returns None if invalid.
///
/// Matroska duration tags carry nanosecond precision
/// (`00:23:40.045000000`); any number of fractional digits is accepted.
#[must_use]
pub fn parse_duration(time: &str) -> Option<f64> {
    let parts: Vec<&str> = time.trim().split(':').collect();
    if parts.len() == 3 {
        let hours = parts[0].parse::<f64>().ok()?;
        let minutes = parts[1].parse::<f64>().ok()?;
        let seconds = parts[2].parse::<f64>().ok()?;
        Some(hours * 3600.0 + minutes * 60.0 + seconds)
    } else {
        None
    }
}

/// Formats bytes with appropriate binary units (B, KiB, MiB, GiB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Frames per second from a frame count and a duration, rounded to five
/// decimals. Returns 0 when either input is zero.
#[must_use]
pub fn frame_rate(frame_count: u64, duration_secs: f64) -> f64 {
    if frame_count == 0 || duration_secs <= 0.0 || !duration_secs.is_finite() {
        return 0.0;
    }
    let fps = frame_count as f64 / duration_secs;
    (fps * 100_000.0).round() / 100_000.0
}
