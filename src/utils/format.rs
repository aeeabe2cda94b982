//! Formatting helpers for report output

/// Render a number of seconds as `H:MM:SS`.
///
/// Hours are not wrapped at 24, so long totals stay readable.
///
/// ```
/// use bikeshare_explorer::utils::format::convert_seconds;
///
/// assert_eq!(convert_seconds(3725), "1:02:05");
/// assert_eq!(convert_seconds(59), "0:00:59");
/// ```
pub fn convert_seconds(seconds: u64) -> String {
    let (minutes, secs) = (seconds / 60, seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{hours}:{minutes:02}:{secs:02}")
}

/// Like [`convert_seconds`] for fractional durations; the fraction is dropped
pub fn convert_fractional_seconds(seconds: f64) -> String {
    if seconds.is_finite() && seconds > 0.0 {
        convert_seconds(seconds.trunc() as u64)
    } else {
        convert_seconds(0)
    }
}

/// A line of dashes separating report sections
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}
