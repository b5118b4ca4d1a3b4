//! Presentation helpers for file metadata.
//!
//! A single classification table maps MIME types to a [`FileKind`], and the
//! kind drives every presentation concern — validation, label, icon, and
//! badge style — so they can never drift apart.

use chrono::{DateTime, NaiveDateTime};

/// The MIME types accepted for upload, exactly.
pub const SUPPORTED_MIME_TYPES: [&str; 5] = [
    "application/pdf",
    "video/mp4",
    "image/jpeg",
    "image/jpg",
    "image/png",
];

/// Extension filter for file-picker controls.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.mp4,.jpg,.jpeg,.png";

/// The classification table. Shared by [`FileKind::from_mime`] and
/// [`is_supported_mime`].
const CLASSIFICATION: [(&str, FileKind); 5] = [
    ("application/pdf", FileKind::Pdf),
    ("video/mp4", FileKind::Video),
    ("image/jpeg", FileKind::Image),
    ("image/jpg", FileKind::Image),
    ("image/png", FileKind::Image),
];

/// Display classification of a MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// PDF document.
    Pdf,
    /// MP4 video.
    Video,
    /// Image of any subtype.
    Image,
    /// Anything else; renders with a generic presentation, never fails.
    Unknown,
}

impl FileKind {
    /// Classify a MIME type.
    ///
    /// Exact table lookup for the supported types; any other MIME type
    /// containing `"image"` classifies as [`FileKind::Image`], everything
    /// else as [`FileKind::Unknown`].
    pub fn from_mime(mime_type: &str) -> Self {
        if let Some((_, kind)) = CLASSIFICATION.iter().find(|(mime, _)| *mime == mime_type) {
            return *kind;
        }
        if mime_type.contains("image") {
            FileKind::Image
        } else {
            FileKind::Unknown
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::Video => "Video",
            FileKind::Image => "Image",
            FileKind::Unknown => "Unknown",
        }
    }

    /// Display glyph.
    pub fn icon(self) -> &'static str {
        match self {
            FileKind::Pdf => "📄",
            FileKind::Video => "🎥",
            FileKind::Image => "🖼️",
            FileKind::Unknown => "📎",
        }
    }

    /// Badge style for file cards.
    pub fn badge(self) -> BadgeVariant {
        match self {
            FileKind::Pdf => BadgeVariant::Destructive,
            FileKind::Video => BadgeVariant::Default,
            FileKind::Image => BadgeVariant::Secondary,
            FileKind::Unknown => BadgeVariant::Outline,
        }
    }
}

/// Badge style variants for file cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Red badge (PDF).
    Destructive,
    /// Primary badge (video).
    Default,
    /// Muted badge (image).
    Secondary,
    /// Outlined badge (unknown).
    Outline,
}

/// True iff the MIME type is exactly one of the supported values.
pub fn is_supported_mime(mime_type: &str) -> bool {
    SUPPORTED_MIME_TYPES.contains(&mime_type)
}

/// Format a byte count using the largest fitting unit in
/// `{Bytes, KB, MB, GB}` (base 1024).
///
/// Values are rounded to two decimals with trailing zeros trimmed, and zero
/// formats as `"0 Bytes"` exactly:
///
/// ```
/// use course_content_client::media::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(2_097_152), "2 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    // Clamped so sizes beyond 1 TB still render in GB.
    let exponent = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024_f64.powi(exponent as i32);

    let mut value = format!("{:.2}", scaled);
    while value.ends_with('0') {
        value.pop();
    }
    if value.ends_with('.') {
        value.pop();
    }

    format!("{} {}", value, UNITS[exponent])
}

/// Render an ISO-8601 timestamp as `"Aug 6, 2026, 02:30 PM"`.
///
/// Accepts RFC-3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS` values as the
/// backend emits them. Unparseable input is returned unchanged so
/// presentation never fails.
pub fn format_upload_date(raw: &str) -> String {
    const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("application/pdf", FileKind::Pdf)]
    #[test_case("video/mp4", FileKind::Video)]
    #[test_case("image/jpeg", FileKind::Image)]
    #[test_case("image/jpg", FileKind::Image)]
    #[test_case("image/png", FileKind::Image)]
    #[test_case("image/webp", FileKind::Image; "unsupported image subtypes still classify as image")]
    #[test_case("text/plain", FileKind::Unknown)]
    #[test_case("application/zip", FileKind::Unknown)]
    fn test_classification(mime_type: &str, expected: FileKind) {
        assert_eq!(FileKind::from_mime(mime_type), expected);
    }

    #[test]
    fn test_supported_set_is_exact() {
        for mime_type in SUPPORTED_MIME_TYPES {
            assert!(is_supported_mime(mime_type));
        }
        // Classifies as Image but is not accepted for upload.
        assert!(!is_supported_mime("image/webp"));
        assert!(!is_supported_mime("text/plain"));
        assert!(!is_supported_mime(""));
    }

    #[test]
    fn test_label_icon_badge_agree_with_classification() {
        let kind = FileKind::from_mime("image/webp");
        assert_eq!(kind.label(), "Image");
        assert_eq!(kind.icon(), "🖼️");
        assert_eq!(kind.badge(), BadgeVariant::Secondary);

        assert_eq!(FileKind::Unknown.label(), "Unknown");
        assert_eq!(FileKind::Unknown.icon(), "📎");
        assert_eq!(FileKind::Unknown.badge(), BadgeVariant::Outline);
    }

    #[test_case(0, "0 Bytes")]
    #[test_case(1, "1 Bytes")]
    #[test_case(500, "500 Bytes")]
    #[test_case(1023, "1023 Bytes")]
    #[test_case(1024, "1 KB")]
    #[test_case(1536, "1.5 KB")]
    #[test_case(2_097_152, "2 MB")]
    #[test_case(2_202_009, "2.1 MB")]
    #[test_case(1_073_741_824, "1 GB")]
    #[test_case(1_649_267_441_664, "1536 GB"; "beyond a terabyte stays in gigabytes")]
    fn test_format_file_size(bytes: u64, expected: &str) {
        assert_eq!(format_file_size(bytes), expected);
    }

    #[test]
    fn test_format_file_size_round_trips_within_rounding() {
        for bytes in [1u64, 999, 4096, 52_428_800, 7_340_032_000] {
            let formatted = format_file_size(bytes);
            let (value, unit) = formatted.split_once(' ').unwrap();
            let value: f64 = value.parse().unwrap();
            let factor = match unit {
                "Bytes" => 1.0,
                "KB" => 1024.0,
                "MB" => 1024.0 * 1024.0,
                "GB" => 1024.0 * 1024.0 * 1024.0,
                other => panic!("unexpected unit: {}", other),
            };
            let relative_error = (value * factor - bytes as f64).abs() / bytes as f64;
            assert!(relative_error < 0.01, "{} formatted as {}", bytes, formatted);
        }
    }

    #[test]
    fn test_format_upload_date() {
        assert_eq!(
            format_upload_date("2026-08-06T14:30:00"),
            "Aug 6, 2026, 02:30 PM"
        );
        assert_eq!(
            format_upload_date("2025-11-03T09:15:00.123"),
            "Nov 3, 2025, 09:15 AM"
        );
        assert_eq!(
            format_upload_date("2025-01-01T00:05:00Z"),
            "Jan 1, 2025, 12:05 AM"
        );
    }

    #[test]
    fn test_format_upload_date_passes_through_garbage() {
        assert_eq!(format_upload_date("yesterday"), "yesterday");
        assert_eq!(format_upload_date(""), "");
    }
}
