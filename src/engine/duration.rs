//! `"HH:mm"` duration codec.
//!
//! Durations are integer minutes everywhere inside the engine; the text
//! form exists only at the serialization boundary. Hours have no upper
//! bound because monthly totals routinely exceed 24h.

use crate::engine::error::EngineError;

/// Parses `"HH:mm"` into minutes. Minutes must be exactly two digits in
/// [0, 59]; hours are any non-negative integer.
pub fn parse(text: &str) -> Result<i64, EngineError> {
    let malformed = || EngineError::MalformedDuration {
        text: text.to_string(),
    };

    let (hours, minutes) = text.split_once(':').ok_or_else(malformed)?;
    if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    if minutes.len() != 2 || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let hours: i64 = hours.parse().map_err(|_| malformed())?;
    let minutes: i64 = minutes.parse().map_err(|_| malformed())?;
    if minutes > 59 {
        return Err(malformed());
    }

    Ok(hours * 60 + minutes)
}

/// Formats minutes as `"HH:mm"`, zero-padding both fields. The model
/// never carries a negative duration (debit/credit sign lives in which
/// bucket the minutes occupy), so negative input is a bug upstream.
pub fn format(minutes: i64) -> Result<String, EngineError> {
    if minutes < 0 {
        return Err(EngineError::InvalidDuration { minutes });
    }
    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_durations() {
        assert_eq!(parse("08:00").unwrap(), 480);
        assert_eq!(parse("00:45").unwrap(), 45);
        assert_eq!(parse("0:05").unwrap(), 5);
    }

    #[test]
    fn hours_have_no_upper_bound() {
        // monthly totals
        assert_eq!(parse("171:30").unwrap(), 171 * 60 + 30);
    }

    #[test]
    fn rejects_malformed_text() {
        for text in ["", "08", "08:5", "08:60", "08:0a", "-1:00", "8h30", ":30", "08:123"] {
            assert!(
                matches!(parse(text), Err(EngineError::MalformedDuration { .. })),
                "expected rejection of {text:?}"
            );
        }
    }

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(format(0).unwrap(), "00:00");
        assert_eq!(format(45).unwrap(), "00:45");
        assert_eq!(format(540).unwrap(), "09:00");
        assert_eq!(format(171 * 60 + 5).unwrap(), "171:05");
    }

    #[test]
    fn rejects_negative_minutes() {
        assert_eq!(
            format(-1),
            Err(EngineError::InvalidDuration { minutes: -1 })
        );
    }

    #[test]
    fn round_trips() {
        for m in [0, 1, 59, 60, 61, 479, 480, 1440, 1441, 10_000, 100_000] {
            assert_eq!(parse(&format(m).unwrap()).unwrap(), m);
        }
    }
}
