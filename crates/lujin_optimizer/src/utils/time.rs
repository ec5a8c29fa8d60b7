use jiff::{SignedDuration, Span, SpanRelativeTo};

/// Runs `$block` and logs how long it took at debug level.
#[macro_export]
macro_rules! timer_debug {
    ($msg:literal, $block:expr) => {{
        let started_at = jiff::Timestamp::now();
        let result = $block;
        let elapsed = jiff::Timestamp::now().duration_since(started_at);

        tracing::debug!(?elapsed, $msg);

        result
    }};
}

/// Parses a search budget such as `30s`, `PT1M`, `1m 30s` or a plain number
/// of seconds. Negative budgets are rejected.
pub fn parse_duration(input: &str) -> Result<SignedDuration, String> {
    let input = input.trim();

    let duration = if let Ok(duration) = input.parse::<SignedDuration>() {
        duration
    } else if let Ok(duration) = input
        .parse::<Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        duration
    } else if let Ok(seconds) = input.parse::<i64>() {
        SignedDuration::from_secs(seconds)
    } else {
        return Err(format!("invalid duration `{input}`"));
    };

    if duration.is_negative() {
        return Err(format!("duration `{input}` must not be negative"));
    }

    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_friendly_duration() {
        assert_eq!(parse_duration("30s"), Ok(SignedDuration::from_secs(30)));
    }

    #[test]
    fn test_parse_iso_duration() {
        assert_eq!(parse_duration("PT1M"), Ok(SignedDuration::from_secs(60)));
    }

    #[test]
    fn test_parse_plain_seconds() {
        assert_eq!(parse_duration("45"), Ok(SignedDuration::from_secs(45)));
        assert_eq!(parse_duration(" 5 "), Ok(SignedDuration::from_secs(5)));
    }

    #[test]
    fn test_parse_invalid_duration() {
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn test_parse_negative_duration() {
        assert!(parse_duration("-5").is_err());
    }
}
