//! Unit tests for record error types

#[cfg(test)]
mod tests {
    use crate::media::error::RecordError;
    use std::error::Error;

    #[test]
    fn test_invalid_timestamp_display() {
        let error = RecordError::InvalidTimestamp {
            field: "updateTime",
            value: "yesterday".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid timestamp in 'updateTime': yesterday");
    }

    #[test]
    fn test_unknown_media_type_display() {
        let error = RecordError::UnknownMediaType("audio".to_string());
        assert_eq!(error.to_string(), "Unknown media type: audio");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_json_error_conversion_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: RecordError = json_err.into();
        assert!(error.to_string().starts_with("Malformed media record"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_debug() {
        let error = RecordError::UnknownMediaType("x".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownMediaType"));
    }
}
