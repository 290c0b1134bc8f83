//! Unit tests for sorting error types

#[cfg(test)]
mod tests {
    use crate::media::MediaType;
    use crate::sorting::error::SortError;
    use std::error::Error;

    #[test]
    fn test_kind_mismatch_display() {
        let error = SortError::KindMismatch {
            left: MediaType::Comic,
            right: MediaType::Video,
        };
        assert_eq!(
            error.to_string(),
            "Cannot compare comic with video; partition entities by kind first"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_unknown_key_display() {
        let error = SortError::UnknownKey("colour".to_string());
        assert_eq!(error.to_string(), "Unknown ranking key: colour");
    }

    #[test]
    fn test_unknown_key_pattern() {
        match SortError::UnknownKey("x".into()) {
            SortError::UnknownKey(s) => assert_eq!(s, "x"),
            _ => panic!("Expected UnknownKey variant"),
        }
    }
}
