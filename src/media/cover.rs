use std::fmt;

/// Base URL of the static server that hosts cover images
///
/// Passed explicitly to every cover lookup so entities never consult
/// global settings. An empty base yields root-relative locators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverBase(String);

impl CoverBase {
    #[must_use]
    pub fn new<S: Into<String>>(base: S) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self(base)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CoverBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_trimmed() {
        assert_eq!(CoverBase::new("http://media.local//").as_str(), "http://media.local");
        assert_eq!(CoverBase::new("").as_str(), "");
    }
}
