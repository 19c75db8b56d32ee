//! Language codes and language pairs.
//!
//! Codes are two-letter ISO 639-1 strings held as `&'static str` so that
//! whole descriptor tables can live in `static` items.

use serde::Serialize;
use std::fmt;

/// A language code such as `"de"` or `"en"`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(&'static str);

impl LanguageCode {
    /// Creates a new LanguageCode.
    #[inline]
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    /// Returns the underlying code.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LanguageCode({})", self.0)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An ordered (source, target) language pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LanguagePair {
    pub source: LanguageCode,
    pub target: LanguageCode,
}

impl LanguagePair {
    /// Creates a new pair translating from `source` into `target`.
    pub const fn new(source: &'static str, target: &'static str) -> Self {
        Self {
            source: LanguageCode::new(source),
            target: LanguageCode::new(target),
        }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_displays_as_source_dash_target() {
        let pair = LanguagePair::new("fi", "en");
        assert_eq!(pair.to_string(), "fi-en");
    }

    #[test]
    fn code_compares_with_str() {
        let code = LanguageCode::new("ru");
        assert_eq!(code, "ru");
        assert_eq!(format!("{:?}", code), "LanguageCode(ru)");
    }
}
