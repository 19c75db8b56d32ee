//! A single buildable dataset configuration.

use serde::Serialize;
use std::fmt;

use super::encoding::EncodingStrategy;
use super::lang::LanguagePair;

/// One buildable dataset variant: a language pair plus an encoding.
///
/// Configs are produced by [`super::DatasetFamily::configs`] and never
/// mutated afterwards. The pair `(language_pair, encoding)` is unique
/// within a family, and so is [`DatasetConfig::name`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DatasetConfig {
    /// Human-readable description.
    pub description: &'static str,

    /// Homepage of the corpus family.
    pub source_url: &'static str,

    /// BibTeX citation.
    pub citation: &'static str,

    pub language_pair: LanguagePair,

    pub encoding: EncodingStrategy,

    pub version: &'static str,
}

impl DatasetConfig {
    /// Returns the canonical config name.
    ///
    /// `"de-en"` for plain text, `"de-en.subwords8k"` for a subword
    /// vocabulary named `subwords8k`.
    pub fn name(&self) -> String {
        match self.encoding.name() {
            Some(encoder) => format!("{}.{}", self.language_pair, encoder),
            None => self.language_pair.to_string(),
        }
    }

    /// The identity of this config within its family.
    pub fn key(&self) -> (LanguagePair, EncodingStrategy) {
        (self.language_pair, self.encoding)
    }
}

impl fmt::Display for DatasetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
