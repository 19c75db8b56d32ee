//! Text encoding strategies a dataset variant can request.

use serde::Serialize;
use std::fmt;

/// The tokenization scheme applied to text before it reaches consumers.
///
/// The encoding engine itself lives with the builder; this type only names
/// which engine configuration a dataset variant asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EncodingStrategy {
    /// Raw text, no vocabulary.
    PlainText,
    /// A learned subword vocabulary of a fixed size.
    SubwordVocabulary {
        name: &'static str,
        vocab_size: u32,
    },
}

impl EncodingStrategy {
    /// Returns the encoder name, if any. Plain text has none.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            EncodingStrategy::PlainText => None,
            EncodingStrategy::SubwordVocabulary { name, .. } => Some(*name),
        }
    }

    /// Returns the vocabulary size, if any.
    pub fn vocab_size(&self) -> Option<u32> {
        match self {
            EncodingStrategy::PlainText => None,
            EncodingStrategy::SubwordVocabulary { vocab_size, .. } => Some(*vocab_size),
        }
    }

    pub fn is_plain_text(&self) -> bool {
        matches!(self, EncodingStrategy::PlainText)
    }

    /// Short label used by the CLI filter (`plain` or `subwords`).
    pub fn kind_label(&self) -> &'static str {
        match self {
            EncodingStrategy::PlainText => "plain",
            EncodingStrategy::SubwordVocabulary { .. } => "subwords",
        }
    }
}

impl fmt::Display for EncodingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingStrategy::PlainText => write!(f, "plain text"),
            EncodingStrategy::SubwordVocabulary { name, vocab_size } => {
                write!(f, "{} (vocab size {})", name, vocab_size)
            }
        }
    }
}
