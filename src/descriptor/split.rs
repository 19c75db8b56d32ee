//! Split names and the split-to-sub-corpora mapping.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Wmt15Error;

/// A logical data split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitName {
    Train,
    Validation,
    Test,
}

impl SplitName {
    /// All splits in canonical order.
    pub const ALL: [SplitName; 3] = [SplitName::Train, SplitName::Validation, SplitName::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            SplitName::Train => "train",
            SplitName::Validation => "validation",
            SplitName::Test => "test",
        }
    }
}

impl fmt::Display for SplitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitName {
    type Err = Wmt15Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "train" => Ok(SplitName::Train),
            "validation" | "dev" => Ok(SplitName::Validation),
            "test" => Ok(SplitName::Test),
            _ => Err(Wmt15Error::UnknownSplit(s.to_string())),
        }
    }
}

/// Ordered sub-corpus identifiers for each split.
///
/// Identifiers are opaque to this crate's descriptor layer; the builder
/// resolves them through a [`crate::subcorpus::SubCorpusRegistry`]. The
/// declared order is the order in which sub-corpora are concatenated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SplitMap {
    train: &'static [&'static str],
    validation: &'static [&'static str],
    test: &'static [&'static str],
}

impl SplitMap {
    pub const fn new(
        train: &'static [&'static str],
        validation: &'static [&'static str],
        test: &'static [&'static str],
    ) -> Self {
        Self {
            train,
            validation,
            test,
        }
    }

    /// Returns the sub-corpora composing `split`, in declared order.
    pub fn get(&self, split: SplitName) -> &'static [&'static str] {
        match split {
            SplitName::Train => self.train,
            SplitName::Validation => self.validation,
            SplitName::Test => self.test,
        }
    }

    /// Iterates splits in Train, Validation, Test order.
    pub fn iter(&self) -> impl Iterator<Item = (SplitName, &'static [&'static str])> + '_ {
        SplitName::ALL.into_iter().map(move |split| (split, self.get(split)))
    }

    /// Returns the split that lists `sub_corpus`, if any.
    pub fn split_of(&self, sub_corpus: &str) -> Option<SplitName> {
        self.iter()
            .find(|(_, ids)| ids.iter().any(|id| *id == sub_corpus))
            .map(|(split, _)| split)
    }

    /// Total number of identifiers across all splits.
    pub fn len(&self) -> usize {
        self.train.len() + self.validation.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
