//! Registry of raw sub-corpora the builder knows how to resolve.
//!
//! A descriptor names sub-corpora by opaque identifier; the registry maps
//! each identifier to the language pairs it actually provides. Download
//! locations and archive layouts are owned by the fetch layer, not here.

use serde::Serialize;

use crate::descriptor::LanguagePair;

/// Whether a sub-corpus is training data or a held-out news set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubCorpusKind {
    Training,
    Evaluation,
}

/// One named raw parallel-text resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SubCorpus {
    pub name: &'static str,
    pub kind: SubCorpusKind,
    pub target: &'static str,
    /// Source languages the resource offers against `target`.
    pub sources: &'static [&'static str],
    /// Requires the user to fetch the archive after accepting a licence.
    pub manual_download: bool,
}

impl SubCorpus {
    const fn training(name: &'static str, sources: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: SubCorpusKind::Training,
            target: "en",
            sources,
            manual_download: false,
        }
    }

    const fn evaluation(name: &'static str, sources: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: SubCorpusKind::Evaluation,
            target: "en",
            sources,
            manual_download: false,
        }
    }

    const fn manual(self) -> Self {
        Self {
            manual_download: true,
            ..self
        }
    }

    /// Returns true if this resource provides text for `pair`.
    pub fn covers(&self, pair: &LanguagePair) -> bool {
        pair.target == self.target && self.sources.iter().any(|s| pair.source == *s)
    }
}

const BUILTIN: &[SubCorpus] = &[
    // Training corpora.
    SubCorpus::training("europarl_v7", &["cs", "de", "fr"]),
    SubCorpus::training("europarl_v8", &["fi"]),
    SubCorpus::training("commoncrawl", &["cs", "de", "fr", "ru"]),
    SubCorpus::training("multiun", &["fr"]),
    SubCorpus::training("newscommentary_v10", &["cs", "de", "fr", "ru"]),
    SubCorpus::training("gigafren", &["fr"]),
    SubCorpus::training("czeng_10", &["cs"]).manual(),
    SubCorpus::training("yandexcorpus", &["ru"]).manual(),
    SubCorpus::training("wikiheadlines_fi", &["fi"]),
    SubCorpus::training("wikiheadlines_ru", &["ru"]),
    // News dev and test sets.
    SubCorpus::evaluation("newsdev2014", &["hi"]),
    SubCorpus::evaluation("newsdev2015", &["fi"]),
    SubCorpus::evaluation("newsdiscussdev2015", &["fr"]),
    SubCorpus::evaluation("newssyscomb2009", &["cs", "de", "fr"]),
    SubCorpus::evaluation("newstest2008", &["cs", "de", "fr"]),
    SubCorpus::evaluation("newstest2009", &["cs", "de", "fr"]),
    SubCorpus::evaluation("newstest2010", &["cs", "de", "fr"]),
    SubCorpus::evaluation("newstest2011", &["cs", "de", "fr"]),
    SubCorpus::evaluation("newstest2012", &["cs", "de", "fr", "ru"]),
    SubCorpus::evaluation("newstest2013", &["cs", "de", "fr", "ru"]),
    SubCorpus::evaluation("newstest2014", &["cs", "de", "fr", "ru", "hi"]),
    SubCorpus::evaluation("newstest2015", &["cs", "de", "fi", "fr", "ru"]),
];

/// A lookup table of known sub-corpora.
#[derive(Clone, Copy, Debug)]
pub struct SubCorpusRegistry {
    entries: &'static [SubCorpus],
}

impl SubCorpusRegistry {
    /// A registry over a caller-provided table.
    pub const fn new(entries: &'static [SubCorpus]) -> Self {
        Self { entries }
    }

    /// The registry of every sub-corpus used by the WMT news tasks
    /// described in this crate.
    pub const fn builtin() -> Self {
        Self::new(BUILTIN)
    }

    pub fn lookup(&self, name: &str) -> Option<&'static SubCorpus> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static SubCorpus> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SubCorpusRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
