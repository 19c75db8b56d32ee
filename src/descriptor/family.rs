//! Generic descriptor for one corpus family.
//!
//! A family is pure data: the builder composes it with a config and a
//! sub-corpus registry rather than specialising a base type per family.

use log::debug;
use serde::Serialize;

use super::config::DatasetConfig;
use super::encoding::EncodingStrategy;
use super::lang::LanguagePair;
use super::split::SplitMap;

/// One encoding variant offered by a family, with its own description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EncodingVariant {
    pub description: &'static str,
    pub encoding: EncodingStrategy,
}

/// Every buildable variant of one corpus family and its split composition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DatasetFamily {
    /// Short family identifier (e.g. `"wmt15"`).
    pub name: &'static str,

    pub version: &'static str,

    pub url: &'static str,

    pub citation: &'static str,

    /// Source language codes, in declaration order.
    pub sources: &'static [&'static str],

    /// Target language code shared by every pair.
    pub target: &'static str,

    /// Encoding variants, in declaration order.
    pub variants: &'static [EncodingVariant],

    /// Split composition shared by every config of the family.
    pub splits: SplitMap,
}

impl DatasetFamily {
    /// Language pairs offered by the family, in source declaration order.
    pub fn language_pairs(&self) -> impl Iterator<Item = LanguagePair> + '_ {
        self.sources
            .iter()
            .copied()
            .map(move |source| LanguagePair::new(source, self.target))
    }

    /// Builds every config of the family.
    ///
    /// Order is variant-major: all configs of the first encoding variant
    /// (in source order), then all configs of the next.
    pub fn configs(&self) -> Vec<DatasetConfig> {
        let mut configs = Vec::with_capacity(self.variants.len() * self.sources.len());
        for variant in self.variants {
            for language_pair in self.language_pairs() {
                configs.push(DatasetConfig {
                    description: variant.description,
                    source_url: self.url,
                    citation: self.citation,
                    language_pair,
                    encoding: variant.encoding,
                    version: self.version,
                });
            }
        }
        debug!("{}: built {} dataset configs", self.name, configs.len());
        configs
    }

    /// Returns the split composition for `config`.
    ///
    /// The composition does not vary by config within a family.
    pub fn splits_for(&self, _config: &DatasetConfig) -> &SplitMap {
        &self.splits
    }

    /// Looks up a config by canonical name (e.g. `"fr-en.subwords8k"`).
    pub fn find_config(&self, name: &str) -> Option<DatasetConfig> {
        let name = name.trim();
        self.configs().into_iter().find(|cfg| cfg.name() == name)
    }

    /// Looks up the config for `source` whose encoding has the same kind
    /// as `encoding`.
    pub fn config_for(&self, source: &str, encoding: &EncodingStrategy) -> Option<DatasetConfig> {
        self.configs().into_iter().find(|cfg| {
            cfg.language_pair.source == source && cfg.encoding.kind_label() == encoding.kind_label()
        })
    }

    /// Returns true if `config` is one of this family's configs.
    pub fn contains(&self, config: &DatasetConfig) -> bool {
        self.configs().iter().any(|cfg| cfg == config)
    }
}
