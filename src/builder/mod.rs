//! The generic translation dataset builder.
//!
//! One builder type serves every corpus family: it is composed from a
//! [`DatasetFamily`], one of that family's configs, and a
//! [`SubCorpusRegistry`]. Construction validates the family eagerly, so an
//! identifier the registry cannot resolve is reported before any fetch.

mod plan;

pub use plan::{BuildPlan, SplitPlan};

use log::debug;

use crate::descriptor::{DatasetConfig, DatasetFamily, SplitMap, SplitName};
use crate::error::Wmt15Error;
use crate::subcorpus::SubCorpusRegistry;
use crate::validation::{validate_family, ValidateOptions};

/// Builder for one config of one translation corpus family.
#[derive(Clone, Debug)]
pub struct TranslateBuilder<'a> {
    family: &'a DatasetFamily,
    config: DatasetConfig,
    registry: SubCorpusRegistry,
}

impl<'a> TranslateBuilder<'a> {
    /// Creates a builder for `config`.
    ///
    /// # Errors
    /// - [`Wmt15Error::UnknownConfig`] if `config` does not belong to `family`.
    /// - [`Wmt15Error::DescriptorInvalid`] if the family fails validation
    ///   against `registry` with at least one error.
    pub fn new(
        family: &'a DatasetFamily,
        config: DatasetConfig,
        registry: SubCorpusRegistry,
    ) -> Result<Self, Wmt15Error> {
        if !family.contains(&config) {
            return Err(Wmt15Error::UnknownConfig {
                name: config.name(),
            });
        }

        let report = validate_family(family, &registry, &ValidateOptions::default());
        if !report.is_ok() {
            return Err(Wmt15Error::DescriptorInvalid {
                family: family.name.to_string(),
                error_count: report.error_count(),
                warning_count: report.warning_count(),
                report,
            });
        }

        Ok(Self {
            family,
            config,
            registry,
        })
    }

    /// Creates a builder from a canonical config name using the built-in
    /// registry.
    pub fn from_name(family: &'a DatasetFamily, name: &str) -> Result<Self, Wmt15Error> {
        let config = family
            .find_config(name)
            .ok_or_else(|| Wmt15Error::UnknownConfig {
                name: name.to_string(),
            })?;
        Self::new(family, config, SubCorpusRegistry::builtin())
    }

    pub fn family(&self) -> &DatasetFamily {
        self.family
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// The declared split composition, before language-pair filtering.
    pub fn splits(&self) -> &SplitMap {
        self.family.splits_for(&self.config)
    }

    /// Resolves the sub-corpora of one split for this config's language pair.
    pub fn plan_split(&self, split: SplitName) -> Result<SplitPlan, Wmt15Error> {
        let pair = self.config.language_pair;
        let mut sub_corpora = Vec::new();
        let mut skipped = Vec::new();

        for &name in self.splits().get(split) {
            let sub_corpus =
                self.registry
                    .lookup(name)
                    .ok_or_else(|| Wmt15Error::UnknownSubCorpus {
                        name: name.to_string(),
                        split: split.to_string(),
                    })?;

            if sub_corpus.covers(&pair) {
                sub_corpora.push(sub_corpus);
            } else {
                skipped.push(name);
            }
        }

        debug!(
            "{}/{} {}: {} resolved, {} skipped",
            self.family.name,
            self.config.name(),
            split,
            sub_corpora.len(),
            skipped.len()
        );

        Ok(SplitPlan {
            split,
            sub_corpora,
            skipped,
        })
    }

    /// Resolves every split, in Train, Validation, Test order.
    pub fn plan(&self) -> Result<BuildPlan, Wmt15Error> {
        let splits = SplitName::ALL
            .into_iter()
            .map(|split| self.plan_split(split))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BuildPlan {
            family: self.family.name,
            config: self.config.name(),
            splits,
        })
    }
}
