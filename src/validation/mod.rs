//! Descriptor validation.
//!
//! Checks a [`DatasetFamily`] for internal consistency and resolves every
//! sub-corpus identifier against a [`SubCorpusRegistry`]:
//! - Config identity (unique keys and names, common target language)
//! - Family metadata (parsable URL, version, citation, vocabulary sizes)
//! - Split composition (non-empty, disjoint, resolvable, covering each pair)

mod report;

pub use report::{IssueCode, IssueContext, Severity, ValidationIssue, ValidationReport};

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::descriptor::{DatasetConfig, DatasetFamily, SplitName};
use crate::subcorpus::SubCorpusRegistry;

/// Options for validation behavior.
#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,
}

/// Validates a family descriptor and returns a report of all issues found.
pub fn validate_family(
    family: &DatasetFamily,
    registry: &SubCorpusRegistry,
    _opts: &ValidateOptions,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    let configs = family.configs();

    validate_metadata(family, &mut report);
    validate_configs(family, &configs, &mut report);
    validate_splits(family, registry, &mut report);
    validate_coverage(family, &configs, registry, &mut report);

    debug!(
        "validated {}: {} error(s), {} warning(s)",
        family.name,
        report.error_count(),
        report.warning_count()
    );
    report
}

fn family_context(family: &DatasetFamily) -> IssueContext {
    IssueContext::Family {
        name: family.name.to_string(),
    }
}

/// Validates URL, version, citation, and encoding parameters.
fn validate_metadata(family: &DatasetFamily, report: &mut ValidationReport) {
    if let Err(source) = url::Url::parse(family.url) {
        report.add(ValidationIssue::error(
            IssueCode::InvalidUrl,
            format!("URL '{}' does not parse: {}", family.url, source),
            family_context(family),
        ));
    }

    if family.version.trim().is_empty() {
        report.add(ValidationIssue::error(
            IssueCode::EmptyVersion,
            "Empty version string",
            family_context(family),
        ));
    }

    if family.citation.trim().is_empty() {
        report.add(ValidationIssue::warning(
            IssueCode::EmptyCitation,
            "Empty citation",
            family_context(family),
        ));
    }

    for variant in family.variants {
        if let Some(size) = variant.encoding.vocab_size() {
            if !size.is_power_of_two() {
                report.add(ValidationIssue::warning(
                    IssueCode::VocabSizeNotPowerOfTwo,
                    format!("Vocabulary size {} is not a power of two", size),
                    family_context(family),
                ));
            }
        }
    }
}

/// Validates config uniqueness and target language.
fn validate_configs(
    family: &DatasetFamily,
    configs: &[DatasetConfig],
    report: &mut ValidationReport,
) {
    let mut seen_keys = HashMap::new();
    let mut seen_names: HashMap<String, usize> = HashMap::new();

    for (idx, config) in configs.iter().enumerate() {
        let name = config.name();

        if let Some(first_idx) = seen_keys.get(&config.key()) {
            report.add(ValidationIssue::error(
                IssueCode::DuplicateConfig,
                format!(
                    "Duplicate config {} / {} (first seen at index {})",
                    config.language_pair, config.encoding, first_idx
                ),
                IssueContext::Config { name: name.clone() },
            ));
        } else {
            seen_keys.insert(config.key(), idx);
        }

        if let Some(first_idx) = seen_names.get(&name) {
            report.add(ValidationIssue::error(
                IssueCode::DuplicateConfigName,
                format!(
                    "Duplicate config name (first seen at index {})",
                    first_idx
                ),
                IssueContext::Config { name: name.clone() },
            ));
        } else {
            seen_names.insert(name.clone(), idx);
        }

        if config.language_pair.target != family.target {
            report.add(ValidationIssue::error(
                IssueCode::TargetMismatch,
                format!(
                    "Target language '{}' differs from family target '{}'",
                    config.language_pair.target, family.target
                ),
                IssueContext::Config { name },
            ));
        }
    }
}

/// Validates that splits are non-empty, disjoint, and resolvable.
fn validate_splits(
    family: &DatasetFamily,
    registry: &SubCorpusRegistry,
    report: &mut ValidationReport,
) {
    let mut owner: HashMap<&str, SplitName> = HashMap::new();

    for (split, ids) in family.splits.iter() {
        if ids.is_empty() {
            report.add(ValidationIssue::error(
                IssueCode::EmptySplit,
                "Split lists no sub-corpora",
                IssueContext::Split {
                    split: split.to_string(),
                },
            ));
            continue;
        }

        let mut seen_in_split = HashSet::new();
        for &id in ids {
            let context = IssueContext::SubCorpus {
                split: split.to_string(),
                name: id.to_string(),
            };

            if !seen_in_split.insert(id) {
                report.add(ValidationIssue::warning(
                    IssueCode::DuplicateSubCorpusInSplit,
                    "Listed more than once",
                    context,
                ));
                continue;
            }

            match owner.get(id) {
                Some(first) if *first != split => {
                    report.add(ValidationIssue::error(
                        IssueCode::SubCorpusInMultipleSplits,
                        format!("Also listed in split {}", first),
                        context.clone(),
                    ));
                }
                Some(_) => {}
                None => {
                    owner.insert(id, split);
                }
            }

            if !registry.contains(id) {
                report.add(ValidationIssue::error(
                    IssueCode::UnknownSubCorpus,
                    "Sub-corpus is not known to the registry",
                    context,
                ));
            }
        }
    }
}

/// Warns when a split has nothing to offer for a config's language pair.
fn validate_coverage(
    family: &DatasetFamily,
    configs: &[DatasetConfig],
    registry: &SubCorpusRegistry,
    report: &mut ValidationReport,
) {
    // Coverage depends only on the pair, not the encoding.
    let mut checked = HashSet::new();

    for config in configs {
        if !checked.insert(config.language_pair) {
            continue;
        }

        for (split, ids) in family.splits_for(config).iter() {
            if ids.is_empty() {
                continue;
            }
            let covered = ids
                .iter()
                .filter_map(|id| registry.lookup(id))
                .any(|sc| sc.covers(&config.language_pair));
            if !covered {
                report.add(ValidationIssue::warning(
                    IssueCode::SplitUncovered,
                    format!(
                        "No sub-corpus of split {} provides {}",
                        split, config.language_pair
                    ),
                    IssueContext::Config {
                        name: config.language_pair.to_string(),
                    },
                ));
            }
        }
    }
}
