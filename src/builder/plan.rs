//! Build plan types produced by [`super::TranslateBuilder::plan`].

use serde::Serialize;
use std::fmt;

use crate::descriptor::SplitName;
use crate::subcorpus::SubCorpus;

/// The sub-corpora to fetch and concatenate for one split.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SplitPlan {
    pub split: SplitName,

    /// Sub-corpora covering the config's language pair, in declared order.
    pub sub_corpora: Vec<&'static SubCorpus>,

    /// Declared identifiers that do not provide the config's language pair.
    pub skipped: Vec<&'static str>,
}

impl SplitPlan {
    /// Names of the resolved sub-corpora, in concatenation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.sub_corpora.iter().map(|sc| sc.name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sub_corpora.is_empty()
    }
}

/// Everything the fetch layer needs to materialise one config.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BuildPlan {
    pub family: &'static str,
    pub config: String,
    pub splits: Vec<SplitPlan>,
}

impl BuildPlan {
    /// Returns the plan for one split.
    pub fn split(&self, split: SplitName) -> Option<&SplitPlan> {
        self.splits.iter().find(|plan| plan.split == split)
    }

    /// Resolved sub-corpora that need a manual download step.
    pub fn manual_downloads(&self) -> Vec<&'static SubCorpus> {
        self.splits
            .iter()
            .flat_map(|plan| plan.sub_corpora.iter().copied())
            .filter(|sc| sc.manual_download)
            .collect()
    }
}

impl fmt::Display for BuildPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Build plan for {}/{}", self.family, self.config)?;
        for plan in &self.splits {
            writeln!(
                f,
                "  {:<10} {} sub-corpora: {}",
                plan.split,
                plan.sub_corpora.len(),
                plan.names().join(", ")
            )?;
            if !plan.skipped.is_empty() {
                writeln!(f, "  {:<10} skipped: {}", "", plan.skipped.join(", "))?;
            }
        }

        let manual = self.manual_downloads();
        if !manual.is_empty() {
            let names: Vec<&str> = manual.iter().map(|sc| sc.name).collect();
            writeln!(f, "  manual download required: {}", names.join(", "))?;
        }
        Ok(())
    }
}
