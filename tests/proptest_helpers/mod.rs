#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

use wmt15::descriptor::wmt15::list_configs;
use wmt15::descriptor::DatasetConfig;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Any config of the WMT15 family.
pub fn arb_config() -> impl Strategy<Value = &'static DatasetConfig> {
    let configs = list_configs();
    (0..configs.len()).prop_map(move |idx| &configs[idx])
}

/// Strings that look like config names: real ones, perturbed ones, noise.
pub fn arb_config_name() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_config().prop_map(|cfg| cfg.name()),
        "[a-z]{2}-[a-z]{2}(\\.subwords[0-9]{1,2}k)?",
        ".{0,24}",
    ]
}

/// Case and whitespace variations of split names, plus noise.
pub fn arb_split_name() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["train", "Train", " test", "VALIDATION", "dev "])
            .prop_map(str::to_string),
        "[a-zA-Z ]{0,12}",
    ]
}
