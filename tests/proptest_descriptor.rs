use proptest::prelude::*;

use wmt15::builder::TranslateBuilder;
use wmt15::descriptor::wmt15::{find_config, list_configs, splits_for, WMT15};
use wmt15::descriptor::SplitName;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn splits_do_not_depend_on_config(a in proptest_helpers::arb_config(), b in proptest_helpers::arb_config()) {
        prop_assert_eq!(splits_for(a), splits_for(b));
    }

    #[test]
    fn name_lookup_is_consistent(name in proptest_helpers::arb_config_name()) {
        match find_config(&name) {
            Some(cfg) => prop_assert_eq!(cfg.name(), name.trim()),
            None => prop_assert!(list_configs().iter().all(|cfg| cfg.name() != name.trim())),
        }
    }

    #[test]
    fn split_parsing_never_panics(name in proptest_helpers::arb_split_name()) {
        let normalized = name.trim().to_ascii_lowercase();
        let parsed = name.parse::<SplitName>();
        let expected = matches!(normalized.as_str(), "train" | "validation" | "dev" | "test");
        prop_assert_eq!(parsed.is_ok(), expected);
    }

    #[test]
    fn plans_preserve_declared_order(cfg in proptest_helpers::arb_config()) {
        let builder = TranslateBuilder::from_name(&WMT15, &cfg.name()).expect("builder");
        let plan = builder.plan().expect("plan");

        for split_plan in &plan.splits {
            let declared = splits_for(cfg).get(split_plan.split);
            let resolved = split_plan.names();

            // Resolved and skipped together partition the declared list.
            prop_assert_eq!(resolved.len() + split_plan.skipped.len(), declared.len());

            let positions: Vec<usize> = resolved
                .iter()
                .map(|name| declared.iter().position(|d| d == name).expect("declared"))
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        // Every language pair has a test set.
        prop_assert!(!plan.split(SplitName::Test).expect("test").is_empty());
    }
}
