use std::collections::HashSet;

use wmt15::descriptor::wmt15::{find_config, list_configs, splits_for, SUBWORDS_8K, WMT15};
use wmt15::descriptor::{EncodingStrategy, SplitName};

#[test]
fn ten_unique_configs() {
    let configs = list_configs();
    assert_eq!(configs.len(), 10);

    let keys: HashSet<_> = configs.iter().map(|cfg| cfg.key()).collect();
    assert_eq!(keys.len(), 10);

    let names: HashSet<String> = configs.iter().map(|cfg| cfg.name()).collect();
    assert_eq!(names.len(), 10);
}

#[test]
fn every_pair_targets_english() {
    let sources = ["cs", "de", "fi", "fr", "ru"];
    for cfg in list_configs() {
        assert_eq!(cfg.language_pair.target, "en");
        assert!(sources.contains(&cfg.language_pair.source.as_str()));
    }
}

#[test]
fn five_configs_per_encoding() {
    let plain = list_configs()
        .iter()
        .filter(|cfg| cfg.encoding == EncodingStrategy::PlainText)
        .count();
    let subwords = list_configs()
        .iter()
        .filter(|cfg| {
            cfg.encoding
                == EncodingStrategy::SubwordVocabulary {
                    name: "subwords8k",
                    vocab_size: 8192,
                }
        })
        .count();

    assert_eq!(plain, 5);
    assert_eq!(subwords, 5);
}

#[test]
fn plain_configs_come_first_in_language_order() {
    let order: Vec<(&str, bool)> = list_configs()
        .iter()
        .map(|cfg| (cfg.language_pair.source.as_str(), cfg.encoding.is_plain_text()))
        .collect();

    assert_eq!(
        order,
        vec![
            ("cs", true),
            ("de", true),
            ("fi", true),
            ("fr", true),
            ("ru", true),
            ("cs", false),
            ("de", false),
            ("fi", false),
            ("fr", false),
            ("ru", false),
        ]
    );
}

#[test]
fn list_is_deterministic() {
    assert_eq!(list_configs(), list_configs());
    assert_eq!(list_configs().to_vec(), WMT15.configs());
}

#[test]
fn splits_identical_for_every_config() {
    let first = splits_for(&list_configs()[0]);
    for cfg in list_configs() {
        assert_eq!(splits_for(cfg), first);
    }
}

#[test]
fn split_sizes_and_disjointness() {
    let splits = splits_for(&list_configs()[0]);
    assert_eq!(splits.get(SplitName::Train).len(), 10);
    assert_eq!(splits.get(SplitName::Validation).len(), 11);
    assert_eq!(splits.get(SplitName::Test), &["newstest2015"]);

    let mut seen = HashSet::new();
    for (_, ids) in splits.iter() {
        for id in ids {
            assert!(seen.insert(*id), "{} appears in more than one split", id);
        }
    }
    assert_eq!(seen.len(), 22);
}

#[test]
fn german_subword_config() {
    let cfg = WMT15.config_for("de", &SUBWORDS_8K).expect("de-en.subwords8k");

    assert_eq!(
        cfg.description,
        "WMT 2015 translation dataset with subword encoding."
    );
    assert_eq!(
        cfg.source_url,
        "http://www.statmt.org/wmt15/translation-task.html"
    );
    assert_eq!(cfg.version, "0.0.1");
    assert_eq!(splits_for(&cfg).get(SplitName::Test), &["newstest2015"]);
}

#[test]
fn russian_plain_config_last_train_corpus() {
    let cfg = WMT15
        .config_for("ru", &EncodingStrategy::PlainText)
        .expect("ru-en");

    assert_eq!(cfg.description, "WMT 2015 translation task dataset.");
    let train = splits_for(&cfg).get(SplitName::Train);
    assert_eq!(train[9], "wikiheadlines_ru");
    assert_eq!(train.last(), Some(&"wikiheadlines_ru"));
}

#[test]
fn find_config_by_canonical_name() {
    assert!(find_config("fi-en.subwords8k").is_some());
    assert!(find_config("fi-en").is_some());
    assert!(find_config("en-fi").is_none());
    assert!(find_config("fi-en.subwords32k").is_none());
}

#[test]
fn configs_share_family_citation() {
    for cfg in list_configs() {
        assert!(cfg.citation.contains("bojar-EtAl:2015:WMT"));
        assert!(cfg.citation.contains("W15-3001"));
    }
}
