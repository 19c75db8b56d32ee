use wmt15::builder::TranslateBuilder;
use wmt15::descriptor::wmt15::{list_configs, WMT15};
use wmt15::descriptor::SplitName;
use wmt15::Wmt15Error;

fn plan_names(config: &str, split: SplitName) -> Vec<&'static str> {
    let builder = TranslateBuilder::from_name(&WMT15, config).expect("builder");
    let plan = builder.plan().expect("plan");
    plan.split(split).expect("split").names()
}

#[test]
fn every_config_builds() {
    for cfg in list_configs() {
        let builder = TranslateBuilder::from_name(&WMT15, &cfg.name()).expect("builder");
        assert_eq!(builder.config(), cfg);
        assert_eq!(builder.family().name, "wmt15");
        assert_eq!(builder.splits().len(), 22);
    }
}

#[test]
fn russian_train_corpora() {
    assert_eq!(
        plan_names("ru-en", SplitName::Train),
        vec![
            "commoncrawl",
            "newscommentary_v10",
            "yandexcorpus",
            "wikiheadlines_ru"
        ]
    );
}

#[test]
fn finnish_validation_is_newsdev2015() {
    assert_eq!(
        plan_names("fi-en.subwords8k", SplitName::Validation),
        vec!["newsdev2015"]
    );
}

#[test]
fn german_validation_keeps_declared_order() {
    assert_eq!(
        plan_names("de-en", SplitName::Validation),
        vec![
            "newssyscomb2009",
            "newstest2008",
            "newstest2009",
            "newstest2010",
            "newstest2011",
            "newstest2012",
            "newstest2013",
            "newstest2014"
        ]
    );
}

#[test]
fn encoding_does_not_change_the_plan() {
    for source in ["cs", "de", "fi", "fr", "ru"] {
        let plain = TranslateBuilder::from_name(&WMT15, &format!("{source}-en"))
            .and_then(|b| b.plan())
            .expect("plain plan");
        let subwords = TranslateBuilder::from_name(&WMT15, &format!("{source}-en.subwords8k"))
            .and_then(|b| b.plan())
            .expect("subword plan");
        assert_eq!(plain.splits, subwords.splits);
    }
}

#[test]
fn manual_downloads_per_pair() {
    let manual = |name: &str| -> Vec<&'static str> {
        TranslateBuilder::from_name(&WMT15, name)
            .and_then(|b| b.plan())
            .expect("plan")
            .manual_downloads()
            .iter()
            .map(|sc| sc.name)
            .collect()
    };

    assert_eq!(manual("cs-en"), vec!["czeng_10"]);
    assert_eq!(manual("ru-en"), vec!["yandexcorpus"]);
    assert!(manual("de-en").is_empty());
}

#[test]
fn plan_display_mentions_manual_step() {
    let plan = TranslateBuilder::from_name(&WMT15, "ru-en")
        .and_then(|b| b.plan())
        .expect("plan");
    let text = plan.to_string();
    assert!(text.starts_with("Build plan for wmt15/ru-en"));
    assert!(text.contains("manual download required: yandexcorpus"));
}

#[test]
fn unknown_config_error_message() {
    let err = TranslateBuilder::from_name(&WMT15, "de-en.subwords32k").expect_err("unknown");
    assert!(matches!(err, Wmt15Error::UnknownConfig { .. }));
    assert!(err.to_string().contains("de-en.subwords32k"));
}
