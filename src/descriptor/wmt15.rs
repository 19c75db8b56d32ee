//! WMT15: the 2015 Workshop on Statistical Machine Translation news task.
//!
//! Five `xx-en` language pairs, each offered as plain text and with an
//! 8k subword vocabulary. All ten configs share one split composition.
//!
//! ```
//! use wmt15::descriptor::wmt15::{list_configs, splits_for};
//! use wmt15::descriptor::SplitName;
//!
//! let configs = list_configs();
//! assert_eq!(configs.len(), 10);
//!
//! let splits = splits_for(&configs[0]);
//! assert_eq!(splits.get(SplitName::Test), &["newstest2015"]);
//! ```

use once_cell::sync::Lazy;

use super::config::DatasetConfig;
use super::encoding::EncodingStrategy;
use super::family::{DatasetFamily, EncodingVariant};
use super::split::SplitMap;

pub const URL: &str = "http://www.statmt.org/wmt15/translation-task.html";

pub const CITATION: &str = r#"
@InProceedings{bojar-EtAl:2015:WMT,
  author    = {Bojar, Ond\v{r}ej  and  Chatterjee, Rajen  and  Federmann, Christian  and  Haddow, Barry  and  Huck, Matthias  and  Hokamp, Chris  and  Koehn, Philipp  and  Logacheva, Varvara  and  Monz, Christof  and  Negri, Matteo  and  Post, Matt  and  Scarton, Carolina  and  Specia, Lucia  and  Turchi, Marco},
  title     = {Findings of the 2015 Workshop on Statistical Machine Translation},
  booktitle = {Proceedings of the Tenth Workshop on Statistical Machine Translation},
  month     = {September},
  year      = {2015},
  address   = {Lisbon, Portugal},
  publisher = {Association for Computational Linguistics},
  pages     = {1--46},
  url       = {http://aclweb.org/anthology/W15-3001}
}
"#;

pub const VERSION: &str = "0.0.1";

/// Source languages; every pair targets [`TARGET`].
pub const SOURCES: &[&str] = &["cs", "de", "fi", "fr", "ru"];

pub const TARGET: &str = "en";

/// The 8k subword vocabulary (2^13 entries).
pub const SUBWORDS_8K: EncodingStrategy = EncodingStrategy::SubwordVocabulary {
    name: "subwords8k",
    vocab_size: 1 << 13,
};

const TRAIN: &[&str] = &[
    "europarl_v7",
    "europarl_v8",
    "commoncrawl",
    "multiun",
    "newscommentary_v10",
    "gigafren",
    "czeng_10",
    "yandexcorpus",
    "wikiheadlines_fi",
    "wikiheadlines_ru",
];

const VALIDATION: &[&str] = &[
    "newsdev2014",
    "newsdev2015",
    "newsdiscussdev2015",
    "newssyscomb2009",
    "newstest2008",
    "newstest2009",
    "newstest2010",
    "newstest2011",
    "newstest2012",
    "newstest2013",
    "newstest2014",
];

const TEST: &[&str] = &["newstest2015"];

/// The WMT15 family descriptor.
pub static WMT15: DatasetFamily = DatasetFamily {
    name: "wmt15",
    version: VERSION,
    url: URL,
    citation: CITATION,
    sources: SOURCES,
    target: TARGET,
    variants: &[
        EncodingVariant {
            description: "WMT 2015 translation task dataset.",
            encoding: EncodingStrategy::PlainText,
        },
        EncodingVariant {
            description: "WMT 2015 translation dataset with subword encoding.",
            encoding: SUBWORDS_8K,
        },
    ],
    splits: SplitMap::new(TRAIN, VALIDATION, TEST),
};

static CONFIGS: Lazy<Vec<DatasetConfig>> = Lazy::new(|| WMT15.configs());

/// Every WMT15 config: plain text for cs, de, fi, fr, ru, then subwords8k
/// in the same language order.
pub fn list_configs() -> &'static [DatasetConfig] {
    &CONFIGS
}

/// The split composition of `config`. Identical for every WMT15 config.
pub fn splits_for(config: &DatasetConfig) -> &'static SplitMap {
    WMT15.splits_for(config)
}

/// Looks up a WMT15 config by canonical name.
pub fn find_config(name: &str) -> Option<&'static DatasetConfig> {
    let name = name.trim();
    list_configs().iter().find(|cfg| cfg.name() == name)
}
