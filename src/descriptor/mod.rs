//! Dataset descriptors.
//!
//! A descriptor declares, for one corpus family, every buildable dataset
//! variant and the sub-corpora that make up each split. Descriptors are
//! immutable static data: they perform no I/O and cannot fail, so they can
//! be shared freely between threads.
//!
//! # Example
//!
//! ```
//! use wmt15::descriptor::wmt15::{splits_for, SUBWORDS_8K, WMT15};
//! use wmt15::descriptor::{EncodingStrategy, SplitName};
//!
//! let cfg = WMT15
//!     .config_for("de", &SUBWORDS_8K)
//!     .expect("de-en.subwords8k");
//!
//! assert_eq!(cfg.name(), "de-en.subwords8k");
//! assert_eq!(cfg.version, "0.0.1");
//! assert_ne!(cfg.encoding, EncodingStrategy::PlainText);
//! assert_eq!(splits_for(&cfg).get(SplitName::Test), &["newstest2015"]);
//! ```

mod config;
mod encoding;
mod family;
mod lang;
mod split;
pub mod wmt15;

pub use config::DatasetConfig;
pub use encoding::EncodingStrategy;
pub use family::{DatasetFamily, EncodingVariant};
pub use lang::{LanguageCode, LanguagePair};
pub use split::{SplitMap, SplitName};
