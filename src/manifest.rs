//! Manifest export for downstream builders.
//!
//! A manifest is a self-contained snapshot of a family descriptor: its
//! metadata, every config under its canonical name, and the split
//! composition. It can be written as JSON or YAML.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::descriptor::{DatasetConfig, DatasetFamily, SplitMap};
use crate::error::Wmt15Error;

/// One config entry in a manifest.
#[derive(Clone, Debug, Serialize)]
pub struct ConfigEntry {
    pub name: String,
    #[serde(flatten)]
    pub config: DatasetConfig,
}

/// Serializable snapshot of a [`DatasetFamily`].
#[derive(Clone, Debug, Serialize)]
pub struct FamilyManifest {
    pub family: &'static str,
    pub version: &'static str,
    pub url: &'static str,
    pub citation: &'static str,
    pub configs: Vec<ConfigEntry>,
    pub splits: SplitMap,
}

impl FamilyManifest {
    pub fn from_family(family: &DatasetFamily) -> Self {
        let configs = family
            .configs()
            .into_iter()
            .map(|config| ConfigEntry {
                name: config.name(),
                config,
            })
            .collect();

        Self {
            family: family.name,
            version: family.version,
            url: family.url,
            citation: family.citation,
            configs,
            splits: family.splits,
        }
    }
}

/// Renders the manifest of `family` as pretty-printed JSON.
pub fn to_json_string(family: &DatasetFamily) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&FamilyManifest::from_family(family))
}

/// Renders the manifest of `family` as YAML.
pub fn to_yaml_string(family: &DatasetFamily) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&FamilyManifest::from_family(family))
}

/// Writes the JSON manifest of `family` to `path`.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_manifest_json(path: &Path, family: &DatasetFamily) -> Result<(), Wmt15Error> {
    let file = File::create(path).map_err(Wmt15Error::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, &FamilyManifest::from_family(family)).map_err(
        |source| Wmt15Error::ManifestWrite {
            path: path.to_path_buf(),
            source,
        },
    )?;

    info!("wrote {} manifest to {}", family.name, path.display());
    Ok(())
}
