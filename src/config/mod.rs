use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `IMGFENCE_FIELDS__TAGS`.
pub const ENV_PREFIX: &str = "IMGFENCE";

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct SearchConfig {
    #[serde(default)]
    pub fields: FieldNames,
}

impl SearchConfig {
    /// Load settings from an optional YAML file, then the environment.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path));
        }
        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

/// Column names the search and report rely on.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FieldNames {
    /// Column holding the raw user tag list.
    #[serde(default = "default_tags")]
    pub tags: String,
    /// Column holding the image centre coordinate.
    #[serde(default = "default_coordinate")]
    pub coordinate: String,
    #[serde(default = "default_filename")]
    pub filename: String,
    #[serde(default = "default_file_type")]
    pub file_type: String,
    #[serde(default = "default_size")]
    pub size: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            tags: default_tags(),
            coordinate: default_coordinate(),
            filename: default_filename(),
            file_type: default_file_type(),
            size: default_size(),
        }
    }
}

fn default_tags() -> String {
    "User Tags".to_string()
}

fn default_coordinate() -> String {
    "(Center) Coordinate".to_string()
}

fn default_filename() -> String {
    "Filename".to_string()
}

fn default_file_type() -> String {
    "Type".to_string()
}

fn default_size() -> String {
    "Image Size (MB)".to_string()
}
