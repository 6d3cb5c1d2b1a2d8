use crate::error::LoaderResult;
use crate::links::LinkPolicy;
use ::config::{Config, Environment, File, FileFormat, FileSourceFile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "oracle_loader";
const ENV_PREFIX: &str = "ORACLE_LOADER";

/// Loader settings
///
/// Read from an optional `oracle_loader.*` file (any format the `config`
/// crate understands) with `ORACLE_LOADER_*` environment variables on top.
/// Every key has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub input_path: PathBuf,
    pub skip_list_path: PathBuf,
    pub additional_blocks_path: PathBuf,
    pub output_dir: PathBuf,
    /// Lead each card-in-set row with a NULL id column
    pub include_card_set_id: bool,
    pub link_policy: LinkPolicy,
    /// Sets whose types stay out of the type listing
    pub type_excluded_sets: Vec<String>,
    pub known_words_path: Option<PathBuf>,
    pub dictionary_output_path: Option<PathBuf>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/AllSets-x.json"),
            skip_list_path: PathBuf::from("data/sets_to_skip.txt"),
            additional_blocks_path: PathBuf::from("data/additional_blocks.txt"),
            output_dir: PathBuf::from("temp"),
            include_card_set_id: true,
            link_policy: LinkPolicy::default(),
            type_excluded_sets: vec!["UGL".to_string(), "UNH".to_string()],
            known_words_path: None,
            dictionary_output_path: None,
        }
    }
}

impl LoaderConfig {
    /// Load from `oracle_loader.*` in the working directory, if present
    pub fn load() -> LoaderResult<Self> {
        Self::build(File::with_name(CONFIG_FILE).required(false))
    }

    /// Load from an explicit file, which must exist
    pub fn from_file(path: impl AsRef<Path>) -> LoaderResult<Self> {
        Self::build(File::from(path.as_ref()).required(true))
    }

    fn build(file: File<FileSourceFile, FileFormat>) -> LoaderResult<Self> {
        let config = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("type_excluded_sets"),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = LoaderConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("temp"));
        assert!(config.include_card_set_id);
        assert_eq!(config.link_policy, LinkPolicy::SkipUntagged);
        assert_eq!(config.type_excluded_sets, vec!["UGL", "UNH"]);
    }

    #[test]
    fn test_from_file_overrides_some_keys() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "output_dir = \"load\"").unwrap();
        writeln!(file, "link_policy = \"emit_untagged\"").unwrap();
        writeln!(file, "include_card_set_id = false").unwrap();
        file.flush().unwrap();

        let config = LoaderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("load"));
        assert_eq!(config.link_policy, LinkPolicy::EmitUntagged);
        assert!(!config.include_card_set_id);
        assert_eq!(config.input_path, PathBuf::from("data/AllSets-x.json"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(LoaderConfig::from_file("/nonexistent/oracle_loader.toml").is_err());
    }
}
