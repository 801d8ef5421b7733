use crate::error::{CliError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileExplanationConfig {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub language: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileLabConfig {
    pub cracking_seconds: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub explanation: Option<FileExplanationConfig>,
    pub lab: Option<FileLabConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the explicitly requested file, or the per-user file when it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    debug!("No configuration file found; using built-in defaults.");
                    Ok(Self::default())
                }
            },
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "chemlab", "chemlab").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_kebab_case_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[explanation]
model = "gemini-pro"
language = "Vietnamese"
timeout-seconds = 10

[lab]
cracking-seconds = 1.5
"#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        let explanation = config.explanation.unwrap();
        assert_eq!(explanation.model.as_deref(), Some("gemini-pro"));
        assert_eq!(explanation.language.as_deref(), Some("Vietnamese"));
        assert_eq!(explanation.timeout_seconds, Some(10));
        assert_eq!(explanation.endpoint, None);
        assert_eq!(config.lab.unwrap().cracking_seconds, Some(1.5));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[lab]\ncracking-speed = 2\n").unwrap();

        let err = FileConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn missing_explicit_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = FileConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(FileConfig::from_file(&path).unwrap(), FileConfig::default());
    }
}
