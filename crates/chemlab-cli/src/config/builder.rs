use super::defaults::{API_KEY_VARS, DefaultsConfig};
use super::file::FileConfig;
use super::models::{AppConfig, ExplanationSettings};
use crate::cli::SettingsArgs;
use crate::error::{CliError, Result};
use chemlab::engine::config::SessionConfigBuilder;
use std::time::Duration;
use tracing::{debug, warn};

pub fn build_config(args: &SettingsArgs, env_api_key: Option<String>) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = FileConfig::load(args.config.as_deref())?;
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let explanation_file = file_config.explanation.take().unwrap_or_default();
    let lab_file = file_config.lab.take().unwrap_or_default();

    let model = args
        .model
        .clone()
        .or(explanation_file.model)
        .unwrap_or(defaults.model);
    let language = args
        .language
        .clone()
        .or(explanation_file.language)
        .unwrap_or(defaults.language);
    let endpoint = explanation_file
        .endpoint
        .unwrap_or(defaults.endpoint)
        .trim_end_matches('/')
        .to_string();

    let timeout_seconds = explanation_file
        .timeout_seconds
        .unwrap_or(defaults.timeout_seconds);
    if timeout_seconds == 0 {
        return Err(CliError::Config(
            "'explanation.timeout-seconds' must be greater than zero.".to_string(),
        ));
    }

    let cracking_seconds = lab_file
        .cracking_seconds
        .unwrap_or(defaults.cracking_seconds);
    if !cracking_seconds.is_finite() || cracking_seconds <= 0.0 {
        return Err(CliError::Config(format!(
            "'lab.cracking-seconds' must be a positive number, got {}.",
            cracking_seconds
        )));
    }
    let session = SessionConfigBuilder::new()
        .cracking_seconds(cracking_seconds)
        .build()?;

    let api_key = if args.offline {
        debug!("Offline mode requested; explanations will use fallback texts.");
        None
    } else {
        args.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or(env_api_key)
    };

    Ok(AppConfig {
        explanation: ExplanationSettings {
            model,
            endpoint,
            language,
            timeout: Duration::from_secs(timeout_seconds),
            api_key,
        },
        session,
    })
}

/// Reads the explanation API key from the environment after loading a `.env` file, if any.
pub fn resolve_api_key() -> Option<String> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            warn!("Ignoring unreadable .env file: {}", e);
        }
    }
    API_KEY_VARS.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .inspect(|_| debug!("Using API key from ${}.", name))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();
        let value_str = value_str.trim();

        match key {
            "explanation.model" => {
                config
                    .explanation
                    .get_or_insert_with(Default::default)
                    .model = Some(value_str.to_string());
            }
            "explanation.endpoint" => {
                config
                    .explanation
                    .get_or_insert_with(Default::default)
                    .endpoint = Some(value_str.to_string());
            }
            "explanation.language" => {
                config
                    .explanation
                    .get_or_insert_with(Default::default)
                    .language = Some(value_str.to_string());
            }
            "explanation.timeout-seconds" => {
                config
                    .explanation
                    .get_or_insert_with(Default::default)
                    .timeout_seconds = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            "lab.cracking-seconds" => {
                config.lab.get_or_insert_with(Default::default).cracking_seconds =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                    })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    fn args_with_file(path: PathBuf) -> SettingsArgs {
        SettingsArgs {
            config: Some(path),
            ..SettingsArgs::default()
        }
    }

    #[test]
    fn empty_file_yields_defaults() {
        let (_dir, path) = write_config("");
        let config = build_config(&args_with_file(path), None).unwrap();

        assert_eq!(config.explanation.model, "gemini-3-flash-preview");
        assert_eq!(config.explanation.language, "English");
        assert_eq!(config.explanation.timeout, Duration::from_secs(30));
        assert_eq!(config.explanation.api_key, None);
        assert_eq!(config.session.cracking_duration, Duration::from_secs(3));
    }

    #[test]
    fn file_values_override_defaults() {
        let (_dir, path) = write_config(
            "[explanation]\nlanguage = \"Vietnamese\"\nendpoint = \"http://localhost:8080/v1/\"\n\n[lab]\ncracking-seconds = 0.5\n",
        );
        let config = build_config(&args_with_file(path), None).unwrap();

        assert_eq!(config.explanation.language, "Vietnamese");
        assert_eq!(config.explanation.endpoint, "http://localhost:8080/v1");
        assert_eq!(config.session.cracking_duration, Duration::from_millis(500));
    }

    #[test]
    fn set_values_override_file_and_flags_override_set_values() {
        let (_dir, path) = write_config("[explanation]\nmodel = \"from-file\"\nlanguage = \"French\"\n");
        let mut args = args_with_file(path);
        args.set_values = vec![
            "explanation.model=from-set".to_string(),
            "explanation.language = German".to_string(),
            "lab.cracking-seconds=2".to_string(),
        ];
        args.language = Some("Vietnamese".to_string());

        let config = build_config(&args, None).unwrap();
        assert_eq!(config.explanation.model, "from-set");
        assert_eq!(config.explanation.language, "Vietnamese");
        assert_eq!(config.session.cracking_duration, Duration::from_secs(2));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        let (_dir, path) = write_config("");
        for bad in ["explanation.model", "lab.cracking-seconds=fast", "lab.speed=1"] {
            let mut args = args_with_file(path.clone());
            args.set_values = vec![bad.to_string()];
            assert!(
                matches!(build_config(&args, None), Err(CliError::Config(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn non_positive_durations_are_rejected() {
        let (_dir, path) = write_config("[lab]\ncracking-seconds = 0.0\n");
        assert!(matches!(
            build_config(&args_with_file(path), None),
            Err(CliError::Config(_))
        ));

        let (_dir, path) = write_config("[explanation]\ntimeout-seconds = 0\n");
        assert!(matches!(
            build_config(&args_with_file(path), None),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn api_key_flag_beats_environment_and_offline_beats_both() {
        let (_dir, path) = write_config("");
        let mut args = args_with_file(path);

        let config = build_config(&args, Some("env-key".to_string())).unwrap();
        assert_eq!(config.explanation.api_key.as_deref(), Some("env-key"));

        args.api_key = Some("flag-key".to_string());
        let config = build_config(&args, Some("env-key".to_string())).unwrap();
        assert_eq!(config.explanation.api_key.as_deref(), Some("flag-key"));

        args.offline = true;
        let config = build_config(&args, Some("env-key".to_string())).unwrap();
        assert_eq!(config.explanation.api_key, None);
    }

    #[test]
    fn blank_api_key_flag_falls_back_to_environment() {
        let (_dir, path) = write_config("");
        let mut args = args_with_file(path);
        args.api_key = Some("  ".to_string());
        let config = build_config(&args, Some("env-key".to_string())).unwrap();
        assert_eq!(config.explanation.api_key.as_deref(), Some("env-key"));
    }
}
