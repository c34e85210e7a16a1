pub mod error;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::models::{CliConfig, CliConfigSource};
use error::ConfigLoadError;

pub const CONFIG_PATH_ENV: &str = "HYPNO_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "HYPNO_CONFIG_JSON";
pub const DEFAULT_CONFIG_FILE: &str = "hypno.toml";

/// Resolves [`CliConfig`] from the first source that is present.
///
/// Evaluation order:
/// 1) an explicit `--config` path,
/// 2) `$HYPNO_CONFIG_PATH` (TOML or JSON file),
/// 3) `$HYPNO_CONFIG_JSON` (inline JSON),
/// 4) `hypno.toml` in the working directory,
/// 5) defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    search_dir: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_explicit_path(mut self, path: Option<PathBuf>) -> Self {
        self.explicit_path = path;
        self
    }

    /// Directory probed for `hypno.toml`; the working directory by default.
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dir = Some(dir.into());
        self
    }

    pub fn load(
        &self,
    ) -> Result<(CliConfig, CliConfigSource), ConfigLoadError> {
        self.load_with_env(|key| env::var(key).ok())
    }

    /// Same as [`ConfigLoader::load`] with a caller-supplied environment.
    pub fn load_with_env<F>(
        &self,
        lookup: F,
    ) -> Result<(CliConfig, CliConfigSource), ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = self.explicit_path.as_ref() {
            let config = load_from_file(path)?;
            return Ok((config, CliConfigSource::Explicit(path.clone())));
        }

        if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = load_from_file(&path)?;
            return Ok((config, CliConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = serde_json::from_str(&raw)
                .map_err(|source| ConfigLoadError::InvalidInline { source })?;
            return Ok((parsed, CliConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, CliConfigSource::File(path)));
        }

        Ok((CliConfig::default(), CliConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let dir = match self.search_dir.as_ref() {
            Some(dir) => dir.clone(),
            None => env::current_dir().ok()?,
        };
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        candidate.is_file().then_some(candidate)
    }
}

pub fn load_from_file(path: &Path) -> Result<CliConfig, ConfigLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        ConfigLoadError::ConfigFileIo {
            path: path.to_path_buf(),
            source,
        }
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(|source| {
            ConfigLoadError::InvalidJson {
                path: path.to_path_buf(),
                source,
            }
        }),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|source| {
                ConfigLoadError::InvalidToml {
                    path: path.to_path_buf(),
                    source,
                }
            })
        }
        _ => parse_from_str(&contents, &path.display().to_string()),
    }
}

/// Try TOML first, then JSON for convenience.
pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<CliConfig, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::Unrecognized {
                origin: origin.to_string(),
                toml: toml_err,
                json: json_err,
            }
        })
    })
}

/// Load `.env` from the working directory if one exists.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigLoadError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutputFormat;
    use std::collections::HashMap;

    fn env_of(
        pairs: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn empty_dir() -> tempfile::TempDir {
        tempfile::tempdir().expect("temp dir")
    }

    #[test]
    fn defaults_when_nothing_is_configured() {
        let dir = empty_dir();
        let (config, source) = ConfigLoader::new()
            .with_search_dir(dir.path())
            .load_with_env(env_of(&[]))
            .expect("defaults");
        assert_eq!(config, CliConfig::default());
        assert_eq!(source, CliConfigSource::Default);
        assert_eq!(config.tag_preview, 3);
    }

    #[test]
    fn default_file_in_search_dir_is_used() {
        let dir = empty_dir();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "output = \"json\"\ntag_preview = 5\n",
        )
        .expect("write config");

        let (config, source) = ConfigLoader::new()
            .with_search_dir(dir.path())
            .load_with_env(env_of(&[]))
            .expect("file config");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.tag_preview, 5);
        assert_eq!(config.log_filter, "warn");
        assert!(matches!(source, CliConfigSource::File(_)));
    }

    #[test]
    fn inline_json_beats_default_file() {
        let dir = empty_dir();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "tag_preview = 5\n")
            .expect("write config");

        let (config, source) = ConfigLoader::new()
            .with_search_dir(dir.path())
            .load_with_env(env_of(&[(CONFIG_JSON_ENV, r#"{"tag_preview":1}"#)]))
            .expect("inline config");
        assert_eq!(config.tag_preview, 1);
        assert_eq!(source, CliConfigSource::EnvInline);
    }

    #[test]
    fn explicit_path_beats_environment() {
        let dir = empty_dir();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{"output":"json"}"#).expect("write config");

        let (config, source) = ConfigLoader::new()
            .with_explicit_path(Some(path.clone()))
            .with_search_dir(dir.path())
            .load_with_env(env_of(&[(CONFIG_JSON_ENV, r#"{"tag_preview":1}"#)]))
            .expect("explicit config");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.tag_preview, 3);
        assert_eq!(source, CliConfigSource::Explicit(path));
    }

    #[test]
    fn env_path_is_read() {
        let dir = empty_dir();
        let path = dir.path().join("from-env.toml");
        fs::write(&path, "log_filter = \"debug\"\n").expect("write config");

        let (config, source) = ConfigLoader::new()
            .with_search_dir(dir.path())
            .load_with_env(env_of(&[(
                CONFIG_PATH_ENV,
                path.to_str().expect("utf-8 path"),
            )]))
            .expect("env path config");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(source, CliConfigSource::EnvPath(path));
    }

    #[test]
    fn extensionless_files_accept_either_format() {
        let toml_cfg = parse_from_str("tag_preview = 2", "inline").unwrap();
        assert_eq!(toml_cfg.tag_preview, 2);
        let json_cfg = parse_from_str(r#"{"tag_preview": 4}"#, "inline").unwrap();
        assert_eq!(json_cfg.tag_preview, 4);
        assert!(matches!(
            parse_from_str("{{ nope", "inline"),
            Err(ConfigLoadError::Unrecognized { .. })
        ));
    }

    #[test]
    fn invalid_toml_names_the_file() {
        let dir = empty_dir();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "output = 12").expect("write config");
        let err = load_from_file(&path).expect_err("bad type");
        assert!(err.to_string().contains("broken.toml"));
    }
}
