use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "oqm.toml";

const ENV_NAME_API_URL: &str = "OQM_API_URL";

pub struct Config {
    pub api: Api,
    pub output: Output,
}

/// API base address set in the environment, if any.
pub fn api_url_from_env() -> Option<String> {
    env::var(ENV_NAME_API_URL).ok()
}

impl Config {
    /// Load the configuration file and apply an API URL override on top of it.
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(
        file_path: Option<P>,
        api_url: Option<String>,
    ) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Some(api_url) = api_url {
            cfg.api = Api::try_new(api_url)?;
        }
        Ok(cfg)
    }
}

pub struct Api {
    /// Base address of the REST API
    pub url: String,
}

impl Api {
    pub fn try_new(url: String) -> Result<Self> {
        if url.trim().is_empty() {
            return Err(anyhow!("No API URL defined"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(anyhow!("Invalid API URL '{url}': expected http:// or https://"));
        }
        Ok(Self { url })
    }
}

pub struct Output {
    pub pretty: bool,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { api, output } = from;

        let raw::Api { url } = api.unwrap_or_default();
        let api = Api::try_new(url)?;

        let raw::Output { pretty } = output.unwrap_or_default();
        let output = Output { pretty };

        Ok(Self { api, output })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("oqm-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn load_default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(cfg.api.url, "http://localhost:3001/api");
        assert!(cfg.output.pretty);
    }

    #[test]
    fn load_missing_file() {
        let dir = temp_dir("missing-config-test");
        let file = dir.join("oqm.toml");
        let cfg = Config::try_load_from_file_or_default(Some(&file), None).unwrap();
        assert_eq!(cfg.api.url, "http://localhost:3001/api");
        assert!(cfg.output.pretty);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_config_file() {
        let dir = temp_dir("config-test");
        let file = dir.join("oqm.toml");
        fs::write(&file, "[output]\npretty = false\n").unwrap();
        let cfg = Config::try_load_from_file_or_default(Some(&file), None).unwrap();
        assert!(!cfg.output.pretty);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn invalid_config_file() {
        let dir = temp_dir("invalid-config-test");
        let file = dir.join("oqm.toml");
        fs::write(&file, "[output\n").unwrap();
        assert!(Config::try_load_from_file_or_default(Some(&file), None).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn override_api_url_of_config_file() {
        let dir = temp_dir("override-config-test");
        let file = dir.join("oqm.toml");
        fs::write(&file, "[api]\nurl = \"http://file.local/api\"\n").unwrap();
        let cfg = Config::try_load_from_file_or_default(Some(&file), None).unwrap();
        assert_eq!(cfg.api.url, "http://file.local/api");
        let cfg = Config::try_load_from_file_or_default(
            Some(&file),
            Some("https://queue.example.org/api".into()),
        )
        .unwrap();
        assert_eq!(cfg.api.url, "https://queue.example.org/api");
        assert!(
            Config::try_load_from_file_or_default(Some(&file), Some("queue.example.org".into()))
                .is_err()
        );
        assert!(Config::try_load_from_file_or_default(Some(&file), Some(String::new())).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn read_api_url_from_env() {
        env::set_var(ENV_NAME_API_URL, "http://env.local/api");
        assert_eq!(api_url_from_env().as_deref(), Some("http://env.local/api"));
        env::remove_var(ENV_NAME_API_URL);
        assert!(api_url_from_env().is_none());
    }

    #[test]
    fn fill_missing_sections_with_defaults() {
        let raw_cfg = raw::Config {
            api: None,
            output: Some(raw::Output { pretty: false }),
        };
        let cfg = Config::try_from(raw_cfg).unwrap();
        assert_eq!(cfg.api.url, raw::Api::default().url);
        assert!(!cfg.output.pretty);
    }

    #[test]
    fn reject_invalid_api_urls() {
        assert!(Api::try_new(String::new()).is_err());
        assert!(Api::try_new("  ".into()).is_err());
        assert!(Api::try_new("localhost:3001/api".into()).is_err());
        assert!(Api::try_new("https://queue.example.org/api/".into()).is_ok());
    }
}
