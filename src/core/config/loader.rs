use std::{fs, path::Path, time::Duration};

use super::{Config, ConfigError, ConfigPaths};
use crate::core::theme;

/// Reads `key = value` (or `key value`) lines; `#` starts a comment.
pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load_configs(&self, config: &mut Config) -> Result<(), ConfigError> {
        let Some(path) = &self.paths.rc_path else {
            return Ok(());
        };

        if self.paths.explicit && !path.exists() {
            return Err(ConfigError::ConfigFileNotFound(path.clone()));
        }
        self.source_if_exists(path, config)
    }

    fn source_if_exists(&self, path: &Path, config: &mut Config) -> Result<(), ConfigError> {
        if path.exists() {
            log::debug!("loading {}", path.display());
            let content = fs::read_to_string(path)?;
            Self::apply_str(&content, config);
        }
        Ok(())
    }

    /// Applies every valid line. Rejected lines keep the setting's previous
    /// value; they are logged and handed back.
    pub fn apply_str(content: &str, config: &mut Config) -> Vec<ConfigError> {
        let mut rejected = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if let Err(e) = Self::process_line(index + 1, line, config) {
                log::warn!("{}", e);
                rejected.push(e);
            }
        }
        rejected
    }

    fn process_line(number: usize, line: &str, config: &mut Config) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => line
                .split_once(char::is_whitespace)
                .map(|(key, value)| (key, value.trim()))
                .unwrap_or((line, "")),
        };
        let value = strip_quotes(value);

        let invalid = || ConfigError::InvalidValue {
            line: number,
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "theme" => {
                theme::find(value).ok_or_else(invalid)?;
                config.theme = value.to_string();
            }
            "editor" => {
                if value.is_empty() {
                    return Err(invalid());
                }
                config.editor = value.to_string();
            }
            "http_timeout" => match parse_seconds(value).ok_or_else(invalid)? {
                Some(timeout) => config.http_timeout = timeout,
                None => return Err(invalid()),
            },
            "editor_timeout" => config.editor_timeout = parse_seconds(value).ok_or_else(invalid)?,
            "history_size" => {
                config.history_size = value.parse().map_err(|_| invalid())?;
            }
            _ => log::warn!("line {}: unknown setting {:?} ignored", number, key),
        }
        Ok(())
    }
}

fn strip_quotes(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Whole seconds; `0` means no limit.
fn parse_seconds(value: &str) -> Option<Option<Duration>> {
    let secs: u64 = value.parse().ok()?;
    Some((secs > 0).then(|| Duration::from_secs(secs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn apply(content: &str) -> (Config, Vec<ConfigError>) {
        let mut config = Config::default();
        let rejected = ConfigLoader::apply_str(content, &mut config);
        (config, rejected)
    }

    #[test]
    fn test_all_keys() {
        let (config, rejected) = apply(
            r#"
            # sprig settings
            theme = light
            editor "nano"
            http_timeout = 5
            editor_timeout 600
            history_size = 50
            "#,
        );

        assert!(rejected.is_empty());
        assert_eq!(config.theme, "light");
        assert_eq!(config.editor, "nano");
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(config.editor_timeout, Some(Duration::from_secs(600)));
        assert_eq!(config.history_size, 50);
    }

    #[test]
    fn test_zero_editor_timeout_means_none() {
        let (config, _) = apply("editor_timeout = 0");
        assert_eq!(config.editor_timeout, None);
    }

    #[test]
    fn test_invalid_values_carry_line_number() {
        let (_, rejected) = apply("\ntheme = neon");
        assert!(matches!(rejected[..], [ConfigError::InvalidValue { line: 2, .. }]));

        for bad in [
            "http_timeout = soon",
            "http_timeout = 0",
            "history_size = -1",
            "editor =",
        ] {
            let (config, rejected) = apply(bad);
            assert_eq!(rejected.len(), 1, "{}", bad);
            assert_eq!(config, Config::default(), "{}", bad);
        }
    }

    #[test]
    fn test_bad_line_keeps_default_and_later_lines_apply() {
        let (config, rejected) = apply("theme = neon\neditor = nano\n");

        assert_eq!(rejected.len(), 1);
        assert_eq!(config.theme, Config::default().theme);
        assert_eq!(config.editor, "nano");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (config, rejected) = apply("colour = yes");
        assert!(rejected.is_empty());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let rc = tmp.path().join("sprigrc");
        fs::write(&rc, "theme = dark\n").unwrap();

        let paths = ConfigPaths::with_home(None, Some(rc));
        let mut config = Config::default();
        ConfigLoader::new(&paths).load_configs(&mut config).unwrap();
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_invalid_rc_file_still_loads() {
        let tmp = tempfile::tempdir().unwrap();
        let rc = tmp.path().join("sprigrc");
        fs::write(&rc, "theme = neon\nhistory_size = 10\n").unwrap();

        let paths = ConfigPaths::with_home(None, Some(rc));
        let mut config = Config::default();
        ConfigLoader::new(&paths).load_configs(&mut config).unwrap();
        assert_eq!(config.theme, Config::default().theme);
        assert_eq!(config.history_size, 10);
    }

    #[test]
    fn test_missing_default_rc_is_fine() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::with_home(Some(tmp.path().to_path_buf()), None);

        let mut config = Config::default();
        ConfigLoader::new(&paths).load_configs(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_explicit_rc_fails() {
        let paths = ConfigPaths::with_home(None, Some(PathBuf::from("/no/such/sprigrc")));
        let mut config = Config::default();

        assert!(matches!(
            ConfigLoader::new(&paths).load_configs(&mut config),
            Err(ConfigError::ConfigFileNotFound(_))
        ));
    }
}
