use crate::error::{LauncherError, LauncherResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a configuration file for the launcher binary.
pub const CONFIG_ENV_VAR: &str = "WALLET_LAUNCHER_CONFIG";

/// Default ceiling on probe file names tried before giving up.
pub const DEFAULT_MAX_PROBE_ATTEMPTS: u32 = 64;

/// Names and limits used during bootstrap.
///
/// Every field has a default; a configuration file only needs the fields it
/// changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Application identity handed to the platform integration.
    pub application_name: String,
    /// Directory next to the executable that forces portable mode.
    pub portable_dir_name: String,
    /// Working directory name appended to the selected base.
    pub data_dir_name: String,
    /// Marker file whose presence means a prior run initialized the directory.
    pub salt_marker: String,
    /// Prefix of transient probe files.
    pub temp_prefix: String,
    pub max_probe_attempts: u32,
    /// Resource identifier of the bundled font configuration.
    pub font_config_source: String,
    /// File name the font configuration is staged under in the temp directory.
    pub font_config_file_name: String,
    /// Application binary next to the launcher that runs the UI.
    pub app_binary: Option<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            application_name: "Gram Wallet".to_string(),
            portable_dir_name: "WalletForcePortable".to_string(),
            data_dir_name: "data".to_string(),
            salt_marker: "salt".to_string(),
            temp_prefix: "temp".to_string(),
            max_probe_attempts: DEFAULT_MAX_PROBE_ATTEMPTS,
            font_config_source: ":/fc/fc-custom.conf".to_string(),
            font_config_file_name: "fc-custom-1.conf".to_string(),
            app_binary: None,
        }
    }
}

impl LauncherConfig {
    pub fn validate(&self) -> LauncherResult<()> {
        if self.application_name.trim().is_empty() {
            return Err(LauncherError::config("application_name must not be empty"));
        }
        let names = [
            ("portable_dir_name", &self.portable_dir_name),
            ("data_dir_name", &self.data_dir_name),
            ("salt_marker", &self.salt_marker),
            ("temp_prefix", &self.temp_prefix),
            ("font_config_file_name", &self.font_config_file_name),
        ];
        for (field, value) in names {
            validate_file_name(field, value)?;
        }
        if let Some(binary) = self.app_binary.as_ref() {
            validate_file_name("app_binary", binary)?;
        }
        if self.max_probe_attempts == 0 {
            return Err(LauncherError::config(
                "max_probe_attempts must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Names must be a single path component.
fn validate_file_name(field: &str, value: &str) -> LauncherResult<()> {
    if value.is_empty() || value == "." || value == ".." || value.contains(['/', '\\']) {
        return Err(LauncherError::config(format!(
            "{field} must be a plain file name, got `{value}`"
        )));
    }
    Ok(())
}

/// Load a configuration file. YAML is used for `.yaml`/`.yml`, JSON otherwise.
pub fn load_config_file(path: &Path) -> LauncherResult<LauncherConfig> {
    let data = fs::read_to_string(path).map_err(|source| LauncherError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    let config: LauncherConfig = if is_yaml {
        serde_yml::from_str(&data)
            .map_err(|err| LauncherError::config(format!("failed to parse yaml: {err}")))?
    } else {
        serde_json::from_str(&data)
            .map_err(|err| LauncherError::config(format!("failed to parse json: {err}")))?
    };
    config.validate()?;
    Ok(config)
}

/// Load the file named by [`CONFIG_ENV_VAR`], or defaults when it is unset.
pub fn load_config_from_env() -> LauncherResult<LauncherConfig> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => load_config_file(&PathBuf::from(path)),
        _ => Ok(LauncherConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(LauncherConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_path_like_marker_names() {
        let config = LauncherConfig {
            salt_marker: "../salt".to_string(),
            ..LauncherConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_probe_ceiling() {
        let config = LauncherConfig {
            max_probe_attempts: 0,
            ..LauncherConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: LauncherConfig =
            serde_json::from_str(r#"{"app_binary": "Wallet"}"#).unwrap_or_default();
        assert_eq!(config.app_binary.as_deref(), Some("Wallet"));
        assert_eq!(config.portable_dir_name, "WalletForcePortable");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let parsed = serde_json::from_str::<LauncherConfig>(r#"{"portable": true}"#);
        assert!(parsed.is_err());
    }
}
