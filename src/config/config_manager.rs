// ==========================================
// 批量导入工具 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、查询
// 来源优先级: 环境变量 > 配置文件 > 默认值
// 存储: TOML 文件（--config 指定，或用户配置目录）
// ==========================================

use crate::config::app_config::{AppConfig, Environment};
use crate::config::import_config_trait::ImportConfigReader;
use crate::i18n::t_with_args;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

// ==========================================
// 配置键（环境变量）
// ==========================================
pub mod config_keys {
    pub const ENVIRONMENT: &str = "MASS_IMPORT_ENV";
    pub const BASE_URL: &str = "MASS_IMPORT_BASE_URL";
    pub const TIMEOUT_SECS: &str = "MASS_IMPORT_TIMEOUT_SECS";
    pub const LOCALE: &str = "MASS_IMPORT_LOCALE";

    // 鉴权凭据只从命令行/环境变量读取
    pub const TOKEN: &str = "MASS_IMPORT_TOKEN";
    pub const ORGANIZATION: &str = "MASS_IMPORT_ORG";
    pub const COMPANY: &str = "MASS_IMPORT_COMPANY";
}

const APP_DIR: &str = "mass-import";
const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{}", config_message("config.read_failed", .path, .source))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", config_message("config.parse_failed", .path, .source))]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{}", invalid_value_message(.key, .value))]
    InvalidValue { key: String, value: String },
}

fn invalid_value_message(key: &str, value: &str) -> String {
    t_with_args("config.invalid_value", &[("key", key), ("value", value)])
}

fn config_message(key: &str, path: &Path, reason: &dyn std::fmt::Display) -> String {
    t_with_args(
        key,
        &[
            ("path", path.display().to_string().as_str()),
            ("reason", reason.to_string().as_str()),
        ],
    )
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: AppConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 直接使用给定配置（测试与嵌入场景）
    pub fn from_config(config: AppConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// 加载配置并应用进程环境变量覆写
    ///
    /// # 参数
    /// - path: 显式配置文件路径；None 时尝试默认位置，不存在则使用默认值
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut manager = match path {
            Some(p) => Self::from_file(p)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(p) => Self::from_file(&p)?,
                None => {
                    debug!("未找到配置文件，使用默认配置");
                    Self::default()
                }
            },
        };
        manager.apply_env_overrides(|key| std::env::var(key).ok())?;

        info!(
            source = ?manager.source,
            environment = ?manager.config.environment,
            locale = %manager.config.locale,
            "配置加载完成"
        );
        Ok(manager)
    }

    /// 从 TOML 文件读取
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// 应用环境变量覆写
    ///
    /// # 参数
    /// - lookup: 变量读取函数（便于测试时注入）
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = read(config_keys::ENVIRONMENT) {
            let env = value
                .parse::<Environment>()
                .map_err(|_| invalid(config_keys::ENVIRONMENT, &value))?;
            self.config.environment = Some(env);
        }

        if let Some(value) = read(config_keys::BASE_URL) {
            self.config.base_url = Some(value.trim().to_string());
        }

        if let Some(value) = read(config_keys::TIMEOUT_SECS) {
            let secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| invalid(config_keys::TIMEOUT_SECS, &value))?;
            self.config.request_timeout_secs = secs;
        }

        if let Some(value) = read(config_keys::LOCALE) {
            self.config.locale = value.trim().to_string();
        }

        Ok(())
    }

    /// 命令行选择的环境优先于配置
    pub fn set_environment(&mut self, environment: Environment) {
        self.config.environment = Some(environment);
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// 用户配置目录下的默认配置文件
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

// ==========================================
// ImportConfigReader Trait 实现
// ==========================================
impl ImportConfigReader for ConfigManager {
    fn environment(&self) -> Option<Environment> {
        self.config.environment
    }

    fn base_url(&self) -> Option<String> {
        self.config.resolved_base_url()
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.request_timeout_secs)
    }

    fn locale(&self) -> String {
        self.config.locale.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let manager = ConfigManager::default();
        assert_eq!(manager.environment(), None);
        assert_eq!(manager.base_url(), None);
        assert_eq!(manager.request_timeout(), Duration::from_secs(30));
        assert_eq!(manager.locale(), "pt-BR");
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "environment = \"staging\"\nrequest_timeout_secs = 10").unwrap();

        let manager = ConfigManager::from_file(file.path()).unwrap();
        assert_eq!(manager.environment(), Some(Environment::Staging));
        assert_eq!(manager.request_timeout(), Duration::from_secs(10));
        assert_eq!(manager.locale(), "pt-BR");
        assert_eq!(manager.source(), Some(file.path()));
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "environment = [").unwrap();

        let result = ConfigManager::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("Arquivo de configuração inválido"));
        assert!(message.contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_from_file_missing_is_localized() {
        let result = ConfigManager::from_file(Path::new("/nao/existe/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("Falha ao ler o arquivo de configuração /nao/existe/config.toml"));
    }

    #[test]
    fn test_env_overrides() {
        let mut manager = ConfigManager::default();
        manager
            .apply_env_overrides(lookup(&[
                (config_keys::ENVIRONMENT, "sandbox"),
                (config_keys::TIMEOUT_SECS, "5"),
                (config_keys::LOCALE, "en"),
            ]))
            .unwrap();

        assert_eq!(manager.environment(), Some(Environment::Sandbox));
        assert_eq!(manager.request_timeout(), Duration::from_secs(5));
        assert_eq!(manager.locale(), "en");
    }

    #[test]
    fn test_env_override_rejects_invalid_values() {
        let mut manager = ConfigManager::default();
        let result = manager.apply_env_overrides(lookup(&[(config_keys::TIMEOUT_SECS, "0")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Valor inválido para a configuração MASS_IMPORT_TIMEOUT_SECS: 0"
        );

        let result = manager.apply_env_overrides(lookup(&[(config_keys::ENVIRONMENT, "dev")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_blank_env_values_ignored() {
        let mut manager = ConfigManager::default();
        manager
            .apply_env_overrides(lookup(&[(config_keys::BASE_URL, "  ")]))
            .unwrap();
        assert_eq!(manager.base_url(), None);
    }
}
