// ==========================================
// 批量导入工具 - 应用配置对象
// ==========================================
// 职责: 平台环境、接口地址、超时与界面语言
// 红线: 不保存鉴权凭据
// ==========================================

use crate::i18n::{t_with_args, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ==========================================
// Environment - 平台环境
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Test,
    Staging,
    Sandbox,
    Prod,
}

impl Environment {
    /// 环境对应的平台地址
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Test => "https://api.platform.test.silsistemas.com.br",
            Environment::Staging => "https://api.platform.staging.silsistemas.com.br",
            Environment::Sandbox => "https://api.platform.sandbox.silsistemas.com.br",
            Environment::Prod => "https://api.platform.silsistemas.com.br",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Sandbox => "sandbox",
            Environment::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "test" => Ok(Environment::Test),
            "staging" => Ok(Environment::Staging),
            "sandbox" => Ok(Environment::Sandbox),
            "prod" => Ok(Environment::Prod),
            other => Err(t_with_args("config.unknown_environment", &[("value", other)])),
        }
    }
}

// ==========================================
// AppConfig - 配置文件结构
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 平台环境（未选择时导入不可用）
    pub environment: Option<Environment>,

    /// 显式接口地址，优先于 environment
    pub base_url: Option<String>,

    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,

    /// 界面语言
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: None,
            base_url: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl AppConfig {
    /// 生效的接口地址：base_url > environment
    pub fn resolved_base_url(&self) -> Option<String> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .or_else(|| self.environment.map(|env| env.base_url().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Sandbox.base_url(),
            "https://api.platform.sandbox.silsistemas.com.br"
        );
        assert_eq!(Environment::Prod.base_url(), "https://api.platform.silsistemas.com.br");
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("STAGING".parse::<Environment>(), Ok(Environment::Staging));
        assert_eq!(
            "dev".parse::<Environment>(),
            Err("Ambiente desconhecido: dev. Permitidos: test, staging, sandbox, prod".to_string())
        );
    }

    #[test]
    fn test_resolved_base_url_precedence() {
        let mut config = AppConfig::default();
        assert_eq!(config.resolved_base_url(), None);

        config.environment = Some(Environment::Test);
        assert_eq!(
            config.resolved_base_url().as_deref(),
            Some("https://api.platform.test.silsistemas.com.br")
        );

        config.base_url = Some("http://localhost:8080".to_string());
        assert_eq!(config.resolved_base_url().as_deref(), Some("http://localhost:8080"));

        config.base_url = Some("   ".to_string());
        assert_eq!(
            config.resolved_base_url().as_deref(),
            Some("https://api.platform.test.silsistemas.com.br")
        );
    }
}
