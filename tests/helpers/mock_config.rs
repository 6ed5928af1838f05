// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use mass_import::config::{Environment, ImportConfigReader};
use std::time::Duration;

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub environment: Option<Environment>,
    pub base_url: Option<String>,
    pub timeout: Duration,
    pub locale: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            environment: Some(Environment::Test),
            base_url: None,
            timeout: Duration::from_secs(5),
            locale: "pt-BR".to_string(),
        }
    }
}

impl ImportConfigReader for MockConfig {
    fn environment(&self) -> Option<Environment> {
        self.environment
    }

    fn base_url(&self) -> Option<String> {
        self.base_url
            .clone()
            .or_else(|| self.environment.map(|env| env.base_url().to_string()))
    }

    fn request_timeout(&self) -> Duration {
        self.timeout
    }

    fn locale(&self) -> String {
        self.locale.clone()
    }
}
