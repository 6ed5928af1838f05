// ==========================================
// 批量导入工具 - 配置层
// ==========================================
// 职责: 平台环境与运行参数管理,支持环境变量覆写
// 存储: TOML 文件
// ==========================================

pub mod app_config;
pub mod config_manager;
pub mod import_config_trait;

// 重导出核心配置管理器
pub use app_config::{AppConfig, Environment};
pub use config_manager::{config_keys, default_config_path, ConfigError, ConfigManager};
pub use import_config_trait::ImportConfigReader;
