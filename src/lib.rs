// ==========================================
// 批量导入工具 - 核心库
// ==========================================
// 职责: 读取 JSON/CSV 文件，按实体类型校验，逐条提交到远程平台
// 技术栈: Rust + tokio + reqwest
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与导入结果
pub mod domain;

// 导入层 - 解码、校验、编排
pub mod importer;

// API 层 - 远程传输
pub mod api;

// 配置层 - 运行参数
pub mod config;

// 应用层 - 装配与命令
pub mod app;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

#[cfg(test)]
mod testing;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{FieldValue, ImportContext, ImportSummary, Record, ValidationError};
pub use importer::{
    DiskFile, ImportError, ImportFile, ImportOrchestrator, ImportStrategy, InMemoryFile,
    StrategyRegistry,
};
pub use api::{ApiError, HttpTransport, Transport};

// ==========================================
// 常量定义
// ==========================================

// 版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 名称
pub const APP_NAME: &str = "mass-import";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
