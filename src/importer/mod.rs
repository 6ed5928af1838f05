// ==========================================
// 批量导入工具 - 导入层
// ==========================================
// 职责: 文件解码、按实体类型校验、逐条提交
// 支持: JSON, CSV
// ==========================================

// 模块声明
pub mod error;
pub mod file_parser;
pub mod orchestrator;
pub mod registry;
pub mod strategies;
pub mod strategy;
pub mod validators;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{
    CsvParser, DiskFile, FileParser, ImportFile, InMemoryFile, JsonParser, UniversalFileParser,
};
pub use orchestrator::{ImportOrchestrator, ImportProgress, RecordOutcome};
pub use registry::StrategyRegistry;
pub use strategy::ImportStrategy;
