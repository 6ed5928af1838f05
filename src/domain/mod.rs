// ==========================================
// 批量导入工具 - 领域模型层
// ==========================================
// 职责: 定义记录、校验错误、导入上下文与汇总
// 红线: 不含 I/O，不含解析逻辑
// ==========================================

pub mod import;
pub mod record;

// 重导出核心类型
pub use import::{ImportContext, ImportSummary, ValidationError, FIELD_API, FIELD_CONFIG, FIELD_FILE};
pub use record::{FieldValue, Record};
