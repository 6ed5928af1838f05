// ==========================================
// 批量导入工具 - 应用层
// ==========================================
// 职责: 装配依赖、会话管理、命令入口
// ==========================================

pub mod commands;
pub mod error;
pub mod session;
pub mod state;

// 重导出
pub use commands::{DataTypeInfo, ImportOutcome, ValidationReport};
pub use error::{AppError, ErrorResponse};
pub use session::Session;
pub use state::AppState;
