// ==========================================
// 批量导入工具 - API 层
// ==========================================
// 职责: 远程平台的传输抽象、鉴权头构建、传输错误
// 红线: 不含业务规则，不感知实体类型
// ==========================================

pub mod auth;
pub mod error;
pub mod transport;

// 重导出核心类型
pub use auth::{build_auth_headers, redact_headers, Headers, HEADER_COMPANY, HEADER_ORGANIZATION};
pub use error::ApiError;
pub use transport::{HttpTransport, Transport};
