// ==========================================
// 批量导入工具 - 应用层错误
// ==========================================
// 职责: 汇总各层错误，映射为稳定错误代码供调用方使用
// ==========================================

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::importer::ImportError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// 会话信息不完整（消息已本地化）
    #[error("{0}")]
    Session(String),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AppError {
    /// 稳定错误代码
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Session(_) => "SESSION_ERROR",
            AppError::Import(ImportError::UnknownDataType(_)) => "UNKNOWN_DATA_TYPE",
            AppError::Import(_) => "IMPORT_ERROR",
            AppError::Api(e) if e.is_connection_error() => "CONNECTION_ERROR",
            AppError::Api(_) => "API_ERROR",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let details = match self {
            AppError::Api(e) => Some(serde_json::json!({
                "status": e.status,
                "error_code": e.error_code,
            })),
            _ => None,
        };
        ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            details,
        }
    }
}

/// 错误响应（命令输出）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
