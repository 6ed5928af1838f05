// ==========================================
// 批量导入工具 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 消息: 经 i18n 输出（默认 pt-BR）
// ==========================================

use crate::api::error::ApiError;
use crate::i18n::{t, t_with_args};
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("{}", unsupported_format_message(.0))]
    UnsupportedFormat(String),

    /// 结构不符合预期（CSV 行数不足、JSON 形状错误等），消息已本地化
    #[error("{0}")]
    InvalidFormat(String),

    #[error("{}", json_malformed_message(.0))]
    JsonParse(#[from] serde_json::Error),

    #[error("{}", read_failed_message(.0))]
    FileReadError(String),

    // ===== 配置错误 =====
    #[error("{}", unknown_data_type_message(.0))]
    UnknownDataType(String),

    // ===== 提交错误 =====
    #[error(transparent)]
    Submission(#[from] ApiError),
}

impl ImportError {
    /// 是否为文件解码阶段的错误
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            ImportError::UnsupportedFormat(_)
                | ImportError::InvalidFormat(_)
                | ImportError::JsonParse(_)
                | ImportError::FileReadError(_)
        )
    }

    pub(crate) fn csv_too_short() -> Self {
        ImportError::InvalidFormat(t("decoder.csv_too_short"))
    }

    pub(crate) fn json_shape() -> Self {
        ImportError::InvalidFormat(t("decoder.json_shape"))
    }

    pub(crate) fn json_element(index: usize) -> Self {
        ImportError::InvalidFormat(t_with_args(
            "decoder.json_element",
            &[("index", index.to_string().as_str())],
        ))
    }
}

fn unsupported_format_message(ext: &str) -> String {
    t_with_args("decoder.unsupported_format", &[("ext", ext)])
}

fn json_malformed_message(err: &serde_json::Error) -> String {
    t_with_args("decoder.json_malformed", &[("reason", err.to_string().as_str())])
}

fn read_failed_message(reason: &str) -> String {
    t_with_args("decoder.read_failed", &[("reason", reason)])
}

fn unknown_data_type_message(data_type: &str) -> String {
    t_with_args("orchestrator.unknown_type", &[("data_type", data_type)])
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::InvalidFormat(t_with_args(
            "decoder.csv_malformed",
            &[("reason", err.to_string().as_str())],
        ))
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
