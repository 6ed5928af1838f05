// ==========================================
// 批量导入工具 - 传输层错误类型
// ==========================================
// 职责: 描述一次远程提交失败（HTTP 状态码 + 可读消息 + 业务错误码）
// ==========================================

use crate::i18n::{t, t_with_args};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

const INVALID_HEADER_CODE: &str = "INVALID_HEADER";

/// 传输层错误
///
/// status = 0 表示请求未到达服务器（连接失败或请求头非法）。
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub error_code: Option<String>,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>, error_code: Option<String>) -> Self {
        Self {
            status,
            message: message.into(),
            error_code,
        }
    }

    /// 连接失败（未收到响应）
    pub fn connection() -> Self {
        Self::new(0, t("api.connection"), None)
    }

    /// 请求头无法编码，请求未发出
    pub fn invalid_header(name: &str) -> Self {
        Self::new(
            0,
            t_with_args("api.invalid_header", &[("name", name)]),
            Some(INVALID_HEADER_CODE.to_string()),
        )
    }

    pub fn is_connection_error(&self) -> bool {
        self.status == 0 && self.error_code.as_deref() != Some(INVALID_HEADER_CODE)
    }

    /// 从失败响应构造错误
    ///
    /// # 规则
    /// - 消息依次取 display_message / message / error_description / error
    /// - 均缺失时按状态码给出兜底消息
    /// - 存在 error_code 时消息前缀为 "[CODE] "
    pub fn from_response(status: u16, body: Option<&Value>) -> Self {
        let (message, error_code) = body
            .map(extract_body_info)
            .unwrap_or((None, None));

        let message = message.unwrap_or_else(|| fallback_message(status));
        let message = match &error_code {
            Some(code) => format!("[{}] {}", code, message),
            None => message,
        };

        Self::new(status, message, error_code)
    }
}

/// 从响应体提取消息与错误码
fn extract_body_info(body: &Value) -> (Option<String>, Option<String>) {
    let Some(obj) = body.as_object() else {
        return (None, None);
    };

    let message = ["display_message", "message", "error_description", "error"]
        .iter()
        .filter_map(|key| obj.get(*key))
        .find_map(non_empty_text);
    let error_code = obj.get("error_code").and_then(non_empty_text);

    (message, error_code)
}

fn non_empty_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn fallback_message(status: u16) -> String {
    match status {
        400 => t("api.status_400"),
        401 => t("api.status_401"),
        s if s >= 500 => t("api.status_5xx"),
        s => t_with_args("api.status_other", &[("status", s.to_string().as_str())]),
    }
}
