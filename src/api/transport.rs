// ==========================================
// 批量导入工具 - 传输层
// ==========================================
// 职责: 执行一次网络请求，返回解析后的响应数据或 ApiError
// 红线: 不重试；超时由 HttpTransport 的 reqwest 客户端负责
// ==========================================

use crate::api::auth::{redact_headers, Headers};
use crate::api::error::ApiError;
use crate::i18n::t_with_args;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

// ==========================================
// Transport Trait
// ==========================================
// 用途: 策略提交记录时使用的网络抽象
// 实现者: HttpTransport；测试中使用记录调用的 Mock
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST 一个 JSON 请求体
    ///
    /// # 返回
    /// - Ok(Value): 响应体（空响应为 Value::Null）
    /// - Err(ApiError): 连接失败或非 2xx 响应
    async fn post_json(&self, url: &str, headers: &Headers, body: &Value)
        -> Result<Value, ApiError>;
}

// ==========================================
// HttpTransport - reqwest 实现
// ==========================================
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// 创建带请求超时的 HTTP 传输
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::new(0, e.to_string(), None))?;
        Ok(Self { client })
    }

    /// 头名或头值非法时整个请求不发出，错误中给出头名
    fn header_map(headers: &Headers) -> Result<HeaderMap, ApiError> {
        let mut map = HeaderMap::new();
        for (k, v) in headers {
            let name = HeaderName::from_bytes(k.as_bytes())
                .map_err(|_| ApiError::invalid_header(k))?;
            let value = HeaderValue::from_str(v).map_err(|_| ApiError::invalid_header(k))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: &Headers,
        body: &Value,
    ) -> Result<Value, ApiError> {
        debug!(
            url = %url,
            headers = ?redact_headers(headers),
            body = %body,
            "[API Request] POST"
        );

        let header_map = Self::header_map(headers).map_err(|e| {
            error!(url = %url, error = %e, "[API Error] 请求头非法，请求未发出");
            e
        })?;

        let response = self
            .client
            .post(url)
            .headers(header_map)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "[API Error] POST 连接失败");
                ApiError::connection()
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(url = %url, error = %e, "[API Error] 读取响应失败");
            ApiError::new(
                status.as_u16(),
                t_with_args("api.invalid_response", &[("reason", e.to_string().as_str())]),
                None,
            )
        })?;
        let parsed = parse_body(&text);

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), parsed.as_ref());
            error!(
                url = %url,
                status = status.as_u16(),
                error_code = err.error_code.as_deref().unwrap_or("N/A"),
                body = %text,
                "[API Response] POST 失败"
            );
            return Err(err);
        }

        info!(url = %url, status = status.as_u16(), "[API Response] POST 成功");
        Ok(parsed.unwrap_or(Value::Null))
    }
}

/// 解析响应体；非 JSON 文本按字符串保留
fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}
