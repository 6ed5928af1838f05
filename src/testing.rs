// ==========================================
// 单元测试公共替身
// ==========================================

use crate::api::{ApiError, Headers, Transport};
use crate::domain::ImportContext;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Mutex;

/// 始终成功、不记录任何内容的传输
pub struct NoopTransport;

#[async_trait]
impl Transport for NoopTransport {
    async fn post_json(&self, _url: &str, _headers: &Headers, _body: &Value) -> Result<Value, ApiError> {
        Ok(Value::Null)
    }
}

/// 记录每次调用；第 N 次调用（1 起始）可配置为失败
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<(String, Value)>>,
    failing_calls: HashSet<usize>,
}

impl RecordingTransport {
    pub fn failing_on(calls: &[usize]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing_calls: calls.iter().copied().collect(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post_json(&self, url: &str, _headers: &Headers, body: &Value) -> Result<Value, ApiError> {
        let call_no = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((url.to_string(), body.clone()));
            calls.len()
        };
        if self.failing_calls.contains(&call_no) {
            return Err(ApiError::new(400, "Registro rejeitado", None));
        }
        Ok(Value::Null)
    }
}

pub fn test_context() -> ImportContext {
    ImportContext {
        base_url: "https://api.test.local".to_string(),
        auth_token: "token-teste".to_string(),
        organization_id: "org-1".to_string(),
        company_id: "emp-1".to_string(),
    }
}
