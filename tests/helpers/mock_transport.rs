// ==========================================
// Mock 传输实现 - 用于集成测试
// ==========================================
// 记录每次提交（地址、请求头、请求体），可按调用序号注入失败
// ==========================================

#![allow(dead_code)]

use async_trait::async_trait;
use mass_import::api::{ApiError, Headers, Transport};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// 一次已记录的提交
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub headers: Headers,
    pub body: Value,
}

#[derive(Default)]
pub struct MockTransport {
    calls: Mutex<Vec<RecordedCall>>,
    failures: HashMap<usize, ApiError>,
}

impl MockTransport {
    /// 全部成功
    pub fn new() -> Self {
        Self::default()
    }

    /// 第 call_no 次调用（1 起始）返回指定错误
    pub fn fail_on(mut self, call_no: usize, error: ApiError) -> Self {
        self.failures.insert(call_no, error);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_json(&self, url: &str, headers: &Headers, body: &Value) -> Result<Value, ApiError> {
        let call_no = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(RecordedCall {
                url: url.to_string(),
                headers: headers.clone(),
                body: body.clone(),
            });
            calls.len()
        };

        match self.failures.get(&call_no) {
            Some(err) => Err(err.clone()),
            None => Ok(serde_json::json!({ "id": call_no })),
        }
    }
}
