// ==========================================
// 批量导入工具 - 鉴权请求头
// ==========================================

use std::collections::BTreeMap;

pub const HEADER_ORGANIZATION: &str = "sil-organization";
pub const HEADER_COMPANY: &str = "sil-company";

/// 请求头集合（有序，便于日志输出）
pub type Headers = BTreeMap<String, String>;

/// 构建带鉴权的请求头
pub fn build_auth_headers(token: &str, organization_id: &str, company_id: &str) -> Headers {
    let mut headers = Headers::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert("Authorization".to_string(), format!("Bearer {}", token));
    headers.insert(HEADER_ORGANIZATION.to_string(), organization_id.to_string());
    headers.insert(HEADER_COMPANY.to_string(), company_id.to_string());
    headers
}

/// 日志用：隐藏 Authorization
pub fn redact_headers(headers: &Headers) -> Headers {
    headers
        .iter()
        .map(|(k, v)| {
            if k.eq_ignore_ascii_case("authorization") {
                (k.clone(), "[REDACTED]".to_string())
            } else {
                (k.clone(), v.clone())
            }
        })
        .collect()
}
