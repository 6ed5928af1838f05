// ==========================================
// 批量导入工具 - 导入领域对象
// ==========================================
// 职责: 校验错误、导入上下文、导入汇总
// ==========================================

use serde::{Deserialize, Serialize};

/// 文件级错误的字段名
pub const FIELD_FILE: &str = "Arquivo";
/// 配置级错误的字段名（未注册的数据类型）
pub const FIELD_CONFIG: &str = "Configuração";
/// 提交失败的字段名
pub const FIELD_API: &str = "API";

// ==========================================
// ValidationError - 校验/提交错误条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>, // 1 起始行号；文件级/配置级错误为空
    pub field: String,      // 字段显示名
    pub error: String,      // 可读错误描述
}

impl ValidationError {
    /// 行级错误
    pub fn at_row(row: usize, field: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            row: Some(row),
            field: field.into(),
            error: error.into(),
        }
    }

    /// 文件级错误（无行号）
    pub fn file(error: impl Into<String>) -> Self {
        Self {
            row: None,
            field: FIELD_FILE.to_string(),
            error: error.into(),
        }
    }

    /// 配置级错误（无行号）
    pub fn config(error: impl Into<String>) -> Self {
        Self {
            row: None,
            field: FIELD_CONFIG.to_string(),
            error: error.into(),
        }
    }
}

// ==========================================
// ImportContext - 导入上下文
// ==========================================
// 由会话层组装，核心只读不缓存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportContext {
    pub base_url: String,
    pub auth_token: String,
    pub organization_id: String,
    pub company_id: String,
}

impl ImportContext {
    /// 拼接接口地址（容忍 base_url 末尾的 '/'）
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

// ==========================================
// ImportSummary - 导入汇总
// ==========================================
// 不变量: total == imported + failed（解码成功时）；errors.len() == failed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total: usize,
    pub imported: usize,
    pub failed: usize,
    pub errors: Vec<ValidationError>,
}

impl ImportSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// 解码失败时的汇总：total=0, failed=1
    pub fn decode_failure(error: ValidationError) -> Self {
        Self {
            total: 0,
            imported: 0,
            failed: 1,
            errors: vec![error],
        }
    }

    pub fn record_success(&mut self) {
        self.imported += 1;
    }

    pub fn record_failure(&mut self, error: ValidationError) {
        self.failed += 1;
        self.errors.push(error);
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
