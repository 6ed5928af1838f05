// ==========================================
// 批量导入工具 - 应用命令
// ==========================================
// 职责: 命令行入口调用的业务命令，返回可序列化结果
// ==========================================

use crate::app::error::AppError;
use crate::app::session::Session;
use crate::app::state::AppState;
use crate::domain::{ImportSummary, ValidationError};
use crate::importer::{ImportFile, RecordOutcome};
use serde::Serialize;

/// 数据类型说明
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DataTypeInfo {
    pub data_type: String,
    pub label: String,
}

/// 校验报告
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

/// 导入结果：校验未通过则不提交任何记录
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImportOutcome {
    Rejected { errors: Vec<ValidationError> },
    Completed { summary: ImportSummary },
}

impl ImportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ImportOutcome::Completed { summary } if !summary.has_failures())
    }
}

// ==========================================
// 数据类型相关命令
// ==========================================

/// 列出已注册的数据类型
pub fn list_data_types(state: &AppState) -> Vec<DataTypeInfo> {
    let registry = state.orchestrator.registry();
    registry
        .data_types()
        .into_iter()
        .filter_map(|data_type| {
            let strategy = registry.resolve(&data_type).ok()?;
            Some(DataTypeInfo {
                label: strategy.label().to_string(),
                data_type,
            })
        })
        .collect()
}

/// 生成 CSV 模板表头（';' 分隔）
pub fn template_header(state: &AppState, data_type: &str) -> Result<String, AppError> {
    let strategy = state.orchestrator.registry().resolve(data_type)?;
    Ok(strategy.template_headers().join(";"))
}

// ==========================================
// 导入相关命令
// ==========================================

/// 校验文件
pub async fn validate_file(
    state: &AppState,
    data_type: &str,
    file: &dyn ImportFile,
) -> ValidationReport {
    tracing::info!(data_type = %data_type, file = %file.name(), "[validate_file] 收到请求");

    let errors = state.orchestrator.validate_import(data_type, file).await;
    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

/// 先校验、后导入
///
/// # 返回
/// - Ok(Rejected): 校验未通过
/// - Ok(Completed): 已逐条提交（可能含单条失败）
/// - Err: 会话不完整或数据类型未注册
pub async fn import_file(
    state: &AppState,
    session: &Session,
    data_type: &str,
    file: &dyn ImportFile,
) -> Result<ImportOutcome, AppError> {
    tracing::info!(data_type = %data_type, file = %file.name(), "[import_file] 收到请求");

    let ctx = session.import_context()?;

    let errors = state.orchestrator.validate_import(data_type, file).await;
    if !errors.is_empty() {
        tracing::warn!(errors = errors.len(), "[import_file] 校验未通过，取消导入");
        return Ok(ImportOutcome::Rejected { errors });
    }

    let summary = state
        .orchestrator
        .execute_import_with_progress(data_type, file, &ctx, |progress| {
            if let RecordOutcome::Failed(message) = &progress.outcome {
                tracing::warn!(row = progress.row, total = progress.total, error = %message, "[import_file] 记录失败");
            } else {
                tracing::debug!(row = progress.row, total = progress.total, "[import_file] 记录完成");
            }
        })
        .await
        .map_err(|e| {
            tracing::error!("[import_file] 导入失败: {}", e);
            AppError::from(e)
        })?;

    tracing::info!(
        imported = summary.imported,
        failed = summary.failed,
        "[import_file] 导入结束"
    );
    Ok(ImportOutcome::Completed { summary })
}
