// ==========================================
// 批量导入工具 - 导入编排器
// ==========================================
// 职责: 解析策略 → 解码文件 → 全量校验 / 逐条导入
// 流程: 校验阶段一次性给出全部问题；导入阶段严格按文件顺序逐条提交
// 红线: 单条记录失败不得中断批次；不并发、不重试
// ==========================================

use crate::domain::{ImportContext, ImportSummary, ValidationError, FIELD_API};
use crate::i18n::{t, t_with_args};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{ImportFile, UniversalFileParser};
use crate::importer::registry::StrategyRegistry;
use std::time::Instant;
use tracing::{debug, info, instrument, warn, Span};
use uuid::Uuid;

// ==========================================
// 导入进度
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Imported,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportProgress {
    pub row: usize,   // 1 起始行号
    pub total: usize, // 记录总数
    pub outcome: RecordOutcome,
}

// ==========================================
// ImportOrchestrator
// ==========================================
pub struct ImportOrchestrator {
    registry: StrategyRegistry,
    parser: UniversalFileParser,
}

impl ImportOrchestrator {
    /// 创建编排器（注册表移交后只读）
    pub fn new(registry: StrategyRegistry) -> Self {
        Self {
            registry,
            parser: UniversalFileParser,
        }
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// 校验文件中的全部记录
    ///
    /// # 返回
    /// - 空列表: 可以导入
    /// - 非空: 配置级/文件级的单条错误，或全部行级错误（按记录顺序）
    ///
    /// # 说明
    /// - 不返回 Err：未注册类型与解码失败都转为结构化错误
    #[instrument(skip(self, file), fields(file = %file.name()))]
    pub async fn validate_import(
        &self,
        data_type: &str,
        file: &dyn ImportFile,
    ) -> Vec<ValidationError> {
        // === 步骤 1: 解析策略 ===
        let strategy = match self.registry.resolve(data_type) {
            Ok(strategy) => strategy,
            Err(e) => {
                warn!(error = %e, "未注册的数据类型");
                return vec![ValidationError::config(e.to_string())];
            }
        };

        // === 步骤 2: 解码文件 ===
        let records = match self.parser.decode(file).await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "文件解码失败");
                return vec![decode_failure_error(&e)];
            }
        };

        // === 步骤 3: 空文件 ===
        if records.is_empty() {
            return vec![ValidationError::file(t("orchestrator.no_records"))];
        }

        // === 步骤 4: 表头分隔符启发式检查 ===
        if let Some(first) = records.first() {
            if first.len() == 1 {
                if let Some(header) = first.field_names().next().filter(|h| h.contains(';')) {
                    warn!(header = %header, "表头只解析出一列，疑似分隔符错误");
                    return vec![ValidationError::file(t_with_args(
                        "orchestrator.separator_suspect",
                        &[("header", header)],
                    ))];
                }
            }
        }

        // === 步骤 5: 逐条校验（不短路） ===
        let errors: Vec<ValidationError> = records
            .iter()
            .enumerate()
            .flat_map(|(idx, record)| strategy.validate_record(record, idx))
            .collect();

        info!(
            records = records.len(),
            errors = errors.len(),
            "校验完成"
        );
        errors
    }

    /// 逐条导入文件中的全部记录
    ///
    /// # 返回
    /// - Ok(ImportSummary): 导入汇总（解码失败也以汇总返回）
    /// - Err(ImportError::UnknownDataType): 数据类型未注册
    pub async fn execute_import(
        &self,
        data_type: &str,
        file: &dyn ImportFile,
        ctx: &ImportContext,
    ) -> ImportResult<ImportSummary> {
        self.execute_import_with_progress(data_type, file, ctx, |_| {})
            .await
    }

    /// 逐条导入，并在每条记录处理后回调进度
    #[instrument(skip(self, file, ctx, on_progress), fields(file = %file.name(), run_id = tracing::field::Empty))]
    pub async fn execute_import_with_progress<F>(
        &self,
        data_type: &str,
        file: &dyn ImportFile,
        ctx: &ImportContext,
        mut on_progress: F,
    ) -> ImportResult<ImportSummary>
    where
        F: FnMut(ImportProgress) + Send,
    {
        let start_time = Instant::now();
        let run_id = Uuid::new_v4().to_string();
        Span::current().record("run_id", run_id.as_str());

        // === 步骤 1: 解析策略（失败直接返回 Err） ===
        let strategy = self.registry.resolve(data_type)?;

        // === 步骤 2: 解码文件 ===
        let records = match self.parser.decode(file).await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "文件解码失败，导入终止");
                return Ok(ImportSummary::decode_failure(decode_failure_error(&e)));
            }
        };

        let total = records.len();
        info!(total = total, "开始导入");

        // === 步骤 3: 严格按文件顺序逐条提交 ===
        let mut summary = ImportSummary::new(total);
        for (idx, record) in records.iter().enumerate() {
            let row = idx + 1;
            let outcome = match strategy.import_record(ctx, record).await {
                Ok(()) => {
                    debug!(row = row, "记录导入成功");
                    summary.record_success();
                    RecordOutcome::Imported
                }
                Err(e) => {
                    let message = failure_message(&e);
                    warn!(row = row, error = %message, "记录导入失败");
                    summary.record_failure(ValidationError::at_row(row, FIELD_API, message.clone()));
                    RecordOutcome::Failed(message)
                }
            };
            on_progress(ImportProgress {
                row,
                total,
                outcome,
            });
        }

        info!(
            total = summary.total,
            imported = summary.imported,
            failed = summary.failed,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "导入完成"
        );
        Ok(summary)
    }
}

/// 解码失败 → 文件级错误（附分隔符/格式提示）
fn decode_failure_error(err: &ImportError) -> ValidationError {
    ValidationError::file(t_with_args(
        "orchestrator.decode_failed",
        &[("reason", err.to_string().as_str())],
    ))
}

/// 提交失败消息；缺失时使用通用消息
fn failure_message(err: &ImportError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        t("orchestrator.unknown_failure")
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FIELD_FILE;
    use crate::importer::file_parser::InMemoryFile;
    use crate::testing::{test_context, NoopTransport, RecordingTransport};
    use std::sync::Arc;

    fn orchestrator() -> ImportOrchestrator {
        ImportOrchestrator::new(StrategyRegistry::with_default_strategies(Arc::new(
            NoopTransport,
        )))
    }

    #[tokio::test]
    async fn test_separator_heuristic() {
        // 唯一的字段名含 ';'，说明整行被当作一列
        let file = InMemoryFile::new("f.json", r#"[{"nome;ativo": "Acme;true"}]"#);
        let errors = orchestrator()
            .validate_import("veiculos_fabricantes", &file)
            .await;
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, FIELD_FILE);
        assert!(errors[0].error.contains("nome;ativo"));
        assert_eq!(errors[0].row, None);
    }

    #[tokio::test]
    async fn test_empty_json_array_has_no_records() {
        let file = InMemoryFile::new("f.json", "[]");
        let errors = orchestrator().validate_import("usuarios", &file).await;
        assert_eq!(errors, vec![ValidationError::file(t("orchestrator.no_records"))]);
    }

    #[tokio::test]
    async fn test_decode_failure_reported_once() {
        let file = InMemoryFile::new("f.txt", "qualquer");
        let errors = orchestrator().validate_import("usuarios", &file).await;
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, FIELD_FILE);
        assert!(errors[0].error.contains(".txt"));
    }

    #[tokio::test]
    async fn test_execute_import_decode_failure_summary() {
        let file = InMemoryFile::new("f.csv", "somente_cabecalho\n");
        let summary = orchestrator()
            .execute_import("usuarios", &file, &test_context())
            .await
            .unwrap();

        assert_eq!(summary.total, 0);
        assert_eq!(summary.imported, 0);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.errors[0].field, FIELD_FILE);
    }

    #[tokio::test]
    async fn test_execute_import_unknown_type_propagates() {
        let file = InMemoryFile::new("f.json", "{}");
        let result = orchestrator()
            .execute_import("clientes", &file, &test_context())
            .await;
        assert!(matches!(result, Err(ImportError::UnknownDataType(_))));
    }

    #[tokio::test]
    async fn test_progress_callback_per_record() {
        let transport = Arc::new(RecordingTransport::failing_on(&[2]));
        let orchestrator =
            ImportOrchestrator::new(StrategyRegistry::with_default_strategies(transport.clone()));
        let file = InMemoryFile::new("f.csv", "nome;ativo\nA;true\nB;false\nC;true\n");

        let mut progress = Vec::new();
        let summary = orchestrator
            .execute_import_with_progress("veiculos_fabricantes", &file, &test_context(), |p| {
                progress.push(p)
            })
            .await
            .unwrap();

        assert_eq!(progress.len(), 3);
        assert_eq!(progress[0].outcome, RecordOutcome::Imported);
        assert!(matches!(progress[1].outcome, RecordOutcome::Failed(_)));
        assert_eq!(progress[2].row, 3);
        assert_eq!(progress[2].total, 3);
        assert_eq!(summary.imported, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(transport.call_count(), 3);
    }
}
