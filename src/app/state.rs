// ==========================================
// 批量导入工具 - 应用状态
// ==========================================
// 职责: 装配传输层、策略注册表与编排器，持有配置
// ==========================================

use crate::api::{HttpTransport, Transport};
use crate::app::error::AppError;
use crate::config::{ConfigManager, ImportConfigReader};
use crate::importer::{ImportOrchestrator, StrategyRegistry};
use std::sync::Arc;

/// 应用状态
///
/// 包含配置与导入编排器；注册表在此一次性装配完成
pub struct AppState {
    /// 配置管理器
    pub config: ConfigManager,

    /// 导入编排器
    pub orchestrator: Arc<ImportOrchestrator>,
}

impl AppState {
    /// 创建新的AppState实例（使用 HTTP 传输）
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(AppError): HTTP 客户端初始化失败
    pub fn new(config: ConfigManager) -> Result<Self, AppError> {
        tracing::info!(
            timeout_secs = config.request_timeout().as_secs(),
            "初始化AppState"
        );
        let transport = HttpTransport::new(config.request_timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// 使用指定传输创建（测试注入）
    pub fn with_transport(config: ConfigManager, transport: Arc<dyn Transport>) -> Self {
        let registry = StrategyRegistry::with_default_strategies(transport);
        tracing::debug!(data_types = ?registry.data_types(), "导入策略注册完成");

        Self {
            config,
            orchestrator: Arc::new(ImportOrchestrator::new(registry)),
        }
    }
}
