// ==========================================
// 批量导入工具 - 导入策略注册表
// ==========================================
// 职责: 数据类型标识 → 导入策略
// 约定: 应用装配阶段注册一次，随后移交编排器只读使用；
//       注册表本身不加锁，注册必须先于任何查询完成
// ==========================================

use crate::api::Transport;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::strategies::{
    UserStrategy, VehicleManufacturerStrategy, VehicleModelStrategy, VehicleStrategy,
};
use crate::importer::strategy::ImportStrategy;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Default)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn ImportStrategy>>,
}

impl StrategyRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册全部内置实体策略（共用同一传输）
    pub fn with_default_strategies(transport: Arc<dyn Transport>) -> Self {
        let mut registry = Self::new();
        registry.register_strategy(Arc::new(VehicleStrategy::new(transport.clone())));
        registry.register_strategy(Arc::new(VehicleManufacturerStrategy::new(
            transport.clone(),
        )));
        registry.register_strategy(Arc::new(VehicleModelStrategy::new(transport.clone())));
        registry.register_strategy(Arc::new(UserStrategy::new(transport)));
        registry
    }

    /// 绑定标识与策略；重复注册时后者覆盖前者
    pub fn register(&mut self, data_type: impl Into<String>, strategy: Arc<dyn ImportStrategy>) {
        let data_type = data_type.into();
        if self.strategies.contains_key(&data_type) {
            warn!(data_type = %data_type, "导入策略重复注册，覆盖原绑定");
        } else {
            debug!(data_type = %data_type, "注册导入策略");
        }
        self.strategies.insert(data_type, strategy);
    }

    /// 以策略自身的 data_type 注册
    pub fn register_strategy(&mut self, strategy: Arc<dyn ImportStrategy>) {
        self.register(strategy.data_type(), strategy);
    }

    /// 查找策略
    ///
    /// # 返回
    /// - Err(ImportError::UnknownDataType): 未注册
    pub fn resolve(&self, data_type: &str) -> ImportResult<Arc<dyn ImportStrategy>> {
        self.strategies
            .get(data_type)
            .cloned()
            .ok_or_else(|| ImportError::UnknownDataType(data_type.to_string()))
    }

    /// 已注册的数据类型（排序）
    pub fn data_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.strategies.keys().cloned().collect();
        types.sort();
        types
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
