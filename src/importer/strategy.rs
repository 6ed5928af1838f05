// ==========================================
// 批量导入工具 - 导入策略 Trait
// ==========================================
// 职责: 定义单一实体类型的校验与提交接口（不包含实现）
// 扩展点: 新实体类型 = 新实现 + 在 StrategyRegistry 注册
// ==========================================

use crate::domain::{ImportContext, Record, ValidationError};
use crate::importer::error::ImportResult;
use async_trait::async_trait;

// ==========================================
// ImportStrategy Trait
// ==========================================
// 实现者: VehicleStrategy, VehicleManufacturerStrategy,
//         VehicleModelStrategy, UserStrategy
#[async_trait]
pub trait ImportStrategy: Send + Sync {
    /// 数据类型标识（注册表键）
    fn data_type(&self) -> &'static str;

    /// 显示名称
    fn label(&self) -> &'static str;

    /// CSV 模板表头（字段名，按模板列顺序）
    fn template_headers(&self) -> Vec<&'static str>;

    /// 校验单条记录
    ///
    /// # 参数
    /// - record: 待校验记录
    /// - index: 0 起始序号（错误行号 = index + 1）
    ///
    /// # 返回
    /// - 空列表: 记录有效
    /// - 非空: 全部问题（不短路）
    fn validate_record(&self, record: &Record, index: usize) -> Vec<ValidationError>;

    /// 提交单条记录（恰好一次远程写入，不重试）
    ///
    /// # 参数
    /// - ctx: 导入上下文（鉴权 + 组织/公司）
    /// - record: 已通过校验的记录
    ///
    /// # 返回
    /// - Ok(()): 提交成功
    /// - Err(ImportError::Submission): 远程调用失败
    async fn import_record(&self, ctx: &ImportContext, record: &Record) -> ImportResult<()>;
}
