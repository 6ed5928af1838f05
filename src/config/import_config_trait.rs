// ==========================================
// 批量导入工具 - 导入配置读取 Trait
// ==========================================
// 职责: 定义会话与应用层所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::app_config::Environment;
use std::time::Duration;

// ==========================================
// ImportConfigReader Trait
// ==========================================
// 实现者: ConfigManager
pub trait ImportConfigReader: Send + Sync {
    /// 当前平台环境
    ///
    /// # 返回
    /// - None: 尚未选择环境
    fn environment(&self) -> Option<Environment>;

    /// 生效的接口地址（显式地址优先于环境地址）
    fn base_url(&self) -> Option<String>;

    /// 单次请求超时
    ///
    /// # 默认值
    /// - 30 秒
    fn request_timeout(&self) -> Duration;

    /// 界面语言
    ///
    /// # 默认值
    /// - pt-BR
    fn locale(&self) -> String;
}
