// ==========================================
// 批量导入工具 - 会话
// ==========================================
// 职责: 持有当前环境与鉴权信息，按需组装 ImportContext
// 红线: 凭据只存在内存中，不落盘、不写日志
// ==========================================

use crate::app::error::AppError;
use crate::config::{Environment, ImportConfigReader};
use crate::domain::ImportContext;
use crate::i18n::t;

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub environment: Option<Environment>,
    pub base_url: Option<String>,
    pub auth_token: Option<String>,
    pub organization_id: Option<String>,
    pub company_id: Option<String>,
}

impl Session {
    /// 以配置中的环境/地址初始化会话
    pub fn from_config(config: &dyn ImportConfigReader) -> Self {
        Self {
            environment: config.environment(),
            base_url: config.base_url(),
            ..Self::default()
        }
    }

    pub fn with_credentials(
        mut self,
        auth_token: Option<String>,
        organization_id: Option<String>,
        company_id: Option<String>,
    ) -> Self {
        self.auth_token = auth_token;
        self.organization_id = organization_id;
        self.company_id = company_id;
        self
    }

    /// 组装导入上下文
    ///
    /// # 检查顺序
    /// 环境 → 令牌 → 组织 → 公司；空白值视为未设置
    pub fn import_context(&self) -> Result<ImportContext, AppError> {
        let base_url = present(&self.base_url)
            .or_else(|| self.environment.map(|env| env.base_url().to_string()))
            .ok_or_else(|| AppError::Session(t("session.no_environment")))?;
        let auth_token =
            present(&self.auth_token).ok_or_else(|| AppError::Session(t("session.no_token")))?;
        let organization_id = present(&self.organization_id)
            .ok_or_else(|| AppError::Session(t("session.no_organization")))?;
        let company_id =
            present(&self.company_id).ok_or_else(|| AppError::Session(t("session.no_company")))?;

        Ok(ImportContext {
            base_url,
            auth_token,
            organization_id,
            company_id,
        })
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
