// ==========================================
// 批量导入工具 - 用户导入策略
// ==========================================
// 数据类型: usuarios
// 接口: POST /client-admin/base/v2/usuarios
// 规则: 必填 + 邮箱格式 + CPF 校验位
// ==========================================

use crate::api::{build_auth_headers, Transport};
use crate::domain::{ImportContext, Record, ValidationError};
use crate::i18n::t_with_args;
use crate::importer::error::ImportResult;
use crate::importer::strategy::ImportStrategy;
use crate::importer::validators::{
    check_required, digits_only, end_of_decade, is_valid_cpf, is_valid_email, FieldSpec,
};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

pub const DATA_TYPE: &str = "usuarios";
const ENDPOINT: &str = "/client-admin/base/v2/usuarios";

const NOME: FieldSpec = FieldSpec::new("nome", "Nome");
const EMAIL: FieldSpec = FieldSpec::new("email", "E-mail");
const CPF: FieldSpec = FieldSpec::new("cpf", "CPF");
const REQUIRED_FIELDS: [FieldSpec; 3] = [NOME, EMAIL, CPF];
const TELEFONE: &str = "telefone";

pub struct UserStrategy {
    transport: Arc<dyn Transport>,
}

impl UserStrategy {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// 构建请求体；访问有效期为当前十年末
    fn build_payload(record: &Record, today: NaiveDate) -> Value {
        json!({
            "doc": "",
            "data": {
                "nome": record.text(NOME.field).unwrap_or_default(),
                "email": record.text(EMAIL.field).unwrap_or_default(),
                "cpf": digits_only(&record.text(CPF.field).unwrap_or_default()),
                "telefone": record.text(TELEFONE).unwrap_or_default(),
                "organizacao_ativa": {
                    "observacao": "",
                    "acesso_expira_em": end_of_decade(today),
                    "ativo": true,
                    "integracao": { "identificacao_api": "" },
                    "pessoa": { "identificacao_api": "" },
                },
            }
        })
    }
}

#[async_trait]
impl ImportStrategy for UserStrategy {
    fn data_type(&self) -> &'static str {
        DATA_TYPE
    }

    fn label(&self) -> &'static str {
        "Usuários"
    }

    fn template_headers(&self) -> Vec<&'static str> {
        vec![NOME.field, EMAIL.field, CPF.field, TELEFONE]
    }

    fn validate_record(&self, record: &Record, index: usize) -> Vec<ValidationError> {
        let row = index + 1;
        let mut errors = Vec::new();

        check_required(record, &REQUIRED_FIELDS, row, &mut errors);

        if let Some(email) = record.text(EMAIL.field).filter(|v| !v.is_empty()) {
            if !is_valid_email(&email) {
                errors.push(ValidationError::at_row(
                    row,
                    EMAIL.label,
                    t_with_args("validation.invalid_email", &[("value", email.as_str())]),
                ));
            }
        }

        if let Some(cpf) = record.text(CPF.field).filter(|v| !v.is_empty()) {
            if !is_valid_cpf(&cpf) {
                errors.push(ValidationError::at_row(
                    row,
                    CPF.label,
                    t_with_args("validation.invalid_cpf", &[("value", cpf.as_str())]),
                ));
            }
        }

        errors
    }

    async fn import_record(&self, ctx: &ImportContext, record: &Record) -> ImportResult<()> {
        let headers = build_auth_headers(&ctx.auth_token, &ctx.organization_id, &ctx.company_id);
        let payload = Self::build_payload(record, Local::now().date_naive());
        debug!(data_type = DATA_TYPE, "提交用户记录");

        self.transport
            .post_json(&ctx.endpoint(ENDPOINT), &headers, &payload)
            .await?;
        Ok(())
    }
}
