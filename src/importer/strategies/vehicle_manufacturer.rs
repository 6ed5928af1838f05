// ==========================================
// 批量导入工具 - 车辆制造商导入策略
// ==========================================
// 数据类型: veiculos_fabricantes
// 接口: POST /client/tms-base/v2/veiculos/fabricantes
// ==========================================

use crate::api::{build_auth_headers, Transport};
use crate::domain::{ImportContext, Record, ValidationError};
use crate::importer::error::ImportResult;
use crate::importer::strategy::ImportStrategy;
use crate::importer::validators::{check_boolean, check_required, parse_bool, FieldSpec};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub const DATA_TYPE: &str = "veiculos_fabricantes";
const ENDPOINT: &str = "/client/tms-base/v2/veiculos/fabricantes";

const NOME: FieldSpec = FieldSpec::new("nome", "Nome");
const ATIVO: FieldSpec = FieldSpec::new("ativo", "Ativo");
const REQUIRED_FIELDS: [FieldSpec; 2] = [NOME, ATIVO];

pub struct VehicleManufacturerStrategy {
    transport: Arc<dyn Transport>,
}

impl VehicleManufacturerStrategy {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    fn build_payload(record: &Record) -> serde_json::Value {
        json!({
            "doc": "false",
            "data": {
                "nome": record.text(NOME.field).unwrap_or_default(),
                "ativo": record
                    .text(ATIVO.field)
                    .and_then(|v| parse_bool(&v))
                    .unwrap_or(false),
            }
        })
    }
}

#[async_trait]
impl ImportStrategy for VehicleManufacturerStrategy {
    fn data_type(&self) -> &'static str {
        DATA_TYPE
    }

    fn label(&self) -> &'static str {
        "Fabricantes de Veículos"
    }

    fn template_headers(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS.iter().map(|f| f.field).collect()
    }

    fn validate_record(&self, record: &Record, index: usize) -> Vec<ValidationError> {
        let row = index + 1;
        let mut errors = Vec::new();

        check_required(record, &REQUIRED_FIELDS, row, &mut errors);
        check_boolean(record, ATIVO, row, &mut errors);

        errors
    }

    async fn import_record(&self, ctx: &ImportContext, record: &Record) -> ImportResult<()> {
        let headers = build_auth_headers(&ctx.auth_token, &ctx.organization_id, &ctx.company_id);
        let payload = Self::build_payload(record);
        debug!(data_type = DATA_TYPE, "提交制造商记录");

        self.transport
            .post_json(&ctx.endpoint(ENDPOINT), &headers, &payload)
            .await?;
        Ok(())
    }
}
