// ==========================================
// 批量导入工具 - 车辆型号导入策略
// ==========================================
// 数据类型: veiculos_modelos
// 接口: POST /client/tms-base/v2/veiculos/modelos
// 前置: 制造商已存在（fabricante_id 为平台侧制造商 ID）
// ==========================================

use crate::api::{build_auth_headers, Transport};
use crate::domain::{ImportContext, Record, ValidationError};
use crate::importer::error::ImportResult;
use crate::importer::strategy::ImportStrategy;
use crate::importer::validators::{
    check_boolean, check_numeric, check_required, parse_bool, FieldSpec,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

pub const DATA_TYPE: &str = "veiculos_modelos";
const ENDPOINT: &str = "/client/tms-base/v2/veiculos/modelos";

const NOME: FieldSpec = FieldSpec::new("nome", "Nome");
const FABRICANTE_ID: FieldSpec = FieldSpec::new("fabricante_id", "Fabricante ID");
const ATIVO: FieldSpec = FieldSpec::new("ativo", "Ativo");
const REQUIRED_FIELDS: [FieldSpec; 3] = [NOME, FABRICANTE_ID, ATIVO];

pub struct VehicleModelStrategy {
    transport: Arc<dyn Transport>,
}

impl VehicleModelStrategy {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    fn build_payload(record: &Record) -> Value {
        // ID 按文本提交，保留前导零
        let fabricante_id = record
            .text(FABRICANTE_ID.field)
            .map(|v| v.trim().to_string())
            .unwrap_or_default();

        json!({
            "doc": "false",
            "data": {
                "nome": record.text(NOME.field).unwrap_or_default(),
                "fabricante": { "id": fabricante_id },
                "ativo": record
                    .text(ATIVO.field)
                    .and_then(|v| parse_bool(&v))
                    .unwrap_or(false),
            }
        })
    }
}

#[async_trait]
impl ImportStrategy for VehicleModelStrategy {
    fn data_type(&self) -> &'static str {
        DATA_TYPE
    }

    fn label(&self) -> &'static str {
        "Modelos de Veículos"
    }

    fn template_headers(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS.iter().map(|f| f.field).collect()
    }

    fn validate_record(&self, record: &Record, index: usize) -> Vec<ValidationError> {
        let row = index + 1;
        let mut errors = Vec::new();

        check_required(record, &REQUIRED_FIELDS, row, &mut errors);
        check_numeric(record, FABRICANTE_ID.field, row, &mut errors);
        check_boolean(record, ATIVO, row, &mut errors);

        errors
    }

    async fn import_record(&self, ctx: &ImportContext, record: &Record) -> ImportResult<()> {
        let headers = build_auth_headers(&ctx.auth_token, &ctx.organization_id, &ctx.company_id);
        let payload = Self::build_payload(record);
        debug!(data_type = DATA_TYPE, "提交车辆型号记录");

        self.transport
            .post_json(&ctx.endpoint(ENDPOINT), &headers, &payload)
            .await?;
        Ok(())
    }
}
