// ==========================================
// 批量导入工具 - 车辆导入策略
// ==========================================
// 数据类型: veiculos
// 接口: POST /client/tms-base/v2/veiculos
// 规则: 全部字段必填 + 编码字段白名单 + 数值字段可解析
// ==========================================

use crate::api::{build_auth_headers, Transport};
use crate::domain::{ImportContext, Record, ValidationError};
use crate::importer::error::ImportResult;
use crate::importer::strategy::ImportStrategy;
use crate::importer::validators::{check_enum, check_numeric, check_required, FieldSpec};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub const DATA_TYPE: &str = "veiculos";
const ENDPOINT: &str = "/client/tms-base/v2/veiculos";

// 车辆字段（全部必填，按模板列顺序）
const ALL_FIELDS: [FieldSpec; 34] = [
    FieldSpec::new("placa", "Placa"),
    FieldSpec::new("placa_estado_id", "Estado da Placa"),
    FieldSpec::new("renavam", "Renavam"),
    FieldSpec::new("chassi", "Chassi"),
    FieldSpec::new("ano", "Ano"),
    FieldSpec::new("ano_modelo", "Ano Modelo"),
    FieldSpec::new("cor", "Cor"),
    FieldSpec::new("tara", "Tara"),
    FieldSpec::new("lotacao_kg", "Lotação (kg)"),
    FieldSpec::new("lotacao_palete", "Lotação (palete)"),
    FieldSpec::new("capacidade_volume_m3", "Capacidade Volume (m³)"),
    FieldSpec::new("capacidade_litros", "Capacidade (litros)"),
    FieldSpec::new("situacao", "Situação"),
    FieldSpec::new("data_compra", "Data de Compra"),
    FieldSpec::new("tipo", "Tipo"),
    FieldSpec::new("tipo_rodado", "Tipo Rodado"),
    FieldSpec::new("tipo_carroceria", "Tipo Carroceria"),
    FieldSpec::new("tipo_roda", "Tipo Roda"),
    FieldSpec::new("quantidade_eixos", "Quantidade Eixos"),
    FieldSpec::new("cidade", "Cidade"),
    FieldSpec::new("fabricante", "Fabricante"),
    FieldSpec::new("fabricante_modelo", "Fabricante Modelo"),
    FieldSpec::new("tipo_carga", "Tipo Carga"),
    FieldSpec::new("utilizacao", "Utilização"),
    FieldSpec::new("veiculo_tipo", "Veículo Tipo"),
    FieldSpec::new("motorista_id", "Motorista ID"),
    FieldSpec::new("motorista_nome", "Motorista Nome"),
    FieldSpec::new("frota", "Frota"),
    FieldSpec::new("modelo", "Modelo"),
    FieldSpec::new("marca", "Marca"),
    FieldSpec::new("propriedade", "Propriedade"),
    FieldSpec::new("fornecedor", "Fornecedor"),
    FieldSpec::new("proprietario", "Proprietário"),
    FieldSpec::new("grupo", "Grupo"),
];

// 编码字段白名单
const VALID_TIPO: [&str; 4] = ["TRA", "REB", "BIT", "SRB"];
const VALID_TIPO_RODADO: [&str; 3] = ["TOC", "TAN", "TRI"];
const VALID_TIPO_CARROCERIA: [&str; 5] = ["NAP", "ABE", "FEC", "GRA", "TAN"];
const VALID_TIPO_RODA: [&str; 2] = ["SIM", "DUP"];
const VALID_PROPRIEDADE: [&str; 2] = ["P", "T"];

const NUMERIC_FIELDS: [&str; 9] = [
    "quantidade_eixos",
    "ano",
    "ano_modelo",
    "tara",
    "lotacao_kg",
    "lotacao_palete",
    "capacidade_volume_m3",
    "capacidade_litros",
    "grupo",
];

pub struct VehicleStrategy {
    transport: Arc<dyn Transport>,
}

impl VehicleStrategy {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ImportStrategy for VehicleStrategy {
    fn data_type(&self) -> &'static str {
        DATA_TYPE
    }

    fn label(&self) -> &'static str {
        "Veículos"
    }

    fn template_headers(&self) -> Vec<&'static str> {
        ALL_FIELDS.iter().map(|f| f.field).collect()
    }

    fn validate_record(&self, record: &Record, index: usize) -> Vec<ValidationError> {
        let row = index + 1;
        let mut errors = Vec::new();

        check_required(record, &ALL_FIELDS, row, &mut errors);

        check_enum(record, FieldSpec::new("tipo", "Tipo"), &VALID_TIPO, row, &mut errors);
        check_enum(
            record,
            FieldSpec::new("tipo_rodado", "Tipo Rodado"),
            &VALID_TIPO_RODADO,
            row,
            &mut errors,
        );
        check_enum(
            record,
            FieldSpec::new("tipo_carroceria", "Tipo Carroceria"),
            &VALID_TIPO_CARROCERIA,
            row,
            &mut errors,
        );
        check_enum(
            record,
            FieldSpec::new("tipo_roda", "Tipo Roda"),
            &VALID_TIPO_RODA,
            row,
            &mut errors,
        );
        check_enum(
            record,
            FieldSpec::new("propriedade", "Propriedade"),
            &VALID_PROPRIEDADE,
            row,
            &mut errors,
        );

        for field in NUMERIC_FIELDS {
            check_numeric(record, field, row, &mut errors);
        }

        errors
    }

    async fn import_record(&self, ctx: &ImportContext, record: &Record) -> ImportResult<()> {
        let headers = build_auth_headers(&ctx.auth_token, &ctx.organization_id, &ctx.company_id);
        // 车辆记录原样作为 data 提交
        let payload = json!({
            "doc": "false",
            "data": record,
        });
        debug!(data_type = DATA_TYPE, placa = ?record.text("placa"), "提交车辆记录");

        self.transport
            .post_json(&ctx.endpoint(ENDPOINT), &headers, &payload)
            .await?;
        Ok(())
    }
}
