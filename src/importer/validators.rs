// ==========================================
// 批量导入工具 - 字段格式校验工具
// ==========================================
// 职责: CPF 校验位、邮箱格式、数值/枚举判定、必填判定
// 红线: 纯函数，不做 I/O
// ==========================================

use crate::domain::{Record, ValidationError};
use crate::i18n::t_with_args;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("邮箱正则非法"));

/// 字段定义（记录字段名 + 显示名）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: &'static str,
    pub label: &'static str,
}

impl FieldSpec {
    pub const fn new(field: &'static str, label: &'static str) -> Self {
        Self { field, label }
    }
}

/// 校验巴西 CPF：11 位数字、非全同数字、两位校验位正确
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    let check_digit = |len: usize| -> u32 {
        let sum: u32 = digits[..len]
            .iter()
            .enumerate()
            .map(|(i, d)| d * (len as u32 + 1 - i as u32))
            .sum();
        let remainder = (sum * 10) % 11;
        if remainder == 10 {
            0
        } else {
            remainder
        }
    };

    check_digit(9) == digits[9] && check_digit(10) == digits[10]
}

/// 只保留数字
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

/// 可解析为有限数值（不接受逗号小数）
pub fn is_numeric(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|n| n.is_finite())
        .unwrap_or(false)
}

/// 当前十年的最后一天（如 2020 年代 → 2029-12-31）
pub fn end_of_decade(today: NaiveDate) -> String {
    let decade_end = today.year() / 10 * 10 + 9;
    format!("{}-12-31", decade_end)
}

// ==========================================
// 规则辅助函数（每条失败规则追加一个错误）
// ==========================================

/// 必填规则：缺失/NULL/空白 → 每个字段一条错误
pub fn check_required(
    record: &Record,
    fields: &[FieldSpec],
    row: usize,
    errors: &mut Vec<ValidationError>,
) {
    for spec in fields {
        if record.is_blank(spec.field) {
            errors.push(ValidationError::at_row(
                row,
                spec.label,
                t_with_args("validation.required", &[("label", spec.label)]),
            ));
        }
    }
}

/// 枚举规则：非空值必须在白名单内（区分大小写）
pub fn check_enum(
    record: &Record,
    spec: FieldSpec,
    allowed: &[&str],
    row: usize,
    errors: &mut Vec<ValidationError>,
) {
    if record.is_blank(spec.field) {
        return;
    }
    let value = record.text(spec.field).unwrap_or_default();
    if !allowed.contains(&value.as_str()) {
        errors.push(ValidationError::at_row(
            row,
            spec.label,
            t_with_args(
                "validation.invalid_enum",
                &[("value", value.as_str()), ("allowed", allowed.join(", ").as_str())],
            ),
        ));
    }
}

/// 布尔规则：非空值必须是 true/false（不区分大小写）
pub fn check_boolean(
    record: &Record,
    spec: FieldSpec,
    row: usize,
    errors: &mut Vec<ValidationError>,
) {
    if record.is_blank(spec.field) {
        return;
    }
    let value = record.text(spec.field).unwrap_or_default();
    if parse_bool(&value).is_none() {
        errors.push(ValidationError::at_row(
            row,
            spec.label,
            t_with_args(
                "validation.invalid_boolean",
                &[("value", value.as_str()), ("label", spec.label)],
            ),
        ));
    }
}

/// 数值规则：非空值必须可解析为数值；错误以字段名标识
pub fn check_numeric(
    record: &Record,
    field: &str,
    row: usize,
    errors: &mut Vec<ValidationError>,
) {
    if record.is_blank(field) {
        return;
    }
    let value = record.text(field).unwrap_or_default();
    if !is_numeric(&value) {
        errors.push(ValidationError::at_row(
            row,
            field,
            t_with_args("validation.not_numeric", &[("value", value.as_str())]),
        ));
    }
}

/// "true"/"false"（不区分大小写）→ bool
pub fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
