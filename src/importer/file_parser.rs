// ==========================================
// 批量导入工具 - 文件解码器实现
// ==========================================
// 职责: 上传文件 → 有序记录序列（只做结构解析与类型转换）
// 支持: JSON (.json) / CSV (.csv)
// 红线: 不做业务校验
// ==========================================

use crate::domain::{FieldValue, Record};
use crate::importer::error::{ImportError, ImportResult};
use async_trait::async_trait;
use csv::{ReaderBuilder, Trim};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

// D/M/YY 或 DD/MM/YYYY
static DMY_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2}|\d{4})$").expect("日期正则非法"));

// ==========================================
// ImportFile Trait - 上传文件抽象
// ==========================================
// 用途: 提供文件名（决定格式）与完整文本内容
// 实现者: DiskFile, InMemoryFile
#[async_trait]
pub trait ImportFile: Send + Sync {
    /// 文件名（含扩展名）
    fn name(&self) -> &str;

    /// 读取完整文本内容
    async fn read_text(&self) -> ImportResult<String>;
}

/// 磁盘文件
#[derive(Debug, Clone)]
pub struct DiskFile {
    path: PathBuf,
    name: String,
}

impl DiskFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { path, name }
    }
}

#[async_trait]
impl ImportFile for DiskFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_text(&self) -> ImportResult<String> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(decode_bytes(&bytes))
    }
}

/// 内存文件（测试与嵌入调用）
#[derive(Debug, Clone)]
pub struct InMemoryFile {
    name: String,
    content: String,
}

impl InMemoryFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[async_trait]
impl ImportFile for InMemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_text(&self) -> ImportResult<String> {
        Ok(self.content.clone())
    }
}

/// 字节 → 文本：UTF-8（去 BOM），失败则按 Windows-1252 解码
pub fn decode_bytes(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            warn!("文件不是有效的 UTF-8，按 Windows-1252 解码");
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 单一格式的文本解析
// 实现者: CsvParser, JsonParser
pub trait FileParser: Send + Sync {
    fn parse_to_records(&self, text: &str) -> ImportResult<Vec<Record>>;
}

// ==========================================
// JSON Parser 实现
// ==========================================
pub struct JsonParser;

impl FileParser for JsonParser {
    fn parse_to_records(&self, text: &str) -> ImportResult<Vec<Record>> {
        let parsed: Value = serde_json::from_str(text)?;

        match parsed {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| match item {
                    Value::Object(map) => Ok(object_to_record(map)),
                    _ => Err(ImportError::json_element(idx)),
                })
                .collect(),
            // 单个对象 → 单元素序列
            Value::Object(map) => Ok(vec![object_to_record(map)]),
            _ => Err(ImportError::json_shape()),
        }
    }
}

fn object_to_record(map: serde_json::Map<String, Value>) -> Record {
    map.into_iter()
        .map(|(k, v)| (k, FieldValue::from_json(v)))
        .collect()
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 表头分隔符探测：';' 严格多于 ',' 时取 ';'，否则 ','
    pub fn detect_separator(header_line: &str) -> u8 {
        let semicolons = header_line.matches(';').count();
        let commas = header_line.matches(',').count();
        if semicolons > commas {
            b';'
        } else {
            b','
        }
    }
}

impl FileParser for CsvParser {
    fn parse_to_records(&self, text: &str) -> ImportResult<Vec<Record>> {
        // 去空白、去空行
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        if lines.len() < 2 {
            return Err(ImportError::csv_too_short());
        }

        let separator = Self::detect_separator(lines[0]);
        debug!(separator = %(separator as char), lines = lines.len(), "CSV 分隔符探测完成");

        let normalized = lines.join("\n");
        let mut reader = ReaderBuilder::new()
            .delimiter(separator)
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .quoting(false) // 每行只按分隔符切分，引号原样保留
            .trim(Trim::All)
            .from_reader(normalized.as_bytes());

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut records = Vec::with_capacity(lines.len() - 1);
        for result in reader.records() {
            let row = result?;
            let record: Record = headers
                .iter()
                .enumerate()
                .map(|(col_idx, header)| {
                    // 缺失的尾列 → 空字符串
                    let raw = row.get(col_idx).unwrap_or("");
                    (header.clone(), coerce_cell(raw))
                })
                .collect();
            records.push(record);
        }

        Ok(records)
    }
}

/// 单元格类型转换：布尔 → 日期 → 原样文本（保留前导零）
pub fn coerce_cell(raw: &str) -> FieldValue {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("true") {
        return FieldValue::Bool(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return FieldValue::Bool(false);
    }
    if let Some(date) = normalize_date(value) {
        return FieldValue::Text(date);
    }
    FieldValue::Text(value.to_string())
}

/// D/M/YY 或 DD/MM/YYYY → YYYY-MM-DD；不匹配返回 None
///
/// 两位年份: 00–49 → 2000–2049，50–99 → 1950–1999
pub fn normalize_date(value: &str) -> Option<String> {
    let caps = DMY_DATE.captures(value)?;
    let day = &caps[1];
    let month = &caps[2];
    let year = &caps[3];

    let year = if year.len() == 2 {
        let num: u32 = year.parse().ok()?;
        if num <= 49 {
            2000 + num
        } else {
            1900 + num
        }
    } else {
        year.parse().ok()?
    };

    Some(format!("{:04}-{:0>2}-{:0>2}", year, month, day))
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    /// 按扩展名选择解析器
    pub fn parser_for(file_name: &str) -> ImportResult<Box<dyn FileParser>> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(Box::new(JsonParser)),
            "csv" => Ok(Box::new(CsvParser)),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }

    /// 解码整个文件
    pub async fn decode(&self, file: &dyn ImportFile) -> ImportResult<Vec<Record>> {
        let parser = Self::parser_for(file.name())?;
        let text = file.read_text().await?;
        let records = parser.parse_to_records(&text)?;
        debug!(file = %file.name(), records = records.len(), "文件解码完成");
        Ok(records)
    }
}
