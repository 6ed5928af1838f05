// ==========================================
// 文件解码器集成测试
// ==========================================
// 测试范围:
// 1. CSV 行数、类型转换、日期规范化
// 2. 磁盘文件读取与编码回退
// 3. 格式错误
// ==========================================


use mass_import::domain::FieldValue;
use mass_import::importer::file_parser::normalize_date;
use mass_import::importer::{DiskFile, ImportError, InMemoryFile, UniversalFileParser};
use test_helpers::write_temp_file;

#[tokio::test]
async fn test_csv_记录数等于非空行数减一() {
    let cases = [
        "a;b\n1;2\n",
        "a;b\n\n1;2\n   \n3;4\n",
        "a,b\r\n1,2\r\n3,4\r\n5,6",
        "\n\na\nx\n\ny\n\n",
    ];

    for content in cases {
        let non_empty = content.lines().filter(|l| !l.trim().is_empty()).count();
        let records = UniversalFileParser
            .decode(&InMemoryFile::new("f.csv", content))
            .await
            .unwrap();
        assert_eq!(records.len(), non_empty - 1, "{:?}", content);
    }
}

#[tokio::test]
async fn test_csv_孤立引号不吞并后续行() {
    let file = InMemoryFile::new("f.csv", "nome;ativo\n\"Acme;true\nBeta;false\nGama;true\n");
    let records = UniversalFileParser.decode(&file).await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].text("nome").as_deref(), Some("\"Acme"));
    assert_eq!(records[0].get("ativo"), Some(&FieldValue::Bool(true)));
    assert_eq!(records[1].text("nome").as_deref(), Some("Beta"));
    assert_eq!(records[2].text("nome").as_deref(), Some("Gama"));
}

#[tokio::test]
async fn test_csv_布尔字面量不区分大小写() {
    let file = InMemoryFile::new("f.csv", "a;b;c;d\ntrue;FALSE;True;truthy\n");
    let records = UniversalFileParser.decode(&file).await.unwrap();

    assert_eq!(records[0].get("a"), Some(&FieldValue::Bool(true)));
    assert_eq!(records[0].get("b"), Some(&FieldValue::Bool(false)));
    assert_eq!(records[0].get("c"), Some(&FieldValue::Bool(true)));
    assert_eq!(records[0].get("d"), Some(&FieldValue::Text("truthy".into())));
}

#[tokio::test]
async fn test_csv_日期规范化且保留前导零() {
    let file = InMemoryFile::new(
        "f.csv",
        "data;codigo;iso\n1/2/99;007;2024-01-05\n",
    );
    let records = UniversalFileParser.decode(&file).await.unwrap();

    assert_eq!(records[0].text("data").as_deref(), Some("1999-02-01"));
    assert_eq!(records[0].text("codigo").as_deref(), Some("007"));
    assert_eq!(records[0].text("iso").as_deref(), Some("2024-01-05"));
}

#[test]
fn test_日期规范化幂等() {
    for input in ["1/2/24", "31/12/1999", "05/06/50", "9/9/2049"] {
        let once = normalize_date(input).unwrap();
        assert_eq!(normalize_date(&once), None);
    }
}

#[tokio::test]
async fn test_磁盘文件_utf8_bom() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice("nome;ativo\nAção;true\n".as_bytes());
    let temp = write_temp_file(".csv", &bytes);

    let records = UniversalFileParser
        .decode(&DiskFile::new(temp.path()))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text("nome").as_deref(), Some("Ação"));
}

#[tokio::test]
async fn test_磁盘文件_windows1252_回退() {
    // "Produção" 以 Windows-1252 编码
    let bytes = b"nome;ativo\nProdu\xe7\xe3o;false\n";
    let temp = write_temp_file(".CSV", bytes);

    let records = UniversalFileParser
        .decode(&DiskFile::new(temp.path()))
        .await
        .unwrap();

    assert_eq!(records[0].text("nome").as_deref(), Some("Produção"));
    assert_eq!(records[0].get("ativo"), Some(&FieldValue::Bool(false)));
}

#[tokio::test]
async fn test_json_数值与嵌套值() {
    let temp = write_temp_file(
        ".json",
        br#"[{"nome": "A", "grupo": 3, "extra": {"k": 1}, "vazio": null}]"#,
    );
    let records = UniversalFileParser
        .decode(&DiskFile::new(temp.path()))
        .await
        .unwrap();

    assert_eq!(records[0].get("grupo"), Some(&FieldValue::Number(serde_json::Number::from(3u64))));
    assert_eq!(records[0].text("extra").as_deref(), Some(r#"{"k":1}"#));
    assert!(records[0].is_blank("vazio"));
}

#[tokio::test]
async fn test_json_字段保持文件顺序() {
    let file = InMemoryFile::new("f.json", r#"{"placa": "ABC", "ano": "2020", "cor": "azul"}"#);
    let records = UniversalFileParser.decode(&file).await.unwrap();

    let names: Vec<&str> = records[0].field_names().collect();
    assert_eq!(names, vec!["placa", "ano", "cor"]);
}

#[tokio::test]
async fn test_格式错误() {
    let err = UniversalFileParser
        .decode(&InMemoryFile::new("f.xlsx", "qualquer"))
        .await
        .unwrap_err();
    assert!(matches!(err, ImportError::UnsupportedFormat(ref ext) if ext == "xlsx"));

    let err = UniversalFileParser
        .decode(&InMemoryFile::new("f.json", "[1, 2]"))
        .await
        .unwrap_err();
    assert!(matches!(err, ImportError::InvalidFormat(_)));

    let err = UniversalFileParser
        .decode(&InMemoryFile::new("f.json", "{nome"))
        .await
        .unwrap_err();
    assert!(matches!(err, ImportError::JsonParse(_)));

    let err = UniversalFileParser
        .decode(&DiskFile::new("/nao/existe/dados.csv"))
        .await
        .unwrap_err();
    assert!(matches!(err, ImportError::FileReadError(_)));
    assert!(err.is_decode_error());
}
