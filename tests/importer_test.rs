// ==========================================
// 配件目录导入集成测试
// ==========================================
// 测试范围:
// 1. 文件级错误(不存在/扩展名)
// 2. 行级质量报告与阻断规则
// 3. 导入结果直接可构建目录索引
// ==========================================

use field_service_console::engine::catalog::CatalogIndex;
use field_service_console::importer::{ImportError, PartsCatalogImporter, RowIssueLevel};
use std::io::Write;
use tempfile::NamedTempFile;

/// 写入临时 CSV 文件(保持 .csv 扩展名)
fn write_csv(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = dir.path().join("catalog.csv");
    std::fs::write(&path, content).expect("写入临时文件失败");
    (dir, path)
}

/// 测试: 文件不存在
#[test]
fn test_missing_file_is_error() {
    let importer = PartsCatalogImporter::new();
    let err = importer.import_file("/nonexistent/catalog.csv").unwrap_err();
    assert!(matches!(err, ImportError::FileNotFound(_)));
}

/// 测试: 扩展名不支持
#[test]
fn test_unsupported_extension() {
    let mut file = NamedTempFile::with_suffix(".xlsx").expect("创建临时文件失败");
    writeln!(file, "not a csv").unwrap();

    let importer = PartsCatalogImporter::new();
    let err = importer.import_file(file.path()).unwrap_err();
    assert!(matches!(err, ImportError::UnsupportedFormat(ext) if ext == "xlsx"));
}

/// 测试: 完整导入流程(文件 -> 结果 -> 目录索引)
#[test]
fn test_import_file_end_to_end() {
    let csv = "\
part_id,name,equipment_type,unit_price_cents,installation_price_cents,shipping_fee_cents
P-HV-001,Compressor Capacitor,HVAC,4500,3000,800
P-HV-002,Blower Motor,HVAC,12800,8000,1500
P-RF-001,Defrost Heater,Refrigeration,5400,3500,900
";
    let (_dir, path) = write_csv(csv);

    let importer = PartsCatalogImporter::new();
    let result = importer.import_file(&path).unwrap();

    assert_eq!(result.summary.total_rows, 3);
    assert_eq!(result.summary.imported, 3);
    assert_eq!(result.summary.blocked, 0);

    let index = CatalogIndex::build(result.parts);
    assert_eq!(index.by_type("HVAC").len(), 2);
    assert_eq!(index.by_type("Refrigeration").len(), 1);
    assert_eq!(index.equipment_types(), &["HVAC".to_string(), "Refrigeration".to_string()]);
}

/// 测试: 混合好坏行,坏行阻断并带行号,好行放行
#[test]
fn test_mixed_rows_partial_import() {
    let csv = "\
part_id,name,equipment_type,unit_price_cents,installation_price_cents,shipping_fee_cents
P-1,Good Part,HVAC,100,50,10
,Missing Id,HVAC,100,50,10
P-3,Negative Price,HVAC,-1,50,10
P-4,Bad Amount,HVAC,abc,50,10
P-1,Duplicate Id,HVAC,100,50,10
P-6,,HVAC,100,50,10
";
    let (_dir, path) = write_csv(csv);

    let importer = PartsCatalogImporter::new();
    let result = importer.import_file(&path).unwrap();

    assert_eq!(result.summary.total_rows, 6);
    // P-1 与 P-6(名称回退)入目录
    assert_eq!(result.summary.imported, 2);
    assert_eq!(result.summary.blocked, 4);
    assert_eq!(result.summary.warnings, 1);

    let imported_ids: Vec<_> = result.parts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(imported_ids, vec!["P-1", "P-6"]);
    assert_eq!(result.parts[1].name, "P-6"); // 名称回退为配件号

    // 行号指向原始数据行
    let error_rows: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.level == RowIssueLevel::Error)
        .map(|i| i.row)
        .collect();
    assert_eq!(error_rows, vec![2, 3, 4, 5]);
}

/// 测试: 空白行跳过,不计入总行数
#[test]
fn test_blank_rows_skipped() {
    let csv = "\
part_id,name,equipment_type,unit_price_cents,installation_price_cents,shipping_fee_cents
P-1,Part,HVAC,100,50,10
,,,,,
";
    let (_dir, path) = write_csv(csv);

    let importer = PartsCatalogImporter::new();
    let result = importer.import_file(&path).unwrap();
    assert_eq!(result.summary.total_rows, 1);
    assert_eq!(result.summary.imported, 1);
}
