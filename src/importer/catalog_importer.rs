// ==========================================
// 现场维修工单台账系统 - 配件目录导入器
// ==========================================
// 职责: CSV 文件 -> 配件目录 + 行级质量报告
// 流程: 文件解析 -> 行校验 -> 汇总报告
// 红线: 行级问题不中断导入;ERROR 行阻断入目录,WARNING 行放行并记录
// ==========================================

use crate::domain::part::Part;
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::instrument;

/// 必需列
const REQUIRED_COLUMNS: [&str; 6] = [
    "part_id",
    "name",
    "equipment_type",
    "unit_price_cents",
    "installation_price_cents",
    "shipping_fee_cents",
];

// ==========================================
// 行级质量报告结构
// ==========================================

/// 行级问题级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowIssueLevel {
    Error,   // 错误(该行阻断,不入目录)
    Warning, // 警告(放行,仅记录)
}

/// 行级问题明细
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowIssue {
    pub row: usize,             // 原始文件行号(数据行从 1 计)
    pub level: RowIssueLevel,   // 问题级别
    pub field: String,          // 问题字段
    pub message: String,        // 问题描述
}

/// 导入汇总统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total_rows: usize, // 数据行总数
    pub imported: usize,   // 成功入目录行数
    pub blocked: usize,    // 阻断行数(ERROR)
    pub warnings: usize,   // 警告条数
}

/// 导入结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogImportResult {
    pub parts: Vec<Part>,       // 入目录配件(源文件顺序)
    pub summary: ImportSummary, // 汇总统计
    pub issues: Vec<RowIssue>,  // 行级问题明细
}

// ==========================================
// PartsCatalogImporter - 配件目录导入器
// ==========================================
pub struct PartsCatalogImporter;

impl PartsCatalogImporter {
    pub fn new() -> Self {
        Self
    }

    /// 从 CSV 文件导入配件目录
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn import_file(&self, path: impl AsRef<Path>) -> ImportResult<CatalogImportResult> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }
        if let Some(ext) = path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(path)?;
        let result = self.import_reader(file)?;
        tracing::info!(
            imported = result.summary.imported,
            blocked = result.summary.blocked,
            warnings = result.summary.warnings,
            "配件目录导入完成"
        );
        Ok(result)
    }

    /// 从任意 Read 导入(单元测试入口)
    pub fn import_reader<R: Read>(&self, reader: R) -> ImportResult<CatalogImportResult> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(reader);

        // 读取表头并校验必需列
        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ImportError::MissingColumn(column.to_string()));
            }
        }

        let mut parts = Vec::new();
        let mut issues = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut total_rows = 0usize;

        for (idx, record) in csv_reader.records().enumerate() {
            let row = idx + 1; // 数据行号(不含表头)
            let record = record?;

            let mut fields: HashMap<&str, String> = HashMap::new();
            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    fields.insert(header.as_str(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if fields.values().all(|v| v.is_empty()) {
                continue;
            }
            total_rows += 1;

            match Self::validate_row(row, &fields, &mut seen_ids, &mut issues) {
                Some(part) => parts.push(part),
                None => {} // 阻断行,问题已入报告
            }
        }

        let blocked = issues
            .iter()
            .filter(|i| i.level == RowIssueLevel::Error)
            .count();
        let warnings = issues
            .iter()
            .filter(|i| i.level == RowIssueLevel::Warning)
            .count();

        Ok(CatalogImportResult {
            summary: ImportSummary {
                total_rows,
                imported: parts.len(),
                blocked,
                warnings,
            },
            parts,
            issues,
        })
    }

    // ==========================================
    // 行校验
    // ==========================================

    /// 校验单行,通过则产出配件
    ///
    /// 规则:
    /// - part_id 缺失 -> ERROR 阻断
    /// - part_id 重复 -> 后出现行 ERROR 阻断(首条生效)
    /// - equipment_type 缺失 -> ERROR 阻断
    /// - 金额不可解析或为负 -> ERROR 阻断
    /// - name 缺失 -> WARNING,回退为 part_id
    fn validate_row(
        row: usize,
        fields: &HashMap<&str, String>,
        seen_ids: &mut HashSet<String>,
        issues: &mut Vec<RowIssue>,
    ) -> Option<Part> {
        let mut blocked = false;

        let part_id = fields.get("part_id").cloned().unwrap_or_default();
        if part_id.is_empty() {
            issues.push(RowIssue {
                row,
                level: RowIssueLevel::Error,
                field: "part_id".to_string(),
                message: "配件号为空".to_string(),
            });
            blocked = true;
        } else if !seen_ids.insert(part_id.clone()) {
            issues.push(RowIssue {
                row,
                level: RowIssueLevel::Error,
                field: "part_id".to_string(),
                message: format!("配件号重复: {}(首条生效)", part_id),
            });
            blocked = true;
        }

        let equipment_type = fields.get("equipment_type").cloned().unwrap_or_default();
        if equipment_type.is_empty() {
            issues.push(RowIssue {
                row,
                level: RowIssueLevel::Error,
                field: "equipment_type".to_string(),
                message: "设备类型为空".to_string(),
            });
            blocked = true;
        }

        let mut amounts = [0i64; 3];
        let amount_fields = [
            "unit_price_cents",
            "installation_price_cents",
            "shipping_fee_cents",
        ];
        for (slot, field) in amount_fields.iter().enumerate() {
            match Self::parse_amount(fields.get(*field).map(String::as_str)) {
                Some(value) if value >= 0 => amounts[slot] = value,
                Some(value) => {
                    issues.push(RowIssue {
                        row,
                        level: RowIssueLevel::Error,
                        field: field.to_string(),
                        message: format!("金额不可为负: {}", value),
                    });
                    blocked = true;
                }
                None => {
                    issues.push(RowIssue {
                        row,
                        level: RowIssueLevel::Error,
                        field: field.to_string(),
                        message: "金额缺失或不可解析".to_string(),
                    });
                    blocked = true;
                }
            }
        }

        if blocked {
            return None;
        }

        let mut name = fields.get("name").cloned().unwrap_or_default();
        if name.is_empty() {
            issues.push(RowIssue {
                row,
                level: RowIssueLevel::Warning,
                field: "name".to_string(),
                message: "配件名称为空,回退为配件号".to_string(),
            });
            name = part_id.clone();
        }

        Some(Part {
            id: part_id,
            name,
            equipment_type,
            unit_price_cents: amounts[0],
            installation_price_cents: amounts[1],
            shipping_fee_cents: amounts[2],
        })
    }

    /// 解析金额字段(整数分)
    fn parse_amount(value: Option<&str>) -> Option<i64> {
        value.and_then(|v| v.trim().parse::<i64>().ok())
    }
}

impl Default for PartsCatalogImporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_import() {
        let csv = "\
part_id,name,equipment_type,unit_price_cents,installation_price_cents,shipping_fee_cents
P-1,Blower Motor,HVAC,12800,8000,1500
P-2,Door Gasket,Refrigeration,3200,2000,700
";
        let importer = PartsCatalogImporter::new();
        let result = importer.import_reader(csv.as_bytes()).unwrap();

        assert_eq!(result.summary.total_rows, 2);
        assert_eq!(result.summary.imported, 2);
        assert_eq!(result.summary.blocked, 0);
        assert!(result.issues.is_empty());
        assert_eq!(result.parts[0].id, "P-1");
    }

    #[test]
    fn test_negative_amount_blocks_row() {
        let csv = "\
part_id,name,equipment_type,unit_price_cents,installation_price_cents,shipping_fee_cents
P-1,Blower Motor,HVAC,-5,8000,1500
P-2,Door Gasket,Refrigeration,3200,2000,700
";
        let importer = PartsCatalogImporter::new();
        let result = importer.import_reader(csv.as_bytes()).unwrap();

        assert_eq!(result.summary.imported, 1);
        assert_eq!(result.summary.blocked, 1);
        assert_eq!(result.parts[0].id, "P-2");
        assert_eq!(result.issues[0].row, 1);
        assert_eq!(result.issues[0].level, RowIssueLevel::Error);
    }

    #[test]
    fn test_duplicate_id_first_wins() {
        let csv = "\
part_id,name,equipment_type,unit_price_cents,installation_price_cents,shipping_fee_cents
P-1,First,HVAC,100,50,10
P-1,Second,HVAC,999,999,999
";
        let importer = PartsCatalogImporter::new();
        let result = importer.import_reader(csv.as_bytes()).unwrap();

        assert_eq!(result.summary.imported, 1);
        assert_eq!(result.parts[0].name, "First");
        assert!(result.issues.iter().any(|i| i.row == 2 && i.field == "part_id"));
    }

    #[test]
    fn test_empty_name_warns_and_falls_back() {
        let csv = "\
part_id,name,equipment_type,unit_price_cents,installation_price_cents,shipping_fee_cents
P-1,,HVAC,100,50,10
";
        let importer = PartsCatalogImporter::new();
        let result = importer.import_reader(csv.as_bytes()).unwrap();

        assert_eq!(result.summary.imported, 1);
        assert_eq!(result.summary.warnings, 1);
        assert_eq!(result.parts[0].name, "P-1");
    }

    #[test]
    fn test_missing_column_is_file_level_error() {
        let csv = "part_id,name,unit_price_cents\nP-1,Motor,100\n";
        let importer = PartsCatalogImporter::new();
        let err = importer.import_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::MissingColumn(col) if col == "equipment_type"));
    }
}
