// ==========================================
// 现场维修工单台账系统 - JSON 文件数据源
// ==========================================
// 职责: 从 JSON 文档读取工单/档案/目录,并在边界完成字段校验
// 红线: 状态与优先级以原始字符串进入,逐单校验;
//       未知值整批拒绝,绝不默认为某个状态
// ==========================================

use crate::domain::order::{EngineerProfile, WorkOrder};
use crate::domain::part::Part;
use crate::domain::types::{OrderStatus, Priority};
use crate::provider::{OrderSource, PartsSource, ProviderError, ProviderResult};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::instrument;

// ==========================================
// 原始载荷结构(解析中间产物)
// ==========================================
// 状态/优先级保持字符串,进入核心前统一校验

#[derive(Debug, Deserialize)]
struct RawOrdersDocument {
    profile: RawProfile,
    orders: Vec<RawWorkOrder>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    name: String,
    company: String,
    #[serde(default)]
    is_online: bool,
    #[serde(default)]
    today_orders: i32,
    #[serde(default)]
    balance_cents: i64,
    #[serde(default)]
    credit_score: i32,
    #[serde(default)]
    satisfaction_count: i32,
    #[serde(default)]
    complaint_count: i32,
}

#[derive(Debug, Deserialize)]
struct RawWorkOrder {
    id: String,
    store_name: String,
    address: String,
    #[serde(default)]
    distance: Option<String>,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lng: f64,
    fault_description: String,
    equipment_type: String,
    status: String,
    priority: String,
    #[serde(default)]
    started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    after_sales_status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCatalogDocument {
    parts: Vec<Part>,
}

// ==========================================
// JsonFileSource - JSON 文件数据源
// ==========================================
pub struct JsonFileSource {
    orders_path: PathBuf,
    catalog_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(orders_path: impl Into<PathBuf>, catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            orders_path: orders_path.into(),
            catalog_path: catalog_path.into(),
        }
    }

    fn read_document(path: &Path) -> ProviderResult<String> {
        if !path.exists() {
            return Err(ProviderError::FileReadError(format!(
                "文件不存在: {}",
                path.display()
            )));
        }
        Ok(fs::read_to_string(path)?)
    }

    /// 原始工单 -> 领域工单(边界校验)
    fn validate_order(raw: RawWorkOrder) -> ProviderResult<WorkOrder> {
        let status = OrderStatus::from_str(&raw.status).ok_or_else(|| {
            ProviderError::UnknownStatus {
                order_id: raw.id.clone(),
                value: raw.status.clone(),
            }
        })?;
        let priority = Priority::from_str(&raw.priority).ok_or_else(|| {
            ProviderError::UnknownPriority {
                order_id: raw.id.clone(),
                value: raw.priority.clone(),
            }
        })?;

        Ok(WorkOrder {
            id: raw.id,
            store_name: raw.store_name,
            address: raw.address,
            distance: raw.distance,
            lat: raw.lat,
            lng: raw.lng,
            fault_description: raw.fault_description,
            equipment_type: raw.equipment_type,
            status,
            priority,
            started_at: raw.started_at,
            after_sales_status: raw.after_sales_status,
        })
    }

    fn validate_part(part: &Part) -> ProviderResult<()> {
        let checks = [
            ("unit_price_cents", part.unit_price_cents),
            ("installation_price_cents", part.installation_price_cents),
            ("shipping_fee_cents", part.shipping_fee_cents),
        ];
        for (field, value) in checks {
            if value < 0 {
                return Err(ProviderError::InvalidAmount {
                    part_id: part.id.clone(),
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    fn load_orders_document(&self) -> ProviderResult<RawOrdersDocument> {
        let text = Self::read_document(&self.orders_path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl OrderSource for JsonFileSource {
    #[instrument(skip(self), fields(path = %self.orders_path.display()))]
    fn fetch_orders(&self) -> ProviderResult<Vec<WorkOrder>> {
        let document = self.load_orders_document()?;
        let mut orders = Vec::with_capacity(document.orders.len());
        for raw in document.orders {
            orders.push(Self::validate_order(raw)?);
        }
        tracing::info!(count = orders.len(), "工单数据加载完成");
        Ok(orders)
    }

    fn fetch_profile(&self) -> ProviderResult<EngineerProfile> {
        let raw = self.load_orders_document()?.profile;
        Ok(EngineerProfile {
            name: raw.name,
            company: raw.company,
            is_online: raw.is_online,
            today_orders: raw.today_orders,
            balance_cents: raw.balance_cents,
            credit_score: raw.credit_score,
            satisfaction_count: raw.satisfaction_count,
            complaint_count: raw.complaint_count,
        })
    }
}

impl PartsSource for JsonFileSource {
    #[instrument(skip(self), fields(path = %self.catalog_path.display()))]
    fn fetch_catalog(&self) -> ProviderResult<Vec<Part>> {
        let text = Self::read_document(&self.catalog_path)?;
        let document: RawCatalogDocument = serde_json::from_str(&text)?;
        for part in &document.parts {
            Self::validate_part(part)?;
        }
        tracing::info!(count = document.parts.len(), "配件目录加载完成");
        Ok(document.parts)
    }
}
