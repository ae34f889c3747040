// ==========================================
// 现场维修工单台账系统 - 配件报价聚合引擎
// ==========================================
// 依据: 配件报价设计 v0.2 - 金额口径
// 红线: 金额全程整数分;行小计 = 单价 + 安装费 + 运费
// ==========================================
// 职责: 选择集 -> 逐行小计 + 合计
// 失效配件号(目录中已不存在)按零贡献跳过,由上层在下次读取时清理
// ==========================================

use crate::domain::part::{Part, PartsSelection};
use crate::engine::catalog::CatalogIndex;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// Quote - 报价单
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub equipment_type: String,   // 报价所属设备类型
    pub lines: Vec<QuoteLine>,    // 逐行明细(仅可解析的配件)
    pub stale_ids: Vec<String>,   // 失效配件号(目录中已不存在,计零)
    pub total_cents: i64,         // 合计(分)
}

// ==========================================
// QuoteLine - 报价明细行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteLine {
    pub part_id: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub installation_price_cents: i64,
    pub shipping_fee_cents: i64,
    pub line_total_cents: i64,
}

// ==========================================
// PricingAggregator - 报价聚合引擎
// ==========================================
pub struct PricingAggregator;

impl PricingAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 单配件行小计(分)
    ///
    /// 聚合与逐行展示共用同一口径
    pub fn line_total_cents(part: &Part) -> i64 {
        part.unit_price_cents + part.installation_price_cents + part.shipping_fee_cents
    }

    /// 选择集合计(分)
    ///
    /// 空选择集恒为 0;失效配件号计零跳过
    pub fn compute_total_cents(&self, selection: &PartsSelection, catalog: &CatalogIndex) -> i64 {
        selection
            .selected_part_ids
            .iter()
            .filter_map(|id| catalog.find_in_type(&selection.equipment_type, id))
            .map(Self::line_total_cents)
            .sum()
    }

    /// 生成报价单(逐行明细 + 失效配件号清单 + 合计)
    #[instrument(skip(self, selection, catalog), fields(equipment_type = %selection.equipment_type, selected = selection.selected_part_ids.len()))]
    pub fn quote(&self, selection: &PartsSelection, catalog: &CatalogIndex) -> Quote {
        let mut lines = Vec::new();
        let mut stale_ids = Vec::new();

        for id in &selection.selected_part_ids {
            match catalog.find_in_type(&selection.equipment_type, id) {
                Some(part) => lines.push(QuoteLine {
                    part_id: part.id.clone(),
                    name: part.name.clone(),
                    unit_price_cents: part.unit_price_cents,
                    installation_price_cents: part.installation_price_cents,
                    shipping_fee_cents: part.shipping_fee_cents,
                    line_total_cents: Self::line_total_cents(part),
                }),
                None => stale_ids.push(id.clone()),
            }
        }

        if !stale_ids.is_empty() {
            tracing::debug!(stale = stale_ids.len(), "选择集中存在失效配件号,按零计入");
        }

        let total_cents = lines.iter().map(|l| l.line_total_cents).sum();
        Quote {
            equipment_type: selection.equipment_type.clone(),
            lines,
            stale_ids,
            total_cents,
        }
    }
}

impl Default for PricingAggregator {
    fn default() -> Self {
        Self::new()
    }
}
