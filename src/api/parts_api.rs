// ==========================================
// 现场维修工单台账系统 - 配件 API
// ==========================================
// 职责: 持有目录索引与会话级选择集,暴露选择/切类/报价
// 红线: 选择集必须与当前设备类型一致;失效配件号在报价读取时清理
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::order::WorkOrder;
use crate::domain::part::{Part, PartsSelection};
use crate::engine::catalog::CatalogIndex;
use crate::engine::pricing::{PricingAggregator, Quote};
use crate::provider::PartsSource;
use tracing::instrument;

// ==========================================
// PartsApi - 配件 API
// ==========================================
pub struct PartsApi {
    catalog: CatalogIndex,
    aggregator: PricingAggregator,
    selection: Option<PartsSelection>, // 配件面板会话(面板关闭即废弃)
}

impl PartsApi {
    /// 从已构建的目录索引创建
    pub fn new(catalog: CatalogIndex) -> Self {
        Self {
            catalog,
            aggregator: PricingAggregator::new(),
            selection: None,
        }
    }

    /// 从配件数据源拉取目录并创建
    pub fn from_source(source: &dyn PartsSource) -> ApiResult<Self> {
        let parts = source.fetch_catalog()?;
        Ok(Self::new(CatalogIndex::build(parts)))
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    /// 从数据源重建目录索引
    ///
    /// 面板会话保留;选择集中因目录变更失效的配件号
    /// 在下一次报价读取时清理
    #[instrument(skip(self, source))]
    pub fn refresh_catalog(&mut self, source: &dyn PartsSource) -> ApiResult<()> {
        let parts = source.fetch_catalog()?;
        self.catalog = CatalogIndex::build(parts);
        tracing::info!(parts = self.catalog.len(), "配件目录已重建");
        Ok(())
    }

    // ==========================================
    // 会话管理
    // ==========================================

    /// 为工单打开配件面板
    ///
    /// 以工单设备类型新建选择集;已有会话(即使同一工单)整体废弃
    #[instrument(skip(self, order), fields(order_id = %order.id, equipment_type = %order.equipment_type))]
    pub fn open_for_order(&mut self, order: &WorkOrder) -> &PartsSelection {
        self.selection.insert(PartsSelection::new(&order.equipment_type))
    }

    /// 关闭配件面板,废弃会话
    pub fn close(&mut self) {
        self.selection = None;
    }

    /// 当前会话选择集
    pub fn active_selection(&self) -> Option<&PartsSelection> {
        self.selection.as_ref()
    }

    // ==========================================
    // 选择操作
    // ==========================================

    /// 勾选/取消配件,返回切换后是否选中
    ///
    /// 仅允许当前设备类型下存在的配件号进入选择集
    pub fn toggle_part(&mut self, part_id: &str) -> ApiResult<bool> {
        let selection = self
            .selection
            .as_mut()
            .ok_or_else(|| ApiError::InvalidInput("配件面板未打开".to_string()))?;

        if self
            .catalog
            .find_in_type(&selection.equipment_type, part_id)
            .is_none()
        {
            return Err(ApiError::InvalidInput(format!(
                "配件不属于当前设备类型: part_id={}, equipment_type={}",
                part_id, selection.equipment_type
            )));
        }

        Ok(selection.toggle(part_id))
    }

    /// 切换浏览的设备类型(类型变化时选择集原子清空)
    pub fn switch_equipment_type(&mut self, equipment_type: &str) -> ApiResult<()> {
        let selection = self
            .selection
            .as_mut()
            .ok_or_else(|| ApiError::InvalidInput("配件面板未打开".to_string()))?;
        selection.switch_equipment_type(equipment_type);
        Ok(())
    }

    /// 当前设备类型下的配件列表(源目录顺序)
    pub fn parts_for_active_type(&self) -> ApiResult<&[Part]> {
        let selection = self
            .selection
            .as_ref()
            .ok_or_else(|| ApiError::InvalidInput("配件面板未打开".to_string()))?;
        Ok(self.catalog.by_type(&selection.equipment_type))
    }

    // ==========================================
    // 报价
    // ==========================================

    /// 生成当前选择集的报价单
    ///
    /// 报价中发现的失效配件号同步从会话选择集中清除,
    /// 使失效项最多影响一次读取
    pub fn quote(&mut self) -> ApiResult<Quote> {
        let selection = self
            .selection
            .as_mut()
            .ok_or_else(|| ApiError::InvalidInput("配件面板未打开".to_string()))?;

        let quote = self.aggregator.quote(selection, &self.catalog);
        for stale_id in &quote.stale_ids {
            selection.deselect(stale_id);
        }
        Ok(quote)
    }
}
