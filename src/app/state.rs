// ==========================================
// 现场维修工单台账系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use crate::api::{OrderApi, PartsApi};
use crate::config::ConsoleConfig;
use crate::provider::{JsonFileSource, MockDataSource, OrderSource};

/// 应用状态
///
/// 包含所有API实例和共享资源;
/// 单线程同步模型,不需要锁
pub struct AppState {
    /// 控制台配置
    pub config: ConsoleConfig,

    /// 工单API
    pub order_api: OrderApi,

    /// 配件API
    pub parts_api: PartsApi,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// 该方法会:
    /// 1. 按配置选择数据源(JSON 文件或内置演示数据)
    /// 2. 拉取配件目录并构建索引
    /// 3. 创建所有API实例(工单API完成首次拉取)
    pub fn new(config: ConsoleConfig) -> anyhow::Result<Self> {
        config.apply_locale();

        let (order_source, parts_api): (Box<dyn OrderSource>, PartsApi) =
            match config.file_source_paths() {
                Some((orders_path, catalog_path)) => {
                    tracing::info!(
                        orders = %orders_path.display(),
                        catalog = %catalog_path.display(),
                        "使用 JSON 文件数据源"
                    );
                    let parts_source = JsonFileSource::new(orders_path, catalog_path);
                    let parts_api = PartsApi::from_source(&parts_source)?;
                    (
                        Box::new(JsonFileSource::new(orders_path, catalog_path)),
                        parts_api,
                    )
                }
                None => {
                    tracing::info!("未配置数据文件,使用内置演示数据源");
                    let parts_api = PartsApi::from_source(&MockDataSource::new())?;
                    (Box::new(MockDataSource::new()), parts_api)
                }
            };

        let order_api = OrderApi::new(order_source)?;

        Ok(Self {
            config,
            order_api,
            parts_api,
        })
    }
}
