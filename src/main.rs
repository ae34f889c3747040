// ==========================================
// 现场维修工单台账系统 - 控制台入口
// ==========================================
// 用途: 加载数据源,输出各页签工单计数与目录概况
// 展示层(界面)作为外部协作方接入 lib 的 API 层
// ==========================================

use field_service_console::app::AppState;
use field_service_console::config::ConsoleConfig;
use field_service_console::domain::types::OrderStatus;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    field_service_console::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", field_service_console::APP_NAME);
    tracing::info!("系统版本: {}", field_service_console::VERSION);
    tracing::info!("==================================================");

    // 加载配置(缺省时使用默认配置 + 内置演示数据)
    let config = match ConsoleConfig::default_config_path() {
        Some(path) if path.exists() => {
            tracing::info!("加载配置文件: {}", path.display());
            ConsoleConfig::load_from_file(&path)?
        }
        _ => {
            tracing::info!("未找到配置文件,使用默认配置");
            ConsoleConfig::default()
        }
    };

    // 装配应用状态
    let state = AppState::new(config)?;

    // 输出页签角标计数
    let counts = state.order_api.count_by_status();
    for status in OrderStatus::ALL {
        let count = counts.get(&status).copied().unwrap_or(0);
        tracing::info!("{} [{}]: {}", status.label(), status, count);
    }

    // 输出目录概况
    let catalog = state.parts_api.catalog();
    tracing::info!(
        "配件目录: {} 个设备类型, {} 个配件",
        catalog.equipment_types().len(),
        catalog.len()
    );

    let profile = state.order_api.profile()?;
    tracing::info!(
        "工程师: {} ({}) 在线: {}",
        profile.name,
        profile.company,
        profile.is_online
    );

    Ok(())
}
