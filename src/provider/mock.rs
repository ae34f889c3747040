// ==========================================
// 现场维修工单台账系统 - 内置演示数据源
// ==========================================
// 职责: 在没有远端工单服务时提供一组演示数据
// 用途: 开发联调与集成测试;口径与真实数据源完全一致
// ==========================================

use crate::domain::order::{EngineerProfile, WorkOrder};
use crate::domain::part::Part;
use crate::domain::types::{OrderStatus, Priority};
use crate::provider::{OrderSource, PartsSource, ProviderResult};
use chrono::{Duration, Utc};

// ==========================================
// MockDataSource - 内置演示数据源
// ==========================================
pub struct MockDataSource;

impl MockDataSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSource for MockDataSource {
    fn fetch_orders(&self) -> ProviderResult<Vec<WorkOrder>> {
        Ok(demo_orders())
    }

    fn fetch_profile(&self) -> ProviderResult<EngineerProfile> {
        Ok(demo_profile())
    }
}

impl PartsSource for MockDataSource {
    fn fetch_catalog(&self) -> ProviderResult<Vec<Part>> {
        Ok(demo_catalog())
    }
}

// ==========================================
// 演示数据
// ==========================================

/// 演示工程师档案
pub fn demo_profile() -> EngineerProfile {
    EngineerProfile {
        name: "Alex Engineer".to_string(),
        company: "TechFix Solutions".to_string(),
        is_online: true,
        today_orders: 5,
        balance_cents: 14550,
        credit_score: 98,
        satisfaction_count: 420,
        complaint_count: 0,
    }
}

/// 演示工单列表(覆盖全部六种状态)
pub fn demo_orders() -> Vec<WorkOrder> {
    vec![
        WorkOrder {
            id: "WO-29384".to_string(),
            store_name: "Tech Park Bldg A".to_string(),
            address: "1024 Innovation Dr, Floor 1".to_string(),
            distance: Some("0.8 mi".to_string()),
            lat: 37.7749,
            lng: -122.4194,
            fault_description: "Elevator Door Jam - Main Lobby. Unit is unresponsive to reset."
                .to_string(),
            equipment_type: "Elevator".to_string(),
            status: OrderStatus::InProgress,
            priority: Priority::High,
            started_at: Some(Utc::now() - Duration::minutes(45)),
            after_sales_status: None,
        },
        WorkOrder {
            id: "WO-8852".to_string(),
            store_name: "Northside Grocery #118".to_string(),
            address: "8842 Market St, Downtown".to_string(),
            distance: Some("2.4 mi".to_string()),
            lat: 37.7849,
            lng: -122.4094,
            fault_description: "Cooling leak reported near dairy section. Temperature rising."
                .to_string(),
            equipment_type: "Refrigeration".to_string(),
            status: OrderStatus::ToVisit,
            priority: Priority::Medium,
            started_at: None,
            after_sales_status: None,
        },
        WorkOrder {
            id: "WO-1029".to_string(),
            store_name: "City Center Mall".to_string(),
            address: "500 Main St, 3rd Floor".to_string(),
            distance: Some("5.1 mi".to_string()),
            lat: 37.7649,
            lng: -122.4294,
            fault_description: "POS Terminal #4 network connectivity intermittent.".to_string(),
            equipment_type: "IT/Network".to_string(),
            status: OrderStatus::Pending,
            priority: Priority::Low,
            started_at: None,
            after_sales_status: None,
        },
        WorkOrder {
            id: "WO-9921".to_string(),
            store_name: "Westside Clinic".to_string(),
            address: "1200 Health Blvd".to_string(),
            distance: Some("12.0 mi".to_string()),
            lat: 37.7549,
            lng: -122.4394,
            fault_description: "HVAC Unit 4B making loud grinding noises.".to_string(),
            equipment_type: "HVAC".to_string(),
            status: OrderStatus::Pending,
            priority: Priority::Critical,
            started_at: None,
            after_sales_status: None,
        },
        WorkOrder {
            id: "WO-4432".to_string(),
            store_name: "Burger Joint #55".to_string(),
            address: "99 Fast Food Ln".to_string(),
            distance: Some("1.2 mi".to_string()),
            lat: 37.7949,
            lng: -122.3994,
            fault_description: "Fryer thermostat calibration required.".to_string(),
            equipment_type: "Kitchen Equip".to_string(),
            status: OrderStatus::OnHold,
            priority: Priority::Medium,
            started_at: None,
            after_sales_status: None,
        },
        WorkOrder {
            id: "WO-3321".to_string(),
            store_name: "Coffee House Deluxe".to_string(),
            address: "42 Bean St".to_string(),
            distance: Some("0.5 mi".to_string()),
            lat: 37.8049,
            lng: -122.4094,
            fault_description: "Espresso machine group head leaking.".to_string(),
            equipment_type: "Coffee Machine".to_string(),
            status: OrderStatus::AfterSales,
            priority: Priority::High,
            started_at: None,
            after_sales_status: Some("Waiting for customer feedback".to_string()),
        },
        WorkOrder {
            id: "WO-1111".to_string(),
            store_name: "Retail Store X".to_string(),
            address: "101 Shopper Ave".to_string(),
            distance: Some("3.0 mi".to_string()),
            lat: 37.7749,
            lng: -122.4194,
            fault_description: "Automatic door sensor malfunction.".to_string(),
            equipment_type: "Door Systems".to_string(),
            status: OrderStatus::Completed,
            priority: Priority::Low,
            started_at: None,
            after_sales_status: None,
        },
    ]
}

/// 演示配件目录(按设备类型分组)
pub fn demo_catalog() -> Vec<Part> {
    fn part(id: &str, name: &str, equipment_type: &str, unit: i64, install: i64, ship: i64) -> Part {
        Part {
            id: id.to_string(),
            name: name.to_string(),
            equipment_type: equipment_type.to_string(),
            unit_price_cents: unit,
            installation_price_cents: install,
            shipping_fee_cents: ship,
        }
    }

    vec![
        // HVAC
        part("P-HV-001", "Compressor Capacitor", "HVAC", 4500, 3000, 800),
        part("P-HV-002", "Blower Motor", "HVAC", 12800, 8000, 1500),
        part("P-HV-003", "Thermostat Sensor", "HVAC", 2600, 1500, 600),
        // Refrigeration
        part("P-RF-001", "Defrost Heater", "Refrigeration", 5400, 3500, 900),
        part("P-RF-002", "Door Gasket Kit", "Refrigeration", 3200, 2000, 700),
        // Elevator
        part("P-EL-001", "Door Roller Set", "Elevator", 8900, 6000, 1200),
        part("P-EL-002", "Light Curtain", "Elevator", 21500, 9000, 1800),
        // Coffee Machine
        part("P-CM-001", "Group Head Gasket", "Coffee Machine", 1800, 1000, 500),
    ]
}
