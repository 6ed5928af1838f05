// ==========================================
// 批量导入工具 - 实体导入策略
// ==========================================
// 每个实体类型独立维护必填字段、白名单与请求体结构
// ==========================================

pub mod user;
pub mod vehicle;
pub mod vehicle_manufacturer;
pub mod vehicle_model;

pub use user::UserStrategy;
pub use vehicle::VehicleStrategy;
pub use vehicle_manufacturer::VehicleManufacturerStrategy;
pub use vehicle_model::VehicleModelStrategy;
