//! 序列化模块
//! 每个 wire 形状都是显式声明字段的类型，字段名即 API 契约

pub mod asset_permission;
