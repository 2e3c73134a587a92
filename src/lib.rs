//! 资产授权系统库
//! 提供授权规则与授权树的 wire 投影

pub mod actions;
pub mod error;
pub mod models;
pub mod serializers;
