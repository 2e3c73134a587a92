//! 数据模型模块
//! 授权规则与资产树节点，由外部授权解析器加载并注解后传入投影层

pub mod node;
pub mod permission;
