//! 资产树节点域模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 树节点
/// key 编码节点在组织树中的位置，如 "1:3:7"
#[derive(Debug, Clone)]
pub struct Node {
    pub id: i64,
    pub key: String,
    pub value: String,
    pub is_node: bool,
    pub org_id: Uuid,
}

impl Node {
    /// 节点名即显示值
    pub fn name(&self) -> &str {
        &self.value
    }

    /// 直接父节点的 key，根节点返回空串
    pub fn parent_key(&self) -> &str {
        match self.key.rsplit_once(':') {
            Some((parent, _)) => parent,
            None => "",
        }
    }
}

/// 已授权的资产（挂在树的叶子占位节点下）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantedAsset {
    pub id: Uuid,
    pub hostname: String,
    pub ip: String,
    pub port: i32,
    pub protocol: String,
    pub platform: String,
    pub is_active: bool,
    pub comment: String,
}

/// 树浏览视图的节点
/// assets_amount 由解析器注解；叶子占位节点附带单个 asset
#[derive(Debug, Clone)]
pub struct GrantedTreeNode {
    pub node: Node,
    pub asset: Option<GrantedAsset>,
    pub assets_amount: i64,
}

/// 平铺授权视图的节点
/// 解析器注解父节点 id 与完整的授权资产列表
#[derive(Debug, Clone)]
pub struct GrantedNodeAssets {
    pub node: Node,
    pub parent_id: i64,
    pub assets_granted: Vec<GrantedAsset>,
}
