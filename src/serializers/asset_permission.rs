//! 授权规则与授权树的 wire 投影
//! 投影只读取已加载的对象图并分配新输出，无副作用，可并发调用

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::actions::ActionTable;
use crate::error::Result;
use crate::models::node::{GrantedAsset, GrantedNodeAssets, GrantedTreeNode, Node};
use crate::models::permission::{AssetPermission, RelatedRef};

// ==================== 授权规则 ====================

/// 创建/更新授权规则请求
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PermissionDetail {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[serde(default)]
    pub users: Vec<Uuid>,
    #[serde(default)]
    pub user_groups: Vec<Uuid>,
    #[serde(default)]
    pub assets: Vec<Uuid>,
    #[serde(default)]
    pub nodes: Vec<Uuid>,
    #[serde(default)]
    pub system_users: Vec<Uuid>,
    /// 动作标签列表，入库前编码为位掩码
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub date_start: DateTime<Utc>,
    pub date_expired: DateTime<Utc>,
    #[serde(default)]
    pub comment: String,
}

fn default_active() -> bool {
    true
}

impl PermissionDetail {
    /// 将 actions 标签编码为存储位掩码，交给持久层
    pub fn action_bits(&self, table: &ActionTable) -> Result<u32> {
        table.encode(&self.actions)
    }
}

/// 授权规则列表响应
/// 多对多关系渲染为显示名序列，actions 渲染为显示名序列
#[derive(Debug, Serialize)]
pub struct PermissionResponse {
    pub id: Uuid,
    pub name: String,
    pub users: Vec<String>,
    pub user_groups: Vec<String>,
    pub assets: Vec<String>,
    pub nodes: Vec<String>,
    pub system_users: Vec<String>,
    pub actions: Vec<&'static str>,
    pub is_active: bool,
    pub date_start: DateTime<Utc>,
    pub date_expired: DateTime<Utc>,
    pub is_valid: bool,
    pub is_expired: bool,
    pub comment: String,
    pub created_by: String,
    pub date_created: DateTime<Utc>,
    pub org_id: Uuid,
}

impl PermissionResponse {
    pub fn from_model(perm: &AssetPermission, table: &ActionTable) -> Self {
        Self {
            id: perm.id,
            name: perm.name.clone(),
            users: display_names(&perm.users),
            user_groups: display_names(&perm.user_groups),
            assets: display_names(&perm.assets),
            nodes: display_names(&perm.nodes),
            system_users: display_names(&perm.system_users),
            actions: table.describe(perm.actions),
            is_active: perm.is_active,
            date_start: perm.date_start,
            date_expired: perm.date_expired,
            is_valid: perm.is_valid,
            is_expired: perm.is_expired,
            comment: perm.comment.clone(),
            created_by: perm.created_by.clone(),
            date_created: perm.date_created,
            org_id: perm.org_id,
        }
    }
}

fn display_names(refs: &[RelatedRef]) -> Vec<String> {
    refs.iter().map(|r| r.display.clone()).collect()
}

/// 仅更新授权用户的窄请求，只暴露 id 与 users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionUsersPatch {
    pub id: Uuid,
    pub users: Vec<Uuid>,
}

/// 仅更新授权资产的窄请求，只暴露 id 与 assets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionAssetsPatch {
    pub id: Uuid,
    pub assets: Vec<Uuid>,
}

// ==================== 授权树 ====================

/// 授权树浏览视图的节点
/// tree_id / tree_parent 是给通用前端树控件的别名，分别取 key 与父 key
#[derive(Debug, Serialize)]
pub struct NodeTreeResponse {
    pub id: i64,
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<GrantedAsset>,
    pub is_node: bool,
    pub org_id: Uuid,
    pub tree_id: String,
    pub tree_parent: String,
    pub assets_amount: i64,
}

impl NodeTreeResponse {
    pub fn from_model(granted: &GrantedTreeNode) -> Self {
        let node = &granted.node;
        Self {
            id: node.id,
            key: node.key.clone(),
            value: node.value.clone(),
            asset: granted.asset.clone(),
            is_node: node.is_node,
            org_id: node.org_id,
            tree_id: node.key.clone(),
            tree_parent: node.parent_key().to_string(),
            assets_amount: granted.assets_amount,
        }
    }
}

/// 平铺授权视图的节点及其全部授权资产
/// parent 是父节点的数字 id，不是 key 字符串；与树视图的 tree_parent 保持各自格式
#[derive(Debug, Serialize)]
pub struct GrantedNodeResponse {
    pub id: i64,
    pub key: String,
    pub name: String,
    pub value: String,
    pub parent: i64,
    pub assets_granted: Vec<GrantedAsset>,
    pub assets_amount: i64,
    pub org_id: Uuid,
}

impl GrantedNodeResponse {
    pub fn from_model(granted: &GrantedNodeAssets) -> Self {
        let node = &granted.node;
        Self {
            id: node.id,
            key: node.key.clone(),
            name: node.name().to_string(),
            value: node.value.clone(),
            parent: granted.parent_id,
            assets_amount: granted.assets_granted.len() as i64,
            assets_granted: granted.assets_granted.clone(),
            org_id: node.org_id,
        }
    }
}

/// 节点简要信息
#[derive(Debug, Serialize)]
pub struct NodeSummary {
    pub id: i64,
    pub name: String,
    pub key: String,
    pub value: String,
}

impl NodeSummary {
    pub fn from_model(node: &Node) -> Self {
        Self {
            id: node.id,
            name: node.name().to_string(),
            key: node.key.clone(),
            value: node.value.clone(),
        }
    }
}
