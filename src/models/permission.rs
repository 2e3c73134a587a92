//! 授权规则域模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 关联对象引用（id 与显示名）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedRef {
    pub id: Uuid,
    pub display: String,
}

impl RelatedRef {
    pub fn new(id: Uuid, display: impl Into<String>) -> Self {
        Self {
            id,
            display: display.into(),
        }
    }
}

/// 授权规则
/// is_valid / is_expired 由外部授权解析器在加载时根据有效期窗口计算
#[derive(Debug, Clone)]
pub struct AssetPermission {
    pub id: Uuid,
    pub name: String,
    pub org_id: Uuid,

    // 多对多关系，由解析器随规则一起加载
    pub users: Vec<RelatedRef>,
    pub user_groups: Vec<RelatedRef>,
    pub assets: Vec<RelatedRef>,
    pub nodes: Vec<RelatedRef>,
    pub system_users: Vec<RelatedRef>,

    /// 允许动作位掩码
    pub actions: u32,
    pub is_active: bool,

    // 有效期窗口
    pub date_start: DateTime<Utc>,
    pub date_expired: DateTime<Utc>,

    pub comment: String,

    // 审计字段
    pub created_by: String,
    pub date_created: DateTime<Utc>,

    // 解析器计算字段
    pub is_valid: bool,
    pub is_expired: bool,
}
