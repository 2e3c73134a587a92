//! 动作位掩码编解码
//! 授权规则的 actions 字段以位掩码存储，wire 层用标签或显示名表示

use crate::error::{AppError, Result};

/// 单个动作定义（标签、位值、显示名）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDef {
    pub label: &'static str,
    pub bit: u32,
    pub display: &'static str,
}

/// 动作枚举表
/// 所有编解码按表的声明顺序驱动，保证输出稳定可复现
#[derive(Debug, Clone, Copy)]
pub struct ActionTable {
    entries: &'static [ActionDef],
}

impl ActionTable {
    pub const fn new(entries: &'static [ActionDef]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [ActionDef] {
        self.entries
    }

    /// 位掩码 -> 标签集合
    /// 对任意整数输入都成立，未注册的位静默忽略
    pub fn decode(&self, bitmask: u32) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|action| bitmask & action.bit != 0)
            .map(|action| action.label)
            .collect()
    }

    /// 标签集合 -> 位掩码，空集合编码为 0
    pub fn encode<S: AsRef<str>>(&self, labels: &[S]) -> Result<u32> {
        let mut mask = 0u32;
        for label in labels {
            let label = label.as_ref();
            match self.entries.iter().find(|action| action.label == label) {
                Some(action) => mask |= action.bit,
                None => {
                    tracing::warn!(label = %label, "Unknown action label");
                    return Err(AppError::InvalidActionLabel(label.to_string()));
                }
            }
        }
        Ok(mask)
    }

    /// 位掩码 -> 显示名序列（与 decode 同序，仅用于读侧输出）
    pub fn describe(&self, bitmask: u32) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|action| bitmask & action.bit != 0)
            .map(|action| action.display)
            .collect()
    }
}

/// 资产授权动作表
pub const ASSET_ACTIONS: ActionTable = ActionTable::new(&[
    ActionDef { label: "connect", bit: 0b0001, display: "Connect" },
    ActionDef { label: "upload_file", bit: 0b0010, display: "Upload file" },
    ActionDef { label: "download_file", bit: 0b0100, display: "Download file" },
    ActionDef { label: "delete_file", bit: 0b1000, display: "Delete file" },
]);

/// 全部动作位
pub const ALL_ACTIONS: u32 = 0b1111;
