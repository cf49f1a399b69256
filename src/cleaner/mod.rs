//! 剪贴板文本清洗层
//!
//! 在剪贴板读取与粘贴/模拟键入之间插入确定性清洗层：游戏聊天框会拒绝
//! 零宽字符、智能引号等 Unicode 字符，导致粘贴内容被吞或显示乱码。
//!
//! ## 处理流程
//! 1. Unicode 归一化 (NFKC)
//! 2. 移除零宽字符与 BOM
//! 3. 不换行空格折叠为普通空格
//! 4. 智能标点替换（弯引号/破折号/省略号 → ASCII）
//! 5. 换行折叠为空格（可选，单行模式）
//! 6. 空白折叠 + 首尾修剪
//! 7. ASCII 折叠（可选，去音调符并丢弃非 ASCII）

mod engine;
mod rules;
mod types;

pub use engine::{clean_text, strip_diacritics, CleanEngine};
pub use types::{CleanOptions, CleanResult};
