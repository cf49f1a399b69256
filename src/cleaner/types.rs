//! 清洗层类型定义

use serde::{Deserialize, Serialize};

/// 清洗选项
///
/// 两个互相独立的开关，由调用方（胶水层）显式传入；
/// 不使用进程级全局状态，同一引擎可带不同选项并发调用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// 强制 ASCII：去掉音调符号，丢弃所有无 ASCII 对应的字符
    pub ascii_only: bool,
    /// 单行模式：把换行折叠为空格
    pub single_line: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            ascii_only: false,
            single_line: true,
        }
    }
}

/// 清洗结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanResult {
    /// 清洗后的文本
    pub text: String,
    /// 是否有改动（胶水层据此决定是否回写剪贴板）
    pub changed: bool,
    /// 处理耗时（微秒）
    pub elapsed_us: u64,
}

impl CleanResult {
    /// 创建无修改的结果
    pub fn unchanged(text: String, elapsed_us: u64) -> Self {
        Self {
            text,
            changed: false,
            elapsed_us,
        }
    }
}
