//! 清洗主引擎
//!
//! 按固定顺序组合各清洗步骤。纯函数，对任意输入都不会失败

use std::time::Instant;

use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

use crate::cleaner::rules::{is_non_breaking_space, is_zero_width, PunctuationMap};
use crate::cleaner::types::{CleanOptions, CleanResult};

lazy_static::lazy_static! {
    /// 进程级默认引擎
    ///
    /// 规则表只构建一次，供 `clean_text` 便捷入口复用
    static ref DEFAULT_ENGINE: CleanEngine = CleanEngine::new();
}

/// 清洗引擎（可复用，预编译规则）
pub struct CleanEngine {
    /// 智能引号 + 符号合并映射
    punctuation: PunctuationMap,
}

impl CleanEngine {
    /// 创建清洗引擎
    pub fn new() -> Self {
        Self {
            punctuation: PunctuationMap::new(),
        }
    }

    /// 清洗文本
    ///
    /// 各步骤的输出依次作为下一步的输入；空输入直接返回空结果。
    /// 对同一选项满足幂等：clean(clean(s)) == clean(s)
    pub fn clean(&self, text: &str, options: &CleanOptions) -> CleanResult {
        let start = Instant::now();

        if text.is_empty() {
            return CleanResult::unchanged(String::new(), 0);
        }

        // 1. Unicode 归一化 (NFKC)
        // 必须先于查表：映射表以合成形式为键
        let mut cleaned: String = text.nfkc().collect();

        // 2. 移除零宽字符与 BOM
        cleaned.retain(|ch| !is_zero_width(ch));

        // 3. 不换行空格折叠为普通空格
        cleaned = cleaned
            .chars()
            .map(|ch| if is_non_breaking_space(ch) { ' ' } else { ch })
            .collect();

        // 4. 智能标点替换
        cleaned = self.substitute_punctuation(&cleaned);

        // 5. 单行模式：换行折叠为空格
        // 先 \r\n 再 \n 最后 \r，保证 Windows 换行只产生一个空格
        if options.single_line {
            cleaned = cleaned
                .replace("\r\n", " ")
                .replace('\n', " ")
                .replace('\r', " ");
        }

        // 6. 空白折叠 + 首尾修剪
        cleaned = collapse_whitespace(&cleaned);

        // 7. ASCII 折叠：去音调符号，丢弃无 ASCII 对应的字符
        // 丢弃夹在空格之间的字符会留下连续空格，需要再折叠一次
        if options.ascii_only {
            cleaned = strip_diacritics(&cleaned);
            cleaned.retain(|ch| ch.is_ascii());
            cleaned = collapse_whitespace(&cleaned);
        }

        let elapsed_us = start.elapsed().as_micros() as u64;
        let changed = cleaned != text;

        tracing::debug!(
            input_chars = text.chars().count(),
            output_chars = cleaned.chars().count(),
            changed,
            elapsed_us,
            "文本清洗完成"
        );

        CleanResult {
            text: cleaned,
            changed,
            elapsed_us,
        }
    }

    /// 应用智能标点替换
    ///
    /// 键都是单字符且互不重叠，逐字符单次扫描即可
    fn substitute_punctuation(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for ch in text.chars() {
            match self.punctuation.try_map(ch) {
                Some(mapped) => result.push_str(mapped),
                None => result.push(ch),
            }
        }
        result
    }
}

impl Default for CleanEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 便捷入口：清洗文本并返回结果字符串
///
/// 使用进程级默认引擎，适合胶水层（剪贴板轮询、热键回调）直接调用
pub fn clean_text(text: &str, ascii_only: bool, single_line: bool) -> String {
    DEFAULT_ENGINE
        .clean(
            text,
            &CleanOptions {
                ascii_only,
                single_line,
            },
        )
        .text
}

/// 去除音调符号
///
/// NFKD 分解后丢弃所有组合标记（组合类非 0 的码点），
/// 带音调的拉丁字母折叠为基础字母
pub fn strip_diacritics(text: &str) -> String {
    text.nfkd()
        .filter(|ch| canonical_combining_class(*ch) == 0)
        .collect()
}

/// 空白折叠：连续空白 → 单个空格，并去掉首尾空白
fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_whitespace = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_whitespace {
                result.push(' ');
                prev_whitespace = true;
            }
        } else {
            result.push(ch);
            prev_whitespace = false;
        }
    }

    result.trim().to_string()
}
