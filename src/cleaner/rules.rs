//! 清洗规则定义
//!
//! 包含智能引号映射表、符号替换表、零宽字符与不换行空格判定

use std::collections::HashMap;

/// 智能引号映射表（含坏拷贝残留的控制字符）
///
/// 前三项直接删除；C1 控制区的键是 Windows-1252 乱码引号，
/// 网页/聊天记录复制时经常原样带过来
const SMART_QUOTES: &[(char, &'static str)] = &[
    ('\u{001A}', ""), // SUB
    ('\u{007F}', ""), // DEL
    ('\u{00AD}', ""), // 软连字符
    // Windows-1252 乱码引号（C1 控制区）
    ('\u{0091}', "'"),
    ('\u{0092}', "'"),
    ('\u{0084}', "\""),
    ('\u{0093}', "\""),
    ('\u{0094}', "\""),
    // 弯引号
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201A}', ","),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{201E}', ","),
];

/// 符号替换表
const CHAR_REPLACEMENTS: &[(char, &'static str)] = &[
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "-"),   // em dash
    ('\u{2212}', "-"),   // 数学减号
    ('\u{2026}', "..."), // 省略号
];

/// 标点替换映射
///
/// 两张表在构建时合并一次，之后只读。键都是单字符且互不重叠，
/// 因此逐字符单次扫描即可，替换顺序不影响结果
pub struct PunctuationMap {
    map: HashMap<char, &'static str>,
}

impl PunctuationMap {
    pub fn new() -> Self {
        let map = SMART_QUOTES
            .iter()
            .chain(CHAR_REPLACEMENTS.iter())
            .copied()
            .collect();

        Self { map }
    }

    /// 尝试映射标点字符
    ///
    /// 返回 Some(替换串) 如果该字符在映射表中（替换串可能为空，表示删除）
    pub fn try_map(&self, ch: char) -> Option<&'static str> {
        self.map.get(&ch).copied()
    }
}

impl Default for PunctuationMap {
    fn default() -> Self {
        Self::new()
    }
}

/// 判断是否为零宽字符（U+200B–U+200D）或 BOM（U+FEFF）
pub fn is_zero_width(ch: char) -> bool {
    matches!(ch, '\u{200B}'..='\u{200D}' | '\u{FEFF}')
}

/// 判断是否为不换行空格（U+00A0 / U+202F / U+2007）
pub fn is_non_breaking_space(ch: char) -> bool {
    matches!(ch, '\u{00A0}' | '\u{202F}' | '\u{2007}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_map() {
        let map = PunctuationMap::new();
        assert_eq!(map.try_map('\u{2018}'), Some("'"));
        assert_eq!(map.try_map('\u{201C}'), Some("\""));
        assert_eq!(map.try_map('\u{2014}'), Some("-"));
        assert_eq!(map.try_map('\u{2026}'), Some("..."));
        assert_eq!(map.try_map('\u{00AD}'), Some(""));
        assert_eq!(map.try_map('a'), None);
        assert_eq!(map.try_map(' '), None);
    }

    #[test]
    fn test_tables_disjoint() {
        // 两张表的键不能重叠，否则合并顺序会影响结果
        let map = PunctuationMap::new();
        assert_eq!(map.map.len(), SMART_QUOTES.len() + CHAR_REPLACEMENTS.len());
    }

    #[test]
    fn test_zero_width_predicate() {
        assert!(is_zero_width('\u{200B}'));
        assert!(is_zero_width('\u{200C}'));
        assert!(is_zero_width('\u{200D}'));
        assert!(is_zero_width('\u{FEFF}'));
        assert!(!is_zero_width(' '));
        assert!(!is_zero_width('\u{200A}')); // hair space 不是零宽字符
    }

    #[test]
    fn test_non_breaking_space_predicate() {
        assert!(is_non_breaking_space('\u{00A0}'));
        assert!(is_non_breaking_space('\u{202F}'));
        assert!(is_non_breaking_space('\u{2007}'));
        assert!(!is_non_breaking_space(' '));
        assert!(!is_non_breaking_space('\t'));
    }
}
