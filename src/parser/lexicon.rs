//! 误识修正查找表
//!
//! OCR 的字符混淆用显式小表修正，而不是在解析控制流里内联打补丁，
//! 以后新增混淆项不需要改动解析器。

use phf::phf_map;

/// 选项标签伪影表：按选项匹配的前两个字符（标签 + 右括号）查表
///
/// 圈选的 "C" 常被识别成版权符 ©，"B" 常被识别成数字 8。
/// 修正必须发生在标签提取之前。
static OPTION_PREFIX_FIXES: phf::Map<&'static str, char> = phf_map! {
    "©)" => 'C',
    "8)" => 'B',
};

/// 数字小点 → 罗马数字映射表（按位置，i..v）
static ROMAN_SUBPOINTS: phf::Map<&'static str, &'static str> = phf_map! {
    "1" => "i",
    "2" => "ii",
    "3" => "iii",
    "4" => "iv",
    "5" => "v",
};

/// 选项文本的定向字形替换：字面子串 "go" → "ഉം"
///
/// 这是针对马拉雅拉姆字符 ഉം 的内容级误识补丁，不是通用转写，
/// 必须按字面子串替换（包括词内出现），只作用于选项文本。
const GLYPH_MISREAD: &str = "go";
const GLYPH_REPLACEMENT: &str = "ഉം";

/// 修正选项匹配的两字符前缀，返回修正后的标签字符
///
/// 不在伪影表里时原样返回首字符。
pub fn correct_option_label(prefix: &str) -> Option<char> {
    if let Some(&fixed) = OPTION_PREFIX_FIXES.get(prefix) {
        return Some(fixed);
    }
    prefix.chars().next()
}

/// 数字小点标签映射为罗马数字
///
/// 表外数字（如 "6"）原样保留字面量，不做转换。
pub fn roman_for_digit(digit: &str) -> String {
    ROMAN_SUBPOINTS
        .get(digit)
        .map(|&r| r.to_string())
        .unwrap_or_else(|| digit.to_string())
}

/// 对选项文本应用字形替换
pub fn fix_option_text(text: &str) -> String {
    text.replace(GLYPH_MISREAD, GLYPH_REPLACEMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_artifact_maps_to_c() {
        assert_eq!(correct_option_label("©)"), Some('C'));
    }

    #[test]
    fn test_digit_artifact_maps_to_b() {
        assert_eq!(correct_option_label("8)"), Some('B'));
    }

    #[test]
    fn test_clean_labels_pass_through() {
        assert_eq!(correct_option_label("A)"), Some('A'));
        assert_eq!(correct_option_label("D)"), Some('D'));
    }

    #[test]
    fn test_roman_mapping_in_range() {
        assert_eq!(roman_for_digit("1"), "i");
        assert_eq!(roman_for_digit("2"), "ii");
        assert_eq!(roman_for_digit("3"), "iii");
        assert_eq!(roman_for_digit("4"), "iv");
        assert_eq!(roman_for_digit("5"), "v");
    }

    #[test]
    fn test_roman_mapping_out_of_range_passes_through() {
        assert_eq!(roman_for_digit("6"), "6");
        assert_eq!(roman_for_digit("12"), "12");
    }

    #[test]
    fn test_glyph_fix_is_literal_not_word_boundary() {
        // 词内的 "go" 也要替换
        assert_eq!(fix_option_text("ago go"), "aഉം ഉം");
        assert_eq!(fix_option_text("no match"), "no match");
    }
}
