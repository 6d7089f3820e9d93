//! 大小写折叠比较
//!
//! 逐字符比较两个字符串：字符相等、转大写后相等或转小写后相等即视为匹配。
//! 不做 trim，不做 Unicode 规范化，也不依赖 locale。

/// 忽略大小写比较两个字符串
///
/// 两个字符串的字符数必须相同，因此 `"ß"` 与 `"SS"` 不相等。
/// 大小写映射使用完整的 Unicode 映射：`'İ'` 的小写是两个字符，
/// 因而 `"İ"` 与 `"i"` 不相等。
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(l), Some(r)) => {
                if !chars_eq_ignore_case(l, r) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

fn chars_eq_ignore_case(l: char, r: char) -> bool {
    l == r || l.to_uppercase().eq(r.to_uppercase()) || l.to_lowercase().eq(r.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_fold() {
        assert!(eq_ignore_case("GREEN", "green"));
        assert!(eq_ignore_case("Blue", "bLUE"));
        assert!(eq_ignore_case("", ""));
        assert!(!eq_ignore_case("RED", "RED "));
        assert!(!eq_ignore_case("RED", "REDD"));
    }

    #[test]
    fn test_unicode_fold() {
        assert!(eq_ignore_case("ÉTÉ", "été"));
        assert!(eq_ignore_case("ΣΊΣΥΦΟΣ", "σίσυφος"));
        assert!(!eq_ignore_case("straße", "STRASSE"));
    }

    #[test]
    fn test_multi_char_lowercase_does_not_match() {
        assert!(!eq_ignore_case("İ", "i"));
        assert!(eq_ignore_case("İ", "İ"));
    }

    #[test]
    fn test_no_trimming() {
        assert!(!eq_ignore_case(" red", "RED"));
        assert!(!eq_ignore_case("red\n", "RED"));
    }
}
