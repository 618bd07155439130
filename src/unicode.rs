// Helper functions for UTF-16 string operations
pub fn utf8_to_utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

pub fn utf16_to_utf8(v: &[u16]) -> String {
    String::from_utf16_lossy(v)
}

/// WhiteSpace and LineTerminator code units accepted around a numeric literal.
pub fn is_js_whitespace(c: u16) -> bool {
    matches!(
        c,
        0x0009 | 0x000B | 0x000C | 0x0020 | 0x00A0 | 0xFEFF // WhiteSpace
            | 0x000A | 0x000D | 0x2028 | 0x2029 // LineTerminator
            | 0x1680 | 0x2000..=0x200A | 0x202F | 0x205F | 0x3000 // Zs
    )
}

pub fn utf16_trim(v: &[u16]) -> &[u16] {
    let start = v.iter().position(|&c| !is_js_whitespace(c)).unwrap_or(v.len());
    let end = v.iter().rposition(|&c| !is_js_whitespace(c)).map_or(start, |i| i + 1);
    &v[start..end]
}
