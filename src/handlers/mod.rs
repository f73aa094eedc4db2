//! HTTP handlers for photos and albums.

pub mod album;
pub mod photo;

/// Resolve a path id the way a loose `==` against a numeric id would: surrounding
/// whitespace is ignored, `0x`/`0o`/`0b` literals are read in their radix and
/// integral floats (`"5.0"`, `"5e0"`) match. `None` means the id can address no
/// row, which callers report as not found.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if let Some(n) = parse_prefixed(s) {
        return n;
    }
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    let f = s.parse::<f64>().ok().filter(|f| f.is_finite() && f.fract() == 0.0)?;
    if f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// `Some(_)` when `s` starts with a radix prefix. The digits after it are unsigned.
fn parse_prefixed(s: &str) -> Option<Option<i64>> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }
    Some(i64::from_str_radix(digits, radix).ok())
}
