//! ASCII case folding used for child-map keys.
//!
//! Only `a-z` and `A-Z` are folded. Every other character compares equal
//! only to itself, whatever its Unicode case mapping says.

const CASE_OFFSET: u32 = 'a' as u32 - 'A' as u32;

/// Map a lowercase ASCII letter to its uppercase counterpart.
///
/// All other characters pass through unchanged. Two characters that
/// [`equals`] treats as equal always fold to the same value.
#[inline]
pub fn fold(c: char) -> char {
    if c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

/// Case-insensitive equality over ASCII letters.
pub fn equals(x: char, y: char) -> bool {
    let (x, y) = (x as u32, y as u32);
    if x == y {
        return true;
    }
    // The higher value must be the lowercase letter of the pair.
    let (hi, lo) = if x > y { (x, y) } else { (y, x) };
    hi - lo == CASE_OFFSET && (u32::from(b'a')..=u32::from(b'z')).contains(&hi)
}

/// Key used for child lookup under the given folding policy.
#[inline]
pub(crate) fn key(c: char, ignore_case: bool) -> char {
    if ignore_case {
        fold(c)
    } else {
        c
    }
}
