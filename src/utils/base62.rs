//! Base-62 encoding of numeric identifiers into short codes.
//!
//! Codes are derived from a strictly increasing identifier, so uniqueness
//! comes for free: positional encoding is injective, and the allocator never
//! repeats an identifier. There is no decode — codes are only ever used as
//! lookup keys.

use std::num::NonZeroU64;

/// Encoding alphabet. Index 0-25 = `a`-`z`, 26-51 = `A`-`Z`, 52-61 = `0`-`9`.
///
/// The order is part of the wire contract: `encode(1)` must be `"b"`.
const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const BASE: u64 = ALPHABET.len() as u64;

/// Encodes an identifier as a base-62 short code.
///
/// Repeated division by 62 collects digits least-significant first; the
/// buffer is reversed to put the most significant digit up front. Taking
/// `NonZeroU64` rules out the zero input, which would otherwise encode to an
/// empty string.
pub fn encode(id: NonZeroU64) -> String {
    let mut n = id.get();
    let mut digits = Vec::new();

    while n > 0 {
        digits.push(ALPHABET[(n % BASE) as usize]);
        n /= BASE;
    }

    digits.reverse();

    String::from_utf8(digits).expect("base62 alphabet is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn enc(n: u64) -> String {
        encode(NonZeroU64::new(n).unwrap())
    }

    #[test]
    fn test_encode_one_is_b() {
        assert_eq!(enc(1), "b");
    }

    #[test]
    fn test_alphabet_section_boundaries() {
        assert_eq!(enc(25), "z");
        assert_eq!(enc(26), "A");
        assert_eq!(enc(51), "Z");
        assert_eq!(enc(52), "0");
        assert_eq!(enc(61), "9");
    }

    #[test]
    fn test_encode_rolls_over_at_base() {
        assert_eq!(enc(62), "ba");
        assert_eq!(enc(63), "bb");
        assert_eq!(enc(62 * 62), "baa");
    }

    #[test]
    fn test_encode_large_identifier() {
        // 1 * 62^3 + 2 * 62^2 + 3 * 62 + 4
        let id = 62u64.pow(3) + 2 * 62u64.pow(2) + 3 * 62 + 4;
        assert_eq!(enc(id), "bcde");
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(enc(123_456_789), enc(123_456_789));
    }

    #[test]
    fn test_encode_is_injective_over_range() {
        let mut seen = HashSet::new();
        for n in 1..=10_000u64 {
            assert!(seen.insert(enc(n)), "duplicate code for id {n}");
        }
    }

    #[test]
    fn test_codes_stay_within_alphabet() {
        for n in [1u64, 61, 62, 4096, u64::MAX] {
            assert!(enc(n).bytes().all(|b| ALPHABET.contains(&b)));
        }
    }
}
