use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The numeral token of a scene header, kept verbatim.
///
/// Scene numbers come from free-form documents: they may repeat, skip, or
/// (when scenes are built by hand or deserialized) not be numeric at all.
/// The ordering is total:
///
/// 1. numeric numbers first, by value (digit strings of any length),
/// 2. equal values broken by digit count, fewer first (`"5"` before `"05"`),
///    then by the literal text,
/// 3. non-numeric numbers last, lexicographically.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneNumber(String);

impl SceneNumber {
    pub fn new(num: impl Into<String>) -> Self {
        Self(num.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the number is a non-empty run of ASCII digits.
    pub fn is_numeric(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// Numeric value, if the number is numeric and fits in a `u64`.
    pub fn value(&self) -> Option<u64> {
        if self.is_numeric() {
            self.0.parse().ok()
        } else {
            None
        }
    }

    /// Digits with leading zeros removed; comparable by (length, text).
    fn magnitude(&self) -> Option<&str> {
        self.is_numeric().then(|| self.0.trim_start_matches('0'))
    }
}

impl Ord for SceneNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.magnitude(), other.magnitude()) {
            (Some(a), Some(b)) => a
                .len()
                .cmp(&b.len())
                .then_with(|| a.cmp(b))
                .then_with(|| self.0.len().cmp(&other.0.len()))
                .then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for SceneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for SceneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for SceneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneNumber {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SceneNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for SceneNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SceneNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted(nums: &[&str]) -> Vec<String> {
        let mut v: Vec<SceneNumber> = nums.iter().map(|s| SceneNumber::from(*s)).collect();
        v.sort();
        v.into_iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn numeric_order_is_by_value_not_text() {
        assert_eq!(sorted(&["10", "9", "100", "1"]), ["1", "9", "10", "100"]);
    }

    #[test]
    fn leading_zeros_compare_by_value_then_text() {
        assert_eq!(sorted(&["05", "6", "5", "4"]), ["4", "5", "05", "6"]);
        assert_eq!(sorted(&["007", "7", "07"]), ["7", "07", "007"]);
        assert_eq!(sorted(&["00", "0"]), ["0", "00"]);
    }

    #[test]
    fn non_numeric_sorts_after_numeric() {
        assert_eq!(sorted(&["b", "2", "a", "10A", "1"]), ["1", "2", "10A", "a", "b"]);
    }

    #[test]
    fn huge_numbers_do_not_overflow() {
        let big = SceneNumber::from("123456789012345678901234567890");
        let small = SceneNumber::from("99");
        assert!(small < big);
        assert_eq!(big.value(), None);
        assert_eq!(small.value(), Some(99));
    }

    #[test]
    fn empty_is_not_numeric() {
        assert!(!SceneNumber::from("").is_numeric());
        assert!(SceneNumber::from("007").is_numeric());
    }

    #[test]
    fn compares_against_str() {
        assert_eq!(SceneNumber::from("12"), "12");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&SceneNumber::from("42")).unwrap();
        assert_eq!(json, "\"42\"");
    }

    proptest! {
        #[test]
        fn order_is_antisymmetric(a in "[0-9a-c]{0,4}", b in "[0-9a-c]{0,4}") {
            let (x, y) = (SceneNumber::from(a.as_str()), SceneNumber::from(b.as_str()));
            prop_assert_eq!(x.cmp(&y), y.cmp(&x).reverse());
            prop_assert_eq!(x.cmp(&y) == Ordering::Equal, a == b);
        }

        #[test]
        fn order_matches_value_for_small_numbers(a in 0u32..100_000, b in 0u32..100_000) {
            let (x, y) = (SceneNumber::from(a.to_string()), SceneNumber::from(b.to_string()));
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }
    }
}
