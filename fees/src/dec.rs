use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Fractional digits carried by [`Dec`].
pub const DECIMAL_PLACES: u32 = 18;

const UNIT: i128 = 1_000_000_000_000_000_000;

/// Signed fixed-point decimal with 18 fractional digits.
///
/// Fee shares and the gas-price floor are carried as an `i128` mantissa
/// scaled by `10^18`, so arithmetic stays deterministic across platforms.
/// The sign bit exists so that out-of-range candidate values coming from a
/// governance proposal remain representable and can be rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(i128);

impl Dec {
    pub const ZERO: Dec = Dec(0);
    pub const ONE: Dec = Dec(UNIT);

    /// Decimal from an integer scaled by `10^-prec`: `with_prec(50, 2)` is `0.50`.
    pub const fn with_prec(value: i128, prec: u32) -> Self {
        assert!(prec <= DECIMAL_PLACES);
        Dec(value * pow10(DECIMAL_PLACES - prec))
    }

    /// Whole-number decimal.
    pub const fn new(whole: i128) -> Self {
        Dec(whole * UNIT)
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn checked_add(self, other: Dec) -> Option<Dec> {
        match self.0.checked_add(other.0) {
            Some(mantissa) => Some(Dec(mantissa)),
            None => None,
        }
    }

    /// Raw scaled mantissa.
    pub const fn mantissa(self) -> i128 {
        self.0
    }
}

const fn pow10(exp: u32) -> i128 {
    let mut out = 1i128;
    let mut n = exp;
    while n > 0 {
        out *= 10;
        n -= 1;
    }
    out
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let abs = self.0.unsigned_abs();
        let whole = abs / UNIT as u128;
        let frac = abs % UNIT as u128;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let mut digits = format!("{frac:018}");
        while digits.ends_with('0') {
            digits.pop();
        }
        write!(f, "{whole}.{digits}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed decimal string: {0:?}")]
pub struct ParseDecError(String);

impl FromStr for Dec {
    type Err = ParseDecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDecError(s.to_string());
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, frac) = match body.split_once('.') {
            Some((whole, frac)) if !frac.is_empty() => (whole, frac),
            Some(_) => return Err(err()),
            None => (body, ""),
        };
        if whole.is_empty()
            || frac.len() > DECIMAL_PLACES as usize
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }
        let whole: i128 = whole.parse().map_err(|_| err())?;
        let frac_scaled = if frac.is_empty() {
            0
        } else {
            let digits: i128 = frac.parse().map_err(|_| err())?;
            digits * pow10(DECIMAL_PLACES - frac.len() as u32)
        };
        let mantissa = whole
            .checked_mul(UNIT)
            .and_then(|scaled| scaled.checked_add(frac_scaled))
            .ok_or_else(err)?;
        Ok(Dec(if negative { -mantissa } else { mantissa }))
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_agree() {
        assert_eq!(Dec::with_prec(50, 2), "0.5".parse().unwrap());
        assert_eq!(Dec::new(1), Dec::ONE);
        assert_eq!(Dec::with_prec(0, 0), Dec::ZERO);
        assert_eq!(Dec::with_prec(1, 18).mantissa(), 1);
    }

    #[test]
    fn parse_and_display_round_trip() {
        for text in ["0", "1", "0.5", "0.25", "12.000000000000000001", "-0.1"] {
            let dec: Dec = text.parse().unwrap();
            assert_eq!(dec.to_string(), text);
        }
        // trailing zeros collapse on display
        assert_eq!("0.50".parse::<Dec>().unwrap().to_string(), "0.5");
    }

    #[test]
    fn rejects_malformed_strings() {
        for text in ["", "-", ".", "1.", ".5", "1..2", "abc", "1.2e3", "0.1234567890123456789"] {
            assert!(text.parse::<Dec>().is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn ordering_and_sign() {
        let half: Dec = "0.5".parse().unwrap();
        let neg: Dec = "-0.1".parse().unwrap();
        assert!(Dec::ZERO.is_zero());
        assert!(!half.is_zero());
        assert!(neg.is_negative());
        assert!(!half.is_negative());
        assert!(neg < Dec::ZERO);
        assert!(half < Dec::ONE);
        assert!(half.checked_add(half).unwrap() == Dec::ONE);
    }

    #[test]
    fn serde_uses_string_form() {
        let half: Dec = "0.5".parse().unwrap();
        let json = serde_json::to_string(&half).unwrap();
        assert_eq!(json, "\"0.5\"");
        let back: Dec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, half);
    }
}
