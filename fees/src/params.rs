use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::dec::Dec;
use crate::error::ParamError;
use crate::ParamKey;

/// Fee distribution stays off until governance switches it on.
pub const DEFAULT_ENABLE_FEES: bool = false;
pub const DEFAULT_DEVELOPER_SHARES: Dec = Dec::with_prec(50, 2); // 50%
pub const DEFAULT_VALIDATOR_SHARES: Dec = Dec::with_prec(50, 2); // 50%
/// Gas charged for deriving a contract address; must cover at least the
/// 36 gas of the contained keccak256 word-hash operation.
pub const DEFAULT_ADDR_DERIVATION_COST_CREATE: u64 = 50;
pub const DEFAULT_MIN_GAS_PRICE: Dec = Dec::ZERO;

/// Governance-adjustable parameters of the fee distribution module.
///
/// The set is built once at genesis and afterwards mutated only through the
/// external parameter store, which must re-validate before committing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    pub enable_fees: bool,
    pub developer_shares: Dec,
    pub validator_shares: Dec,
    pub addr_derivation_cost_create: u64,
    pub min_gas_price: Dec,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            enable_fees: DEFAULT_ENABLE_FEES,
            developer_shares: DEFAULT_DEVELOPER_SHARES,
            validator_shares: DEFAULT_VALIDATOR_SHARES,
            addr_derivation_cost_create: DEFAULT_ADDR_DERIVATION_COST_CREATE,
            min_gas_price: DEFAULT_MIN_GAS_PRICE,
        }
    }
}

impl Params {
    /// Build a parameter set from explicit values. Nothing is checked here;
    /// callers must run [`Params::validate`] before relying on the result.
    pub fn new(
        enable_fees: bool,
        developer_shares: Dec,
        validator_shares: Dec,
        addr_derivation_cost_create: u64,
        min_gas_price: Dec,
    ) -> Self {
        Self {
            enable_fees,
            developer_shares,
            validator_shares,
            addr_derivation_cost_create,
            min_gas_price,
        }
    }

    /// Run every per-field check, then the combined-share bound.
    ///
    /// Checks run in a fixed order and stop at the first failure: enable
    /// flag, developer share, validator share, combined bound, derivation
    /// cost, minimum gas price. The flag and the derivation cost are plain
    /// typed values with nothing left to check at runtime.
    pub fn validate(&self) -> Result<(), ParamError> {
        validate_shares(ParamKey::DeveloperShares, self.developer_shares)?;
        validate_shares(ParamKey::ValidatorShares, self.validator_shares)?;
        match self.developer_shares.checked_add(self.validator_shares) {
            Some(total) if total <= Dec::ONE => {}
            _ => {
                return Err(ParamError::TotalSharesExceedOne {
                    developer: self.developer_shares,
                    validator: self.validator_shares,
                })
            }
        }
        validate_min_gas_price(self.min_gas_price)
    }

    /// Validate and write a single field from its store-encoded form.
    pub fn apply(&mut self, key: ParamKey, value: &Value) -> Result<(), ParamError> {
        (param_pair(key).apply)(value, self)
    }
}

/// A share ratio must be a decimal in `[0, 1]`.
pub fn validate_shares(key: ParamKey, value: Dec) -> Result<(), ParamError> {
    if value.is_negative() {
        return Err(ParamError::Negative { key, value });
    }
    if value > Dec::ONE {
        return Err(ParamError::GreaterThanOne { key, value });
    }
    Ok(())
}

/// The chain-wide gas-price floor must be non-negative. No upper bound.
pub fn validate_min_gas_price(value: Dec) -> Result<(), ParamError> {
    if value.is_negative() {
        return Err(ParamError::Negative {
            key: ParamKey::MinGasPrice,
            value,
        });
    }
    Ok(())
}

/// Registration row handed to the external parameter store: one storage key
/// together with the checks to run against a generically-encoded candidate.
pub struct ParamPair {
    pub key: ParamKey,
    /// Reject a candidate value without touching any parameter set.
    pub validate: fn(&Value) -> Result<(), ParamError>,
    /// Validate, then write the single field. No partial update on failure.
    pub apply: fn(&Value, &mut Params) -> Result<(), ParamError>,
}

/// One pair per governed field, in canonical validation order.
pub fn param_set_pairs() -> &'static [ParamPair] {
    static PAIRS: [ParamPair; 5] = [
        ParamPair {
            key: ParamKey::EnableFees,
            validate: |v| decode_bool(ParamKey::EnableFees, v).map(|_| ()),
            apply: |v, p| {
                p.enable_fees = decode_bool(ParamKey::EnableFees, v)?;
                debug!(key = %ParamKey::EnableFees, value = p.enable_fees, "fee parameter applied");
                Ok(())
            },
        },
        ParamPair {
            key: ParamKey::DeveloperShares,
            validate: |v| {
                let share = decode_dec(ParamKey::DeveloperShares, v)?;
                validate_shares(ParamKey::DeveloperShares, share)
            },
            apply: |v, p| {
                let share = decode_dec(ParamKey::DeveloperShares, v)?;
                validate_shares(ParamKey::DeveloperShares, share)?;
                p.developer_shares = share;
                debug!(key = %ParamKey::DeveloperShares, value = %share, "fee parameter applied");
                Ok(())
            },
        },
        ParamPair {
            key: ParamKey::ValidatorShares,
            validate: |v| {
                let share = decode_dec(ParamKey::ValidatorShares, v)?;
                validate_shares(ParamKey::ValidatorShares, share)
            },
            apply: |v, p| {
                let share = decode_dec(ParamKey::ValidatorShares, v)?;
                validate_shares(ParamKey::ValidatorShares, share)?;
                p.validator_shares = share;
                debug!(key = %ParamKey::ValidatorShares, value = %share, "fee parameter applied");
                Ok(())
            },
        },
        ParamPair {
            key: ParamKey::AddrDerivationCostCreate,
            validate: |v| decode_uint64(ParamKey::AddrDerivationCostCreate, v).map(|_| ()),
            apply: |v, p| {
                p.addr_derivation_cost_create = decode_uint64(ParamKey::AddrDerivationCostCreate, v)?;
                debug!(
                    key = %ParamKey::AddrDerivationCostCreate,
                    value = p.addr_derivation_cost_create,
                    "fee parameter applied"
                );
                Ok(())
            },
        },
        ParamPair {
            key: ParamKey::MinGasPrice,
            validate: |v| {
                let floor = decode_dec(ParamKey::MinGasPrice, v)?;
                validate_min_gas_price(floor)
            },
            apply: |v, p| {
                let floor = decode_dec(ParamKey::MinGasPrice, v)?;
                validate_min_gas_price(floor)?;
                p.min_gas_price = floor;
                debug!(key = %ParamKey::MinGasPrice, value = %floor, "fee parameter applied");
                Ok(())
            },
        },
    ];
    &PAIRS
}

/// Pair registered for `key`. Pairs are laid out in key declaration order.
pub fn param_pair(key: ParamKey) -> &'static ParamPair {
    &param_set_pairs()[key as usize]
}

fn decode_bool(key: ParamKey, value: &Value) -> Result<bool, ParamError> {
    value.as_bool().ok_or_else(|| type_error(key, "bool", value))
}

fn decode_uint64(key: ParamKey, value: &Value) -> Result<u64, ParamError> {
    value.as_u64().ok_or_else(|| type_error(key, "u64", value))
}

fn decode_dec(key: ParamKey, value: &Value) -> Result<Dec, ParamError> {
    match value {
        Value::Null => Err(ParamError::Nil { key }),
        Value::String(text) => text.parse::<Dec>().map_err(|_| ParamError::Type {
            key,
            expected: "decimal string",
            found: format!("{text:?}"),
        }),
        other => Err(type_error(key, "decimal string", other)),
    }
}

fn type_error(key: ParamKey, expected: &'static str, found: &Value) -> ParamError {
    ParamError::Type {
        key,
        expected,
        found: json_kind(found).to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_pass_validation() {
        assert_eq!(Params::default().validate(), Ok(()));
    }

    #[test]
    fn pairs_are_indexed_by_key_order() {
        for pair in param_set_pairs() {
            assert_eq!(param_pair(pair.key).key, pair.key);
        }
    }

    #[test]
    fn share_validator_accepts_exactly_zero_and_one() {
        assert_eq!(validate_shares(ParamKey::DeveloperShares, Dec::ZERO), Ok(()));
        assert_eq!(validate_shares(ParamKey::DeveloperShares, Dec::ONE), Ok(()));
        assert!(matches!(
            validate_shares(ParamKey::DeveloperShares, "1.000000000000000001".parse().unwrap()),
            Err(ParamError::GreaterThanOne { .. })
        ));
    }

    #[test]
    fn negative_share_fails_before_combined_bound() {
        let params = Params::new(
            true,
            "-0.1".parse().unwrap(),
            "0.5".parse().unwrap(),
            50,
            Dec::ZERO,
        );
        assert!(matches!(
            params.validate(),
            Err(ParamError::Negative {
                key: ParamKey::DeveloperShares,
                ..
            })
        ));
    }

    #[test]
    fn apply_rejects_without_mutating() {
        let mut params = Params::default();
        let before = params.clone();
        let err = params
            .apply(ParamKey::DeveloperShares, &json!("1.5"))
            .unwrap_err();
        assert!(matches!(err, ParamError::GreaterThanOne { .. }));
        assert_eq!(params, before);
    }

    #[test]
    fn apply_writes_single_field() {
        let mut params = Params::default();
        params.apply(ParamKey::EnableFees, &json!(true)).unwrap();
        params
            .apply(ParamKey::MinGasPrice, &json!("0.0000001"))
            .unwrap();
        assert!(params.enable_fees);
        assert_eq!(params.min_gas_price, "0.0000001".parse().unwrap());
        assert_eq!(params.developer_shares, DEFAULT_DEVELOPER_SHARES);
    }
}
