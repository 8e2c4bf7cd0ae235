//! Governance-adjustable parameters of the transaction-fee distribution
//! module: defaults, per-field validators and the aggregate validation
//! contract enforced before the parameter store accepts a change.

pub mod dec;
pub mod error;
pub mod genesis;
pub mod params;

pub use dec::{Dec, ParseDecError, DECIMAL_PLACES};
pub use error::{ParamError, ParamErrorKind};
pub use genesis::GenesisState;
pub use params::{
    param_pair, param_set_pairs, validate_min_gas_price, validate_shares, ParamPair, Params,
    DEFAULT_ADDR_DERIVATION_COST_CREATE, DEFAULT_DEVELOPER_SHARES, DEFAULT_ENABLE_FEES,
    DEFAULT_MIN_GAS_PRICE, DEFAULT_VALIDATOR_SHARES,
};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage keys understood by the external parameter store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ParamKey {
    EnableFees,
    DeveloperShares,
    ValidatorShares,
    AddrDerivationCostCreate,
    MinGasPrice,
}

impl ParamKey {
    /// Key string under which the field is persisted.
    pub const fn as_str(self) -> &'static str {
        match self {
            ParamKey::EnableFees => "EnableFees",
            ParamKey::DeveloperShares => "DeveloperShares",
            ParamKey::ValidatorShares => "ValidatorShares",
            ParamKey::AddrDerivationCostCreate => "AddrDerivationCostCreate",
            ParamKey::MinGasPrice => "MinGasPrice",
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
