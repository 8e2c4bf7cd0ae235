use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::params::Params;

/// Genesis configuration of the fee distribution module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
}

impl GenesisState {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    /// Genesis initialization is rejected wholesale when the parameter set
    /// is invalid; no partial state is admitted.
    pub fn validate(&self) -> Result<(), ParamError> {
        self.params.validate()
    }
}
