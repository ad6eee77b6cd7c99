// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use ewm_chain::account;
use thiserror::Error;

/// Specialisation of `std::Result`.
pub type Result<T, E = SignError> = std::result::Result<T, E>;

/// The step of the signing pipeline that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignStage {
    Nonce,
    Serialization,
    Signing,
}

/// Signing errors
#[derive(Error, Debug)]
pub enum SignError {
    #[error("Failed to assign a nonce: {0}")]
    Nonce(#[source] account::Error),
    #[error("Failed to serialize the transaction: {0}")]
    Serialization(#[source] ewm_chain::Error),
    #[error("Failed to sign the transaction: {0}")]
    Signing(#[source] account::Error),
}

impl SignError {
    pub fn stage(&self) -> SignStage {
        match self {
            Self::Nonce(_) => SignStage::Nonce,
            Self::Serialization(_) => SignStage::Serialization,
            Self::Signing(_) => SignStage::Signing,
        }
    }
}
