// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::U256;
use thiserror::Error;

/// Specialisation of `std::Result`.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
/// Value and serialization errors
pub enum Error {
    #[error("Lost precision on the amount of ether during parsing.")]
    LossOfPrecision,
    #[error("The ether amount would exceed the maximum value")]
    ExcessiveValue,
    #[error("Failed to parse: {0}")]
    FailedToParseEther(String),
    #[error("Overflow occurred while computing values")]
    NumericOverflow,
    #[error("The transaction nonce has not been assigned")]
    NonceNotAssigned,
    #[error("Gas price {0} does not fit the transaction encoding")]
    GasPriceTooLarge(U256),
    #[error("The transaction has not been signed")]
    TransactionNotSigned,
}
