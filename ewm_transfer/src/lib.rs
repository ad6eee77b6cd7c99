// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

#[macro_use]
extern crate tracing;

pub use ewm_chain::account::Error as AccountError;
pub use ewm_chain::{
    Account, Address, Amount, Ether, FeeBasis, Gas, GasPrice, Hash, LogRef, Network, Token,
    TransactionRef, TransactionStatus,
};

mod basis;
mod error;
mod originating;
mod sign;
mod status;
mod transfer;

pub use basis::{Basis, BasisType};
pub use error::{Result, SignError, SignStage};
pub use originating::ETHER_TRANSFER_GAS_LIMIT;
pub use status::{ErrorReason, Inclusion, TransferStatus, TransferStatusType, MAX_REASON_BYTES};

/// Types used in the public API
pub use transfer::Transfer;
