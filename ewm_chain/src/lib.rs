// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

#[macro_use]
extern crate tracing;

pub mod account;
pub mod amount;
pub mod common;
pub mod contract;
pub mod error;
pub mod ether;
pub mod gas;
pub mod log;
pub mod network;
pub mod token;
pub mod transaction;
pub mod utils;

pub use account::Account;
pub use amount::{Amount, FeeBasis};
pub use common::{Address, Calldata, Hash, Shared, TxHash, EMPTY_ADDRESS, U256};
pub use error::{Error, Result};
pub use ether::Ether;
pub use gas::{Gas, GasPrice};
pub use log::{Log, LogRef};
pub use network::{CustomNetwork, Network};
pub use token::{Token, TokenQuantity};
pub use transaction::{RlpType, Transaction, TransactionRef, TransactionStatus};
