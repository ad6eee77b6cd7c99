// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use ewm_chain::{Ether, Hash, LogRef, TransactionRef, TransactionStatus};
use std::cmp::Ordering;

/// The on-chain evidence a transfer is backed by.
///
/// The transaction or log is shared with whoever else tracks it; a transfer only holds
/// a handle.
#[derive(Clone, Debug)]
pub enum Basis {
    Transaction(TransactionRef),
    Log(LogRef),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BasisType {
    Transaction,
    Log,
}

impl Basis {
    pub fn basis_type(&self) -> BasisType {
        match self {
            Self::Transaction(_) => BasisType::Transaction,
            Self::Log(_) => BasisType::Log,
        }
    }

    /// The transaction hash, `None` while the transaction is unsigned, or the log hash.
    pub fn hash(&self) -> Option<Hash> {
        match self {
            Self::Transaction(transaction) => transaction.read().hash(),
            Self::Log(log) => Some(log.read().hash()),
        }
    }

    /// A log costs its transfer nothing; the fee is paid by the emitting transaction.
    pub fn fee(&self) -> ewm_chain::Result<Ether> {
        match self {
            Self::Transaction(transaction) => transaction.read().fee(),
            Self::Log(_) => Ok(Ether::zero()),
        }
    }

    /// Ether moved by the evidence itself, zero for a log.
    pub fn effective_amount_in_ether(&self) -> Ether {
        match self {
            Self::Transaction(transaction) => transaction.read().amount(),
            Self::Log(_) => Ether::zero(),
        }
    }

    pub fn status(&self) -> TransactionStatus {
        match self {
            Self::Transaction(transaction) => transaction.read().status().clone(),
            Self::Log(log) => log.read().status().clone(),
        }
    }

    /// Order by the underlying transactions or logs.
    ///
    /// # Panics
    ///
    /// Transaction and log bases are not comparable; callers sort each kind apart.
    pub fn compare(&self, other: &Basis) -> Ordering {
        match (self, other) {
            (Self::Transaction(this), Self::Transaction(that)) => {
                if this.ptr_eq(that) {
                    return Ordering::Equal;
                }
                this.read().compare(&that.read())
            }
            (Self::Log(this), Self::Log(that)) => {
                if this.ptr_eq(that) {
                    return Ordering::Equal;
                }
                this.read().compare(&that.read())
            }
            _ => panic!(
                "cannot compare a {:?} basis with a {:?} basis",
                self.basis_type(),
                other.basis_type()
            ),
        }
    }
}
