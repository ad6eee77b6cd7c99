// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::{Address, Calldata, Hash, Shared, TxHash, U256};
use crate::contract::TRANSFER_EVENT_SIGNATURE;
use crate::transaction::TransactionStatus;
use alloy::primitives::keccak256;
use std::cmp::Ordering;

/// A log shared between its owners.
pub type LogRef = Shared<Log>;

/// Locates a log: the transaction that emitted it and its index in that transaction's receipt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogIdentifier {
    pub transaction_hash: TxHash,
    pub log_index: u64,
}

/// The parties and value of an ERC20 `Transfer` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Erc20Transfer {
    pub from: Address,
    pub to: Address,
    pub value: U256,
}

/// An event log emitted by a contract.
#[derive(Clone, Debug)]
pub struct Log {
    address: Address,
    topics: Vec<Hash>,
    data: Calldata,
    identifier: Option<LogIdentifier>,
    status: TransactionStatus,
}

impl Log {
    pub fn new(address: Address, topics: Vec<Hash>, data: Calldata) -> Self {
        Self {
            address,
            topics,
            data,
            identifier: None,
            status: TransactionStatus::Unknown,
        }
    }

    /// Address of the contract that emitted the log.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn topics(&self) -> &[Hash] {
        &self.topics
    }

    pub fn data(&self) -> &Calldata {
        &self.data
    }

    pub fn identifier(&self) -> Option<LogIdentifier> {
        self.identifier
    }

    pub fn set_identifier(&mut self, transaction_hash: TxHash, log_index: u64) {
        self.identifier = Some(LogIdentifier {
            transaction_hash,
            log_index,
        });
    }

    /// Hash of the identifier when known, otherwise of the log content.
    pub fn hash(&self) -> Hash {
        let mut preimage = Vec::new();
        match &self.identifier {
            Some(identifier) => {
                preimage.extend_from_slice(identifier.transaction_hash.as_slice());
                preimage.extend_from_slice(&identifier.log_index.to_be_bytes());
            }
            None => {
                preimage.extend_from_slice(self.address.as_slice());
                for topic in &self.topics {
                    preimage.extend_from_slice(topic.as_slice());
                }
                preimage.extend_from_slice(&self.data);
            }
        }
        keccak256(preimage)
    }

    /// The status of the transaction that emitted the log.
    pub fn status(&self) -> &TransactionStatus {
        &self.status
    }

    pub fn set_status(&mut self, status: TransactionStatus) {
        self.status = status;
    }

    /// Decode the log as an ERC20 `Transfer` event, if it is one.
    pub fn erc20_transfer(&self) -> Option<Erc20Transfer> {
        if self.topics.len() != 3 {
            trace!(
                "Log has {} topics, an ERC20 transfer has 3",
                self.topics.len()
            );
            return None;
        }
        if self.topics[0] != TRANSFER_EVENT_SIGNATURE || self.data.len() != 32 {
            trace!("Log is not an ERC20 transfer event");
            return None;
        }

        Some(Erc20Transfer {
            from: Address::from_slice(&self.topics[1][12..]),
            to: Address::from_slice(&self.topics[2][12..]),
            value: U256::from_be_slice(&self.data),
        })
    }

    /// Included logs first, by position in the chain, then by index within the receipt.
    pub fn compare(&self, other: &Log) -> Ordering {
        let this_index = self.identifier.map(|id| id.log_index);
        let that_index = other.identifier.map(|id| id.log_index);

        match (self.status.block_position(), other.status.block_position()) {
            (Some(this), Some(that)) => this.cmp(&that).then(this_index.cmp(&that_index)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => this_index.cmp(&that_index),
        }
    }
}
