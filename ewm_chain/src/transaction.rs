// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::{Address, Calldata, Hash, Shared, TxHash};
use crate::error::{Error, Result};
use crate::ether::Ether;
use crate::gas::{Gas, GasPrice};
use crate::network::Network;
use alloy::consensus::{SignableTransaction, TxEnvelope, TxLegacy};
use alloy::eips::eip2718::Encodable2718;
use alloy::primitives::{keccak256, TxKind};
use alloy::signers::Signature;
use std::cmp::Ordering;

/// A transaction shared between its owners, e.g. a transaction list and a transfer.
pub type TransactionRef = Shared<Transaction>;

/// Where a transaction is in its journey onto the chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TransactionStatus {
    #[default]
    Unknown,
    Queued,
    Pending,
    Included {
        gas_used: Gas,
        block_hash: Hash,
        block_number: u64,
        transaction_index: u64,
    },
    Errored {
        reason: String,
    },
}

impl TransactionStatus {
    pub fn included(
        gas_used: Gas,
        block_hash: Hash,
        block_number: u64,
        transaction_index: u64,
    ) -> Self {
        Self::Included {
            gas_used,
            block_hash,
            block_number,
            transaction_index,
        }
    }

    pub fn errored(reason: &str) -> Self {
        Self::Errored {
            reason: reason.to_string(),
        }
    }

    /// Block number and index within the block, when included.
    pub fn block_position(&self) -> Option<(u64, u64)> {
        match self {
            Self::Included {
                block_number,
                transaction_index,
                ..
            } => Some((*block_number, *transaction_index)),
            _ => None,
        }
    }
}

/// The shape a transaction is serialized in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RlpType {
    /// The payload that gets hashed and signed.
    Unsigned,
    /// The payload that gets submitted to the network.
    Signed,
}

#[derive(Clone, Debug)]
struct AttachedSignature {
    signature: Signature,
    chain_id: u64,
    hash: TxHash,
}

/// An EIP-155 (legacy) transaction, built locally or observed on chain.
#[derive(Clone, Debug)]
pub struct Transaction {
    source: Address,
    target: Address,
    amount: Ether,
    gas_price: GasPrice,
    gas_limit: Gas,
    data: Calldata,
    nonce: Option<u64>,
    signature: Option<AttachedSignature>,
    status: TransactionStatus,
}

impl Transaction {
    /// A transaction with `nonce` of `None` still needs one assigned before it can be signed.
    pub fn new(
        source: Address,
        target: Address,
        amount: Ether,
        gas_price: GasPrice,
        gas_limit: Gas,
        data: Calldata,
        nonce: Option<u64>,
    ) -> Self {
        Self {
            source,
            target,
            amount,
            gas_price,
            gas_limit,
            data,
            nonce,
            signature: None,
            status: TransactionStatus::Unknown,
        }
    }

    pub fn source_address(&self) -> Address {
        self.source
    }

    pub fn target_address(&self) -> Address {
        self.target
    }

    /// Ether moved by the transaction.
    pub fn amount(&self) -> Ether {
        self.amount
    }

    pub fn gas_price(&self) -> GasPrice {
        self.gas_price
    }

    pub fn gas_limit(&self) -> Gas {
        self.gas_limit
    }

    pub fn data(&self) -> &Calldata {
        &self.data
    }

    pub fn nonce(&self) -> Option<u64> {
        self.nonce
    }

    /// Assigning a different nonce drops any attached signature, which no longer covers
    /// the payload.
    pub fn set_nonce(&mut self, nonce: u64) {
        if self.nonce != Some(nonce) && self.signature.take().is_some() {
            debug!("Nonce changed to {nonce}, dropping the stale signature");
        }
        self.nonce = Some(nonce);
    }

    /// The fee paid: gas used once included, otherwise the gas limit, times the gas price.
    pub fn fee(&self) -> Result<Ether> {
        let gas = match &self.status {
            TransactionStatus::Included { gas_used, .. } => *gas_used,
            _ => self.gas_limit,
        };
        self.gas_price.fee_for(gas).inspect_err(|_| {
            error!(
                "Fee overflow for {gas} at {} per gas",
                self.gas_price.ether_per_gas()
            )
        })
    }

    pub fn status(&self) -> &TransactionStatus {
        &self.status
    }

    pub fn set_status(&mut self, status: TransactionStatus) {
        self.status = status;
    }

    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref().map(|attached| &attached.signature)
    }

    /// Hash of the signed transaction, `None` until a signature is attached.
    pub fn hash(&self) -> Option<TxHash> {
        self.signature.as_ref().map(|attached| attached.hash)
    }

    fn legacy(&self, chain_id: u64) -> Result<TxLegacy> {
        let nonce = self.nonce.ok_or(Error::NonceNotAssigned)?;
        let gas_price_wei = self.gas_price.ether_per_gas().as_wei();
        let gas_price = u128::try_from(gas_price_wei)
            .map_err(|_| Error::GasPriceTooLarge(gas_price_wei))?;

        Ok(TxLegacy {
            chain_id: Some(chain_id),
            nonce,
            gas_price,
            gas_limit: self.gas_limit.amount(),
            to: TxKind::Call(self.target),
            value: self.amount.as_wei(),
            input: self.data.clone(),
        })
    }

    /// RLP encode the transaction for `network`.
    ///
    /// The signed shape is encoded for the chain the signature was made for.
    pub fn rlp_encode(&self, network: &Network, rlp_type: RlpType) -> Result<Vec<u8>> {
        match rlp_type {
            RlpType::Unsigned => {
                let encoded = self.legacy(network.chain_id())?.encoded_for_signing();
                trace!(
                    "Encoded unsigned transaction for {network} in {} bytes",
                    encoded.len()
                );
                Ok(encoded)
            }
            RlpType::Signed => {
                let attached = self
                    .signature
                    .as_ref()
                    .ok_or(Error::TransactionNotSigned)?;
                if attached.chain_id != network.chain_id() {
                    warn!(
                        "Encoding transaction signed for chain {} while {network} was requested",
                        attached.chain_id
                    );
                }
                self.encode_signed(attached.chain_id, attached.signature)
            }
        }
    }

    fn encode_signed(&self, chain_id: u64, signature: Signature) -> Result<Vec<u8>> {
        let signed = self.legacy(chain_id)?.into_signed(signature);
        Ok(TxEnvelope::Legacy(signed).encoded_2718())
    }

    /// Attach a signature over the unsigned encoding for `network`, turning this into a
    /// transaction that can be submitted.
    pub fn sign(&mut self, network: &Network, signature: Signature) -> Result<()> {
        let chain_id = network.chain_id();
        let hash = keccak256(self.encode_signed(chain_id, signature)?);
        debug!("Transaction from {:?} signed for {network} with hash {hash:?}", self.source);

        self.signature = Some(AttachedSignature {
            signature,
            chain_id,
            hash,
        });
        Ok(())
    }

    /// Included transactions come first, ordered by position in the chain; the rest are
    /// ordered by nonce, unassigned last.
    pub fn compare(&self, other: &Transaction) -> Ordering {
        match (self.status.block_position(), other.status.block_position()) {
            (Some(this), Some(that)) => this.cmp(&that),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self
                .nonce
                .unwrap_or(u64::MAX)
                .cmp(&other.nonce.unwrap_or(u64::MAX)),
        }
    }
}
