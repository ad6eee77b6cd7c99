// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::Address;
use alloy::primitives::keccak256;
use alloy::signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};
use alloy::signers::{Signature, SignerSync};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// BIP-44 index of the account's primary address, `m/44'/60'/0'/0/0`.
const PRIMARY_ADDRESS_INDEX: u32 = 0;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Address {0} is not managed by this account")]
    UnknownAddress(Address),
    #[error("Nonces of address {0} are exhausted")]
    NonceExhausted(Address),
    #[error("Failed to derive a key from the paper key: {0}")]
    InvalidPaperKey(String),
    #[error("The signing key belongs to {key_address}, not to {address}")]
    KeyMismatch {
        address: Address,
        key_address: Address,
    },
    #[error("Failed to sign: {0}")]
    Signature(#[from] alloy::signers::Error),
}

/// A wallet account: the addresses it manages and the next nonce of each.
///
/// The nonce table is shared by every transfer sent from the account, so handing out
/// a nonce is a single fetch-and-increment under the table's lock.
#[derive(Debug)]
pub struct Account {
    primary_address: Address,
    nonces: Mutex<HashMap<Address, u64>>,
}

impl Account {
    /// Derive the account from its BIP-39 paper key.
    pub fn from_paper_key(paper_key: &str) -> Result<Self, Error> {
        let signer = derive_signer(paper_key)?;
        Ok(Self::from_primary_address(signer.address()))
    }

    pub fn from_primary_address(primary_address: Address) -> Self {
        debug!("Account created for primary address {primary_address:?}");
        Self {
            primary_address,
            nonces: Mutex::new(HashMap::from([(primary_address, 0)])),
        }
    }

    pub fn primary_address(&self) -> Address {
        self.primary_address
    }

    fn nonces(&self) -> MutexGuard<'_, HashMap<Address, u64>> {
        self.nonces.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The nonce the next transaction from `address` will use.
    pub fn address_nonce(&self, address: Address) -> Result<u64, Error> {
        self.nonces()
            .get(&address)
            .copied()
            .ok_or(Error::UnknownAddress(address))
    }

    /// Record a nonce observed for `address`, e.g. its transaction count on chain.
    ///
    /// Without `force` the nonce only ever moves forward.
    pub fn set_address_nonce(
        &self,
        address: Address,
        nonce: u64,
        force: bool,
    ) -> Result<(), Error> {
        let mut nonces = self.nonces();
        let current = nonces
            .get_mut(&address)
            .ok_or(Error::UnknownAddress(address))?;
        if force || nonce > *current {
            debug!("Nonce of {address:?} moved from {current} to {nonce}");
            *current = nonce;
        }
        Ok(())
    }

    /// Hand out the next nonce of `address`.
    pub fn get_then_increment_address_nonce(&self, address: Address) -> Result<u64, Error> {
        let mut nonces = self.nonces();
        let current = nonces.get_mut(&address).ok_or_else(|| {
            error!("Nonce requested for unknown address {address:?}");
            Error::UnknownAddress(address)
        })?;
        let nonce = *current;
        *current = nonce.checked_add(1).ok_or_else(|| {
            error!("Nonces of {address:?} are exhausted");
            Error::NonceExhausted(address)
        })?;
        Ok(nonce)
    }

    /// Sign `bytes` with the key of `address`, derived from the paper key.
    ///
    /// The bytes are hashed with Keccak256 and the signature is recoverable.
    pub fn sign_bytes(
        &self,
        address: Address,
        bytes: &[u8],
        paper_key: &str,
    ) -> Result<Signature, Error> {
        let signer = derive_signer(paper_key)?;
        self.sign_bytes_with_private_key(address, bytes, &signer)
    }

    /// Sign `bytes` with an explicitly supplied key of `address`.
    pub fn sign_bytes_with_private_key(
        &self,
        address: Address,
        bytes: &[u8],
        private_key: &PrivateKeySigner,
    ) -> Result<Signature, Error> {
        if !self.nonces().contains_key(&address) {
            return Err(Error::UnknownAddress(address));
        }
        let key_address = private_key.address();
        if key_address != address {
            error!("Refusing to sign for {address:?} with the key of {key_address:?}");
            return Err(Error::KeyMismatch {
                address,
                key_address,
            });
        }

        let hash = keccak256(bytes);
        let signature = private_key
            .sign_hash_sync(&hash)
            .inspect_err(|err| error!("Error signing {} bytes: {err:?}", bytes.len()))?;
        trace!("Signed hash {hash:?} for {address:?}");
        Ok(signature)
    }
}

fn derive_signer(paper_key: &str) -> Result<PrivateKeySigner, Error> {
    MnemonicBuilder::<English>::default()
        .phrase(paper_key)
        .index(PRIMARY_ADDRESS_INDEX)
        .and_then(|builder| builder.build())
        .map_err(|err| {
            error!("Error deriving key from paper key: {err}");
            Error::InvalidPaperKey(err.to_string())
        })
}
