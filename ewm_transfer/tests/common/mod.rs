// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

#![allow(dead_code)]

use ewm_chain::contract::TRANSFER_EVENT_SIGNATURE;
use ewm_chain::utils::dummy_address;
use ewm_chain::{Address, Calldata, Log, LogRef, Token, Transaction, TransactionRef, U256};
use ewm_transfer::{Ether, Gas, GasPrice, TransactionStatus};
use std::sync::Arc;

pub fn bread() -> Arc<Token> {
    Arc::new(Token::new(dummy_address(), "BRD", "Bread", 18))
}

/// A transaction seen on chain, as a transaction tracker would hand it over.
pub fn observed_transaction(nonce: u64, status: TransactionStatus) -> TransactionRef {
    let mut transaction = Transaction::new(
        dummy_address(),
        dummy_address(),
        Ether::from_ether(1),
        GasPrice::from_gwei(2),
        Gas(21_000),
        Calldata::new(),
        Some(nonce),
    );
    transaction.set_status(status);
    TransactionRef::new(transaction)
}

/// An ERC20 `Transfer` event emitted by `token`.
pub fn transfer_event(token: &Token, from: Address, to: Address, value: U256) -> LogRef {
    LogRef::new(Log::new(
        token.address(),
        vec![TRANSFER_EVENT_SIGNATURE, from.into_word(), to.into_word()],
        Calldata::from(value.to_be_bytes::<32>().to_vec()),
    ))
}
