// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::transfer::Transfer;
use ewm_chain::contract::encode_transfer_call;
use ewm_chain::{
    Amount, Calldata, Ether, FeeBasis, Gas, GasPrice, Transaction, TransactionRef,
};

/// Gas of a plain ether transfer.
pub const ETHER_TRANSFER_GAS_LIMIT: Gas = Gas(21_000);

impl Transfer {
    /// Build the transaction that carries this transfer, replacing any earlier one.
    ///
    /// Ether goes straight to the target. A token amount becomes an ERC20 `transfer`
    /// call to the token contract that moves no ether itself. A nonce already assigned
    /// to the replaced transaction is kept.
    pub(crate) fn provide_originating_transaction(&mut self) {
        let (gas_limit, gas_price) = self.originating_gas();
        let (target, amount, data) = match self.amount() {
            Amount::Ether(ether) => (self.target_address(), *ether, Calldata::new()),
            Amount::Token(quantity) => (
                quantity.token().address(),
                Ether::zero(),
                encode_transfer_call(self.target_address(), quantity.value()),
            ),
        };
        let nonce = self.nonce();

        let transaction = Transaction::new(
            self.source_address(),
            target,
            amount,
            gas_price,
            gas_limit,
            data,
            nonce,
        );
        trace!(
            "Originating transaction to {target:?} for {amount} ether using {gas_limit} gas, nonce {nonce:?}"
        );
        self.originating_transaction = Some(TransactionRef::new(transaction));
    }

    fn originating_gas(&self) -> (Gas, GasPrice) {
        match (self.fee_basis(), self.amount()) {
            (FeeBasis::Gas { limit, price }, _) => (limit, price),
            (FeeBasis::None, Amount::Token(quantity)) => {
                let token = quantity.token();
                (token.gas_limit(), token.gas_price())
            }
            (FeeBasis::None, Amount::Ether(_)) => (ETHER_TRANSFER_GAS_LIMIT, GasPrice::zero()),
        }
    }
}
