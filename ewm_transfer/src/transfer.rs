// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::basis::Basis;
use crate::status::{ErrorReason, TransferStatus, TransferStatusType};
use ewm_chain::{
    Address, Amount, Ether, FeeBasis, Gas, Hash, LogRef, Token, TransactionRef, EMPTY_ADDRESS,
    U256,
};
use std::cmp::Ordering;
use std::sync::Arc;

/// A movement of ether or of a token, as the wallet presents it.
///
/// A transfer is backed either by a transaction or by a log (its [`Basis`]). Transfers
/// the user sends also own the transaction built to carry them, the originating
/// transaction, which is signed here and later becomes the basis.
///
/// Dropping a transfer releases its own handles only; a basis transaction or log
/// tracked elsewhere lives on.
#[derive(Debug)]
pub struct Transfer {
    source_address: Address,
    target_address: Address,
    amount: Amount,
    fee_basis: FeeBasis,
    gas_estimate: Gas,
    pub(crate) originating_transaction: Option<TransactionRef>,
    basis: Option<Basis>,
    status: TransferStatus,
}

impl Transfer {
    fn detailed(
        source_address: Address,
        target_address: Address,
        amount: Amount,
        fee_basis: FeeBasis,
        originating_transaction: Option<TransactionRef>,
    ) -> Self {
        Self {
            source_address,
            target_address,
            amount,
            fee_basis,
            gas_estimate: Gas::zero(),
            originating_transaction,
            basis: None,
            status: TransferStatus::default(),
        }
    }

    /// A transfer the user wants to send.
    ///
    /// Its originating transaction is built immediately. It has no basis until
    /// [`Transfer::associate_originating_transaction`] is called after submission.
    pub fn new(
        source_address: Address,
        target_address: Address,
        amount: Amount,
        fee_basis: FeeBasis,
    ) -> Self {
        let mut transfer = Self::detailed(source_address, target_address, amount, fee_basis, None);
        transfer.provide_originating_transaction();
        transfer
    }

    /// An ether transfer observed as a transaction.
    pub fn from_transaction(transaction: TransactionRef) -> Self {
        let (mut transfer, status) = {
            let tx = transaction.read();
            let transfer = Self::detailed(
                tx.source_address(),
                tx.target_address(),
                Amount::Ether(tx.amount()),
                FeeBasis::gas(tx.gas_limit(), tx.gas_price()),
                None,
            );
            (transfer, TransferStatus::from_transaction_status(tx.status()))
        };
        transfer.basis = Some(Basis::Transaction(transaction));
        transfer.status = status;
        transfer
    }

    /// A token transfer observed as a log.
    ///
    /// When the log is an ERC20 `Transfer` event its parties and quantity are decoded;
    /// otherwise they stay empty and zero for the caller to fill in.
    pub fn from_log(log: LogRef, token: Arc<Token>) -> Self {
        let (mut transfer, status) = {
            let event = log.read();
            let (source, target, value) = match event.erc20_transfer() {
                Some(erc20) => (erc20.from, erc20.to, erc20.value),
                None => {
                    debug!(
                        "Log {:?} is not an ERC20 transfer, keeping empty parties",
                        event.hash()
                    );
                    (EMPTY_ADDRESS, EMPTY_ADDRESS, U256::ZERO)
                }
            };
            let transfer = Self::detailed(
                source,
                target,
                Amount::token(token, value),
                FeeBasis::None,
                None,
            );
            (transfer, TransferStatus::from_transaction_status(event.status()))
        };
        transfer.basis = Some(Basis::Log(log));
        transfer.status = status;
        transfer
    }

    pub fn source_address(&self) -> Address {
        self.source_address
    }

    pub fn target_address(&self) -> Address {
        self.target_address
    }

    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    /// The token moved, `None` for ether.
    pub fn token(&self) -> Option<&Arc<Token>> {
        self.amount.get_token()
    }

    pub fn fee_basis(&self) -> FeeBasis {
        self.fee_basis
    }

    /// Change what is sent, rebuilding the originating transaction.
    pub fn set_amount(&mut self, amount: Amount) {
        self.amount = amount;
        self.resynthesize();
    }

    /// Change the fee, rebuilding the originating transaction.
    pub fn set_fee_basis(&mut self, fee_basis: FeeBasis) {
        self.fee_basis = fee_basis;
        self.resynthesize();
    }

    /// Rebuild the originating transaction of a send intent.
    ///
    /// A basis that is the replaced transaction moves to the rebuilt one, so the old
    /// transaction is released.
    fn resynthesize(&mut self) {
        let Some(previous) = self.originating_transaction.clone() else {
            return;
        };
        self.provide_originating_transaction();

        if let (Some(Basis::Transaction(basis)), Some(rebuilt)) =
            (&mut self.basis, &self.originating_transaction)
        {
            if basis.ptr_eq(&previous) {
                debug!("Basis follows the rebuilt originating transaction");
                *basis = rebuilt.clone();
            }
        }
    }

    pub fn gas_estimate(&self) -> Gas {
        self.gas_estimate
    }

    pub fn set_gas_estimate(&mut self, gas_estimate: Gas) {
        self.gas_estimate = gas_estimate;
    }

    pub fn originating_transaction(&self) -> Option<&TransactionRef> {
        self.originating_transaction.as_ref()
    }

    pub fn has_basis(&self) -> bool {
        self.basis.is_some()
    }

    /// # Panics
    ///
    /// A transfer built from a send intent has no basis until it is associated with its
    /// originating transaction.
    pub fn basis(&self) -> &Basis {
        match &self.basis {
            Some(basis) => basis,
            None => panic!("transfer basis read before the transfer was submitted"),
        }
    }

    /// The basis transaction, `None` when the transfer is backed by a log or not yet
    /// associated.
    pub fn basis_transaction(&self) -> Option<&TransactionRef> {
        match &self.basis {
            Some(Basis::Transaction(transaction)) => Some(transaction),
            _ => None,
        }
    }

    /// The basis log, `None` when the transfer is backed by a transaction.
    pub fn basis_log(&self) -> Option<&LogRef> {
        match &self.basis {
            Some(Basis::Log(log)) => Some(log),
            _ => None,
        }
    }

    /// Make the submitted originating transaction the basis of this transfer.
    ///
    /// An existing basis is kept, since a basis never changes once set.
    ///
    /// # Panics
    ///
    /// If the transfer has no originating transaction.
    pub fn associate_originating_transaction(&mut self) {
        let originating = match &self.originating_transaction {
            Some(originating) => originating.clone(),
            None => panic!("transfer has no originating transaction to associate"),
        };
        if self.basis.is_some() {
            debug!("Transfer basis already set, keeping it");
            return;
        }
        self.basis = Some(Basis::Transaction(originating));
    }

    /// Hash of the basis, `None` while its transaction is unsigned.
    ///
    /// # Panics
    ///
    /// See [`Transfer::basis`].
    pub fn hash(&self) -> Option<Hash> {
        self.basis().hash()
    }

    /// Nonce of the originating transaction, `None` when unassigned or when there is
    /// no originating transaction.
    pub fn nonce(&self) -> Option<u64> {
        self.originating_transaction
            .as_ref()
            .and_then(|transaction| transaction.read().nonce())
    }

    /// # Panics
    ///
    /// See [`Transfer::basis`].
    pub fn fee(&self) -> ewm_chain::Result<Ether> {
        self.basis().fee()
    }

    /// # Panics
    ///
    /// See [`Transfer::basis`].
    pub fn effective_amount_in_ether(&self) -> Ether {
        self.basis().effective_amount_in_ether()
    }

    pub fn status(&self) -> &TransferStatus {
        &self.status
    }

    /// Replace the status as a whole.
    pub fn set_status(&mut self, status: TransferStatus) {
        match &status {
            TransferStatus::Included(inclusion) => debug!(
                "Transfer included in block {} using {:?}",
                inclusion.block_number(),
                status.gas_used()
            ),
            other => debug!("Transfer status now {:?}", other.status_type()),
        }
        self.status = status;
    }

    /// Re-derive the status from what the basis currently reports.
    ///
    /// # Panics
    ///
    /// See [`Transfer::basis`].
    pub fn update_status_from_basis(&mut self) {
        let status = TransferStatus::from_transaction_status(&self.basis().status());
        self.set_status(status);
    }

    pub fn has_status(&self, status_type: TransferStatusType) -> bool {
        self.status.status_type() == status_type
    }

    pub fn has_status_one_of(
        &self,
        status_type: TransferStatusType,
        other_status_type: TransferStatusType,
    ) -> bool {
        self.has_status(status_type) || self.has_status(other_status_type)
    }

    /// The block number, if the transfer is included.
    pub fn extract_included(&self) -> Option<u64> {
        match &self.status {
            TransferStatus::Included(inclusion) => Some(inclusion.block_number()),
            _ => None,
        }
    }

    /// A copy of the failure reason, if the transfer errored.
    pub fn extract_errored(&self) -> Option<String> {
        self.error_reason().map(|reason| reason.as_str().to_string())
    }

    /// The failure reason, telling a provisional reason apart from a final one.
    pub fn error_reason(&self) -> Option<&ErrorReason> {
        match &self.status {
            TransferStatus::Errored(reason) => Some(reason),
            _ => None,
        }
    }

    /// Order transfers backed by the same kind of basis.
    ///
    /// # Panics
    ///
    /// If the bases are of different kinds, or either transfer has no basis yet.
    pub fn compare(&self, other: &Transfer) -> Ordering {
        self.basis().compare(other.basis())
    }
}
