// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::error::{Result, SignError};
use crate::transfer::Transfer;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signature;
use ewm_chain::{account, Account, Address, Network, RlpType};

impl Transfer {
    /// Sign the originating transaction with the key of `address` derived from the
    /// account's paper key.
    ///
    /// A transaction without a nonce takes the next one of `address` from the account.
    /// A nonce taken this way stays on the transaction even if a later step fails, so a
    /// retry does not consume another one. The signature is only attached on success.
    ///
    /// # Panics
    ///
    /// If the transfer has no originating transaction, i.e. it was built from something
    /// observed on chain.
    pub fn sign(
        &mut self,
        network: &Network,
        account: &Account,
        address: Address,
        paper_key: &str,
    ) -> Result<()> {
        self.sign_with(network, account, address, |bytes| {
            account.sign_bytes(address, bytes, paper_key)
        })
    }

    /// As [`Transfer::sign`], with an explicitly supplied key.
    pub fn sign_with_key(
        &mut self,
        network: &Network,
        account: &Account,
        address: Address,
        private_key: &PrivateKeySigner,
    ) -> Result<()> {
        self.sign_with(network, account, address, |bytes| {
            account.sign_bytes_with_private_key(address, bytes, private_key)
        })
    }

    fn sign_with<F>(
        &mut self,
        network: &Network,
        account: &Account,
        address: Address,
        sign_bytes: F,
    ) -> Result<()>
    where
        F: FnOnce(&[u8]) -> std::result::Result<Signature, account::Error>,
    {
        let originating = match &self.originating_transaction {
            Some(originating) => originating,
            None => panic!("only a transfer with an originating transaction can be signed"),
        };
        let mut transaction = originating.write();

        if transaction.nonce().is_none() {
            let nonce = account
                .get_then_increment_address_nonce(address)
                .inspect_err(|err| error!("Error assigning a nonce for {address:?}: {err}"))
                .map_err(SignError::Nonce)?;
            transaction.set_nonce(nonce);
        }

        let signature = {
            let unsigned = transaction
                .rlp_encode(network, RlpType::Unsigned)
                .inspect_err(|err| error!("Error encoding transaction for {network}: {err}"))
                .map_err(SignError::Serialization)?;
            sign_bytes(&unsigned)
                .inspect_err(|err| error!("Error signing transaction for {address:?}: {err}"))
                .map_err(SignError::Signing)?
        };

        transaction
            .sign(network, signature)
            .inspect_err(|err| error!("Error attaching signature on {network}: {err}"))
            .map_err(SignError::Serialization)?;
        debug!(
            "Transfer from {address:?} signed with nonce {:?} on {network}",
            transaction.nonce()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SignStage;
    use alloy::primitives::keccak256;
    use assert_matches::assert_matches;
    use ewm_chain::utils::dummy_address;
    use ewm_chain::{Amount, Ether, FeeBasis, Gas, GasPrice};

    fn send_intent(source: Address) -> Transfer {
        Transfer::new(
            source,
            dummy_address(),
            Amount::ether(Ether::from_u64(1_000)),
            FeeBasis::gas(Gas(21_000), GasPrice::from_gwei(1)),
        )
    }

    #[test]
    fn signing_assigns_the_nonce_once() -> eyre::Result<()> {
        let key = PrivateKeySigner::random();
        let address = key.address();
        let account = Account::from_primary_address(address);
        account.set_address_nonce(address, 3, false)?;
        let mut transfer = send_intent(address);

        transfer.sign_with_key(&Network::Mainnet, &account, address, &key)?;
        let first_hash = transfer.originating_transaction().and_then(|tx| tx.read().hash());
        assert_eq!(Some(3), transfer.nonce());
        assert!(first_hash.is_some());

        transfer.sign_with_key(&Network::Mainnet, &account, address, &key)?;
        assert_eq!(Some(3), transfer.nonce());
        assert_eq!(4, account.address_nonce(address)?);
        assert_eq!(
            first_hash,
            transfer.originating_transaction().and_then(|tx| tx.read().hash())
        );
        Ok(())
    }

    #[test]
    fn signature_recovers_to_the_sender() -> eyre::Result<()> {
        let key = PrivateKeySigner::random();
        let address = key.address();
        let account = Account::from_primary_address(address);
        let mut transfer = send_intent(address);

        transfer.sign_with_key(&Network::Sepolia, &account, address, &key)?;

        let Some(originating) = transfer.originating_transaction() else {
            panic!("a send intent has an originating transaction");
        };
        let tx = originating.read();
        let unsigned = tx.rlp_encode(&Network::Sepolia, RlpType::Unsigned)?;
        let Some(signature) = tx.signature() else {
            panic!("a signed transaction carries its signature");
        };
        assert_eq!(
            address,
            signature.recover_address_from_prehash(&keccak256(unsigned))?
        );
        Ok(())
    }

    #[test]
    fn unknown_address_fails_at_the_nonce_stage() {
        let key = PrivateKeySigner::random();
        let account = Account::from_primary_address(dummy_address());
        let mut transfer = send_intent(key.address());

        let result = transfer.sign_with_key(&Network::Mainnet, &account, key.address(), &key);
        assert_matches!(&result, Err(SignError::Nonce(account::Error::UnknownAddress(_))));
        assert_matches!(result.map_err(|err| err.stage()), Err(SignStage::Nonce));
        assert_eq!(None, transfer.nonce());
    }

    #[test]
    fn failed_signing_keeps_the_nonce_and_leaves_the_transaction_unsigned() -> eyre::Result<()> {
        let key = PrivateKeySigner::random();
        let address = key.address();
        let account = Account::from_primary_address(address);
        let mut transfer = send_intent(address);

        let wrong_key = PrivateKeySigner::random();
        let result = transfer.sign_with_key(&Network::Mainnet, &account, address, &wrong_key);
        assert_matches!(&result, Err(SignError::Signing(account::Error::KeyMismatch { .. })));
        assert_eq!(Some(0), transfer.nonce());
        assert_eq!(
            Some(false),
            transfer.originating_transaction().map(|tx| tx.read().is_signed())
        );

        transfer.sign_with_key(&Network::Mainnet, &account, address, &key)?;
        assert_eq!(Some(0), transfer.nonce());
        assert_eq!(1, account.address_nonce(address)?);
        Ok(())
    }

    #[test]
    fn oversized_gas_price_fails_at_serialization() -> eyre::Result<()> {
        let key = PrivateKeySigner::random();
        let address = key.address();
        let account = Account::from_primary_address(address);
        let mut transfer = Transfer::new(
            address,
            dummy_address(),
            Amount::ether(Ether::from_u64(1)),
            FeeBasis::gas(
                Gas(21_000),
                GasPrice::new(Ether::from_wei(ewm_chain::U256::MAX)),
            ),
        );

        let result = transfer.sign_with_key(&Network::Mainnet, &account, address, &key);
        assert_matches!(
            result,
            Err(SignError::Serialization(ewm_chain::Error::GasPriceTooLarge(_)))
        );
        assert_eq!(Some(0), transfer.nonce());
        Ok(())
    }

    #[test]
    fn paper_key_signing() -> eyre::Result<()> {
        let paper_key = "test test test test test test test test test test test junk";
        let account = Account::from_paper_key(paper_key)?;
        let address = account.primary_address();
        let mut transfer = send_intent(address);

        transfer.sign(&Network::ArbitrumOne, &account, address, paper_key)?;
        assert!(transfer
            .originating_transaction()
            .is_some_and(|tx| tx.read().is_signed()));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "originating transaction")]
    fn observed_transfers_cannot_be_signed() {
        let key = PrivateKeySigner::random();
        let account = Account::from_primary_address(key.address());
        let mut transfer = Transfer::from_log(
            ewm_chain::LogRef::new(ewm_chain::Log::new(
                dummy_address(),
                vec![],
                ewm_chain::Calldata::new(),
            )),
            std::sync::Arc::new(ewm_chain::Token::new(dummy_address(), "BRD", "Bread", 18)),
        );
        let _ = transfer.sign_with_key(&Network::Mainnet, &account, key.address(), &key);
    }
}
