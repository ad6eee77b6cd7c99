// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::error::Result;
use crate::ether::Ether;
use crate::gas::{Gas, GasPrice};
use crate::token::{Token, TokenQuantity};
use std::sync::Arc;

/// What a transfer moves: ether, or a quantity of some token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Amount {
    Ether(Ether),
    Token(TokenQuantity),
}

impl Amount {
    pub fn ether(ether: Ether) -> Self {
        Self::Ether(ether)
    }

    pub fn token(token: Arc<Token>, value: crate::common::U256) -> Self {
        Self::Token(TokenQuantity::new(token, value))
    }

    /// The token moved, if this is a token amount.
    pub fn get_token(&self) -> Option<&Arc<Token>> {
        match self {
            Self::Ether(_) => None,
            Self::Token(quantity) => Some(quantity.token()),
        }
    }
}

/// How the network fee of a transfer is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeeBasis {
    /// The transfer itself carries no fee, e.g. a token movement seen in a log.
    #[default]
    None,
    Gas { limit: Gas, price: GasPrice },
}

impl FeeBasis {
    pub fn gas(limit: Gas, price: GasPrice) -> Self {
        Self::Gas { limit, price }
    }

    /// Zero when there is no gas basis.
    pub fn gas_limit(&self) -> Gas {
        match self {
            Self::None => Gas::zero(),
            Self::Gas { limit, .. } => *limit,
        }
    }

    /// Zero when there is no gas basis.
    pub fn gas_price(&self) -> GasPrice {
        match self {
            Self::None => GasPrice::zero(),
            Self::Gas { price, .. } => *price,
        }
    }

    /// Maximum fee, gas limit times price.
    pub fn fee(&self) -> Result<Ether> {
        match self {
            Self::None => Ok(Ether::zero()),
            Self::Gas { limit, price } => price.fee_for(*limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::U256;
    use crate::utils::dummy_address;

    #[test]
    fn token_only_present_for_token_amounts() {
        let token = Arc::new(Token::new(dummy_address(), "BRD", "Bread", 18));

        assert!(Amount::ether(Ether::from_ether(1)).get_token().is_none());
        assert_eq!(
            Some(&token),
            Amount::token(Arc::clone(&token), U256::from(5)).get_token()
        );
    }

    #[test]
    fn fee_basis_none_has_zero_fee() -> Result<()> {
        let none = FeeBasis::None;
        assert_eq!(Gas::zero(), none.gas_limit());
        assert_eq!(GasPrice::zero(), none.gas_price());
        assert_eq!(Ether::zero(), none.fee()?);

        let gas = FeeBasis::gas(Gas(21_000), GasPrice::from_wei(2));
        assert_eq!(Ether::from_u64(42_000), gas.fee()?);
        Ok(())
    }
}
