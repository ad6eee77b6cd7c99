// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::{Address, U256};
use crate::gas::{Gas, GasPrice};
use std::sync::Arc;

/// Gas limit used for ERC20 transfers when the token does not specify one.
pub const DEFAULT_TOKEN_GAS_LIMIT: Gas = Gas(92_000);

/// An ERC20 token contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    address: Address,
    symbol: String,
    name: String,
    decimals: u8,
    gas_limit: Gas,
    gas_price: GasPrice,
}

impl Token {
    pub fn new(address: Address, symbol: &str, name: &str, decimals: u8) -> Self {
        Self {
            address,
            symbol: symbol.to_string(),
            name: name.to_string(),
            decimals,
            gas_limit: DEFAULT_TOKEN_GAS_LIMIT,
            gas_price: GasPrice::zero(),
        }
    }

    /// Override the gas used for transfers that carry no explicit fee.
    pub fn with_default_fee(mut self, gas_limit: Gas, gas_price: GasPrice) -> Self {
        self.gas_limit = gas_limit;
        self.gas_price = gas_price;
        self
    }

    /// Address of the token contract.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn gas_limit(&self) -> Gas {
        self.gas_limit
    }

    pub fn gas_price(&self) -> GasPrice {
        self.gas_price
    }
}

/// A raw quantity of some token, in the token's smallest unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenQuantity {
    token: Arc<Token>,
    value: U256,
}

impl TokenQuantity {
    pub fn new(token: Arc<Token>, value: U256) -> Self {
        Self { token, value }
    }

    pub fn token(&self) -> &Arc<Token> {
        &self.token
    }

    /// The quantity as the integer the contract works with.
    pub fn value(&self) -> U256 {
        self.value
    }
}
