// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::U256;
use crate::error::{Error, Result};
use crate::ether::Ether;
use std::fmt::{self, Display, Formatter};

const WEI_PER_GWEI: u64 = 1_000_000_000;

/// An amount of gas, the unit of computational work a transaction pays for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gas(pub u64);

impl Gas {
    pub const fn zero() -> Self {
        Self(0)
    }

    pub fn amount(self) -> u64 {
        self.0
    }
}

impl From<u64> for Gas {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for Gas {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{} gas", self.0)
    }
}

/// The price paid per unit of gas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GasPrice(Ether);

impl GasPrice {
    pub const fn zero() -> Self {
        Self(Ether::zero())
    }

    pub fn new(ether_per_gas: Ether) -> Self {
        Self(ether_per_gas)
    }

    pub fn from_wei(wei: u64) -> Self {
        Self(Ether::from_u64(wei))
    }

    pub fn from_gwei(gwei: u64) -> Self {
        Self(Ether::from_wei(U256::from(gwei) * U256::from(WEI_PER_GWEI)))
    }

    pub fn ether_per_gas(self) -> Ether {
        self.0
    }

    /// The fee of spending `gas` at this price.
    pub fn fee_for(self, gas: Gas) -> Result<Ether> {
        self.0
            .checked_mul(U256::from(gas.0))
            .ok_or(Error::NumericOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_for_gas() -> Result<()> {
        let price = GasPrice::from_gwei(20);
        assert_eq!(
            Ether::from_u64(420_000_000_000_000),
            price.fee_for(Gas(21_000))?
        );
        assert_eq!(Ether::zero(), GasPrice::zero().fee_for(Gas(21_000))?);
        Ok(())
    }

    #[test]
    fn fee_overflow_is_reported() {
        let price = GasPrice::new(Ether::from_wei(U256::MAX));
        assert_eq!(Err(Error::NumericOverflow), price.fee_for(Gas(2)));
    }
}
