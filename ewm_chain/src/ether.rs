// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::U256;
use crate::error::{Error, Result};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Decimal places between ether and wei
const ETHER_TO_WEI_POWER_OF_10_CONVERSION: u64 = 18;
/// The conversion from ether to wei
const ETHER_TO_WEI_CONVERSION: u64 = 1_000_000_000_000_000_000;

/// An amount of ether, held in wei. 10^18 wei = 1 ether.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ether(U256);

impl Ether {
    /// Type safe representation of zero ether.
    pub const fn zero() -> Self {
        Self(U256::ZERO)
    }

    /// New value from an amount of wei.
    pub fn from_wei(value: U256) -> Self {
        Self(value)
    }

    /// New value from a number of wei.
    pub fn from_u64(value: u64) -> Self {
        Self(U256::from(value))
    }

    /// New value from a number of wei.
    pub fn from_u128(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// New value from a whole number of ether.
    pub fn from_ether(value: u64) -> Self {
        Self(U256::from(value) * U256::from(ETHER_TO_WEI_CONVERSION))
    }

    /// Total ether expressed in wei.
    pub fn as_wei(self) -> U256 {
        self.0
    }

    /// Computes `self + rhs`, returning `None` if overflow occurred.
    pub fn checked_add(self, rhs: Ether) -> Option<Ether> {
        self.0.checked_add(rhs.0).map(Self::from_wei)
    }

    /// Computes `self - rhs`, returning `None` if overflow occurred.
    pub fn checked_sub(self, rhs: Ether) -> Option<Ether> {
        self.0.checked_sub(rhs.0).map(Self::from_wei)
    }

    /// Computes `self * rhs`, returning `None` if overflow occurred.
    pub fn checked_mul(self, rhs: U256) -> Option<Ether> {
        self.0.checked_mul(rhs).map(Self::from_wei)
    }
}

impl From<u64> for Ether {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for Ether {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl FromStr for Ether {
    type Err = Error;

    /// Parses a decimal amount of ether, e.g. `"1.5"`.
    fn from_str(value_str: &str) -> Result<Self> {
        let mut itr = value_str.splitn(2, '.');
        let converted_units = {
            let units = itr
                .next()
                .and_then(|s| s.parse::<U256>().ok())
                .ok_or_else(|| Error::FailedToParseEther("Can't parse ether units".to_string()))?;

            units
                .checked_mul(U256::from(ETHER_TO_WEI_CONVERSION))
                .ok_or(Error::ExcessiveValue)?
        };

        let remainder = {
            let remainder_str = itr.next().unwrap_or_default().trim_end_matches('0');

            if remainder_str.is_empty() {
                U256::ZERO
            } else {
                let parsed_remainder = remainder_str.parse::<U256>().map_err(|_| {
                    Error::FailedToParseEther("Can't parse ether remainder".to_string())
                })?;

                let remainder_conversion = ETHER_TO_WEI_POWER_OF_10_CONVERSION
                    .checked_sub(remainder_str.len() as u64)
                    .ok_or(Error::LossOfPrecision)?;
                parsed_remainder * U256::from(10).pow(U256::from(remainder_conversion))
            }
        };

        converted_units
            .checked_add(remainder)
            .map(Self)
            .ok_or(Error::ExcessiveValue)
    }
}

impl Display for Ether {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let unit = self.0 / U256::from(ETHER_TO_WEI_CONVERSION);
        let remainder = self.0 % U256::from(ETHER_TO_WEI_CONVERSION);
        write!(formatter, "{unit}.{remainder:018}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() -> Result<()> {
        assert_eq!(Ether::from_u64(0), Ether::from_str("0")?);
        assert_eq!(Ether::from_u64(0), Ether::from_str("0.")?);
        assert_eq!(Ether::from_u64(0), Ether::from_str("0.0")?);
        assert_eq!(Ether::from_u64(1), Ether::from_str("0.000000000000000001")?);
        assert_eq!(Ether::from_ether(1), Ether::from_str("1")?);
        assert_eq!(Ether::from_ether(1), Ether::from_str("1.0")?);
        assert_eq!(Ether::from_ether(1), Ether::from_str("1.")?);
        assert_eq!(
            Ether::from_u64(1_100_000_000_000_000_000),
            Ether::from_str("1.1")?
        );
        assert_eq!(
            Ether::from_u64(1_500_000_000_000_000_000),
            Ether::from_str("1.5")?
        );
        assert_eq!(
            Ether::from_u128(4_294_967_295_999_999_999_000_000_000u128),
            Ether::from_str("4294967295.9999999990000")?,
        );

        assert_eq!(
            Err(Error::FailedToParseEther(
                "Can't parse ether units".to_string()
            )),
            Ether::from_str("a")
        );
        assert_eq!(
            Err(Error::FailedToParseEther(
                "Can't parse ether remainder".to_string()
            )),
            Ether::from_str("0.0.0")
        );
        assert_eq!(
            Err(Error::FailedToParseEther(
                "Can't parse ether remainder".to_string()
            )),
            Ether::from_str("0.a")
        );
        assert_eq!(
            Err(Error::ExcessiveValue),
            Ether::from_str(&U256::MAX.to_string())
        );
        assert_eq!(
            Err(Error::LossOfPrecision),
            Ether::from_str("0.0000000000000000001")
        );
        Ok(())
    }

    #[test]
    fn display() {
        assert_eq!("0.000000000000000000", format!("{}", Ether::zero()));
        assert_eq!("0.000000000000000001", format!("{}", Ether::from_u64(1)));
        assert_eq!("1.000000000000000000", format!("{}", Ether::from_ether(1)));
        assert_eq!(
            "1.500000000000000000",
            format!("{}", Ether::from_u64(1_500_000_000_000_000_000))
        );
    }

    #[test]
    fn checked_arithmetic() {
        assert_eq!(
            Some(Ether::from_u64(3)),
            Ether::from_u64(1).checked_add(Ether::from_u64(2))
        );
        assert_eq!(None, Ether::from_u64(1).checked_sub(Ether::from_u64(2)));
        assert_eq!(
            None,
            Ether::from_wei(U256::MAX).checked_mul(U256::from(2))
        );
    }
}
