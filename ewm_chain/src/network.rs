// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use std::env;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// environment variable naming a known EVM network
pub const EVM_NETWORK: &str = "EVM_NETWORK";
const EVM_NETWORK_BUILD_TIME_VAL: Option<&str> = option_env!("EVM_NETWORK");
/// environment variable to connect to a custom EVM network
pub const EVM_CHAIN_ID: &str = "EVM_CHAIN_ID";
const EVM_CHAIN_ID_BUILD_TIME_VAL: Option<&str> = option_env!("EVM_CHAIN_ID");
pub const EVM_NETWORK_NAME: &str = "EVM_NETWORK_NAME";

const MAINNET_CHAIN_ID: u64 = 1;
const SEPOLIA_CHAIN_ID: u64 = 11_155_111;
const ARBITRUM_ONE_CHAIN_ID: u64 = 42_161;
const ARBITRUM_SEPOLIA_CHAIN_ID: u64 = 421_614;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Failed to get EVM network: {0}")]
    FailedToGetEvmNetwork(String),
    #[error("Unknown EVM network: {0}")]
    UnknownNetwork(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomNetwork {
    pub name: String,
    pub chain_id: u64,
}

impl CustomNetwork {
    pub fn new(name: &str, chain_id: u64) -> Self {
        Self {
            name: name.to_string(),
            chain_id,
        }
    }
}

/// The chain a transaction is encoded and signed for.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Sepolia,
    ArbitrumOne,
    ArbitrumSepolia,
    Custom(CustomNetwork),
}

impl Network {
    pub fn identifier(&self) -> &str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Sepolia => "sepolia",
            Network::ArbitrumOne => "arbitrum-one",
            Network::ArbitrumSepolia => "arbitrum-sepolia",
            Network::Custom(custom) => &custom.name,
        }
    }

    /// The EIP-155 chain id, which is part of every signed payload.
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => MAINNET_CHAIN_ID,
            Network::Sepolia => SEPOLIA_CHAIN_ID,
            Network::ArbitrumOne => ARBITRUM_ONE_CHAIN_ID,
            Network::ArbitrumSepolia => ARBITRUM_SEPOLIA_CHAIN_ID,
            Network::Custom(custom) => custom.chain_id,
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.identifier(), self.chain_id())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "sepolia" => Ok(Network::Sepolia),
            "arbitrum-one" => Ok(Network::ArbitrumOne),
            "arbitrum-sepolia" => Ok(Network::ArbitrumSepolia),
            _ => Err(Error::UnknownNetwork(s.to_string())),
        }
    }
}

/// Get the `Network` from environment variables.
///
/// `EVM_NETWORK` selects a known network. Otherwise `EVM_CHAIN_ID` (and optionally
/// `EVM_NETWORK_NAME`) describes a custom one. Both may also be set at build time.
/// Returns an error if we cannot obtain the network from any means.
pub fn get_network_from_env() -> Result<Network, Error> {
    let network_var = env::var(EVM_NETWORK)
        .ok()
        .or_else(|| EVM_NETWORK_BUILD_TIME_VAL.map(|s| s.to_string()));

    if let Some(identifier) = network_var {
        let network = identifier
            .parse::<Network>()
            .inspect_err(|err| error!("Invalid {EVM_NETWORK} value: {err}"))?;
        info!("Using {network} EVM network as {EVM_NETWORK} is set to '{identifier}'");
        return Ok(network);
    }

    let chain_id_var = env::var(EVM_CHAIN_ID)
        .ok()
        .or_else(|| EVM_CHAIN_ID_BUILD_TIME_VAL.map(|s| s.to_string()));

    match chain_id_var {
        Some(chain_id) => {
            let chain_id = chain_id.parse::<u64>().map_err(|err| {
                error!("Invalid {EVM_CHAIN_ID} value {chain_id:?}: {err}");
                Error::FailedToGetEvmNetwork(format!("invalid {EVM_CHAIN_ID} value {chain_id:?}"))
            })?;
            let name = env::var(EVM_NETWORK_NAME).unwrap_or_else(|_| "custom".to_string());
            info!("Using custom EVM network from environment variables");
            Ok(Network::Custom(CustomNetwork::new(&name, chain_id)))
        }
        None => {
            error!("Failed to obtain EVM Network through any means");
            Err(Error::FailedToGetEvmNetwork(format!(
                "missing env var, make sure to set one of: {EVM_NETWORK}, {EVM_CHAIN_ID}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_networks_parse_from_their_identifier() -> Result<(), Error> {
        for network in [
            Network::Mainnet,
            Network::Sepolia,
            Network::ArbitrumOne,
            Network::ArbitrumSepolia,
        ] {
            assert_eq!(network, network.identifier().parse()?);
        }
        assert_eq!(
            Err(Error::UnknownNetwork("ropsten".to_string())),
            "ropsten".parse::<Network>()
        );
        Ok(())
    }

    #[test]
    fn chain_ids() {
        assert_eq!(1, Network::Mainnet.chain_id());
        assert_eq!(42_161, Network::ArbitrumOne.chain_id());
        assert_eq!(
            1337,
            Network::Custom(CustomNetwork::new("local", 1337)).chain_id()
        );
        assert_eq!(Network::Mainnet, Network::default());
    }

    // The only test touching these variables, so it cannot race with another.
    #[test]
    fn network_from_env() -> Result<(), Error> {
        env::set_var(EVM_NETWORK, "arbitrum-sepolia");
        assert_eq!(Network::ArbitrumSepolia, get_network_from_env()?);

        env::remove_var(EVM_NETWORK);
        env::set_var(EVM_CHAIN_ID, "31337");
        env::set_var(EVM_NETWORK_NAME, "anvil");
        assert_eq!(
            Network::Custom(CustomNetwork::new("anvil", 31337)),
            get_network_from_env()?
        );

        env::set_var(EVM_CHAIN_ID, "not-a-number");
        assert!(get_network_from_env().is_err());

        env::remove_var(EVM_CHAIN_ID);
        env::remove_var(EVM_NETWORK_NAME);
        Ok(())
    }
}
