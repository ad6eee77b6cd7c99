// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::common::{Address, Calldata, Hash, U256};
use alloy::sol;
use alloy::sol_types::{SolCall, SolEvent};

sol!(
    #[allow(missing_docs)]
    interface IERC20 {
        event Transfer(address indexed from, address indexed to, uint256 value);

        function transfer(address to, uint256 amount) external returns (bool);
    }
);

/// Topic 0 of an ERC20 `Transfer` event.
pub const TRANSFER_EVENT_SIGNATURE: Hash = IERC20::Transfer::SIGNATURE_HASH;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Calldata is not a transfer call: {0}")]
    NotATransferCall(#[from] alloy::sol_types::Error),
}

/// Encode an ERC20 `transfer(to, amount)` call.
pub fn encode_transfer_call(to: Address, amount: U256) -> Calldata {
    let call = IERC20::transferCall { to, amount };
    Calldata::from(call.abi_encode())
}

/// Decode the arguments of an ERC20 `transfer(to, amount)` call.
pub fn decode_transfer_call(data: &[u8]) -> Result<(Address, U256), Error> {
    let call = IERC20::transferCall::abi_decode(data, true).inspect_err(|err| {
        error!("Error decoding transfer calldata of {} bytes: {err:?}", data.len())
    })?;
    Ok((call.to, call.amount))
}
