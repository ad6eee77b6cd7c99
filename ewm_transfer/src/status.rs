// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use ewm_chain::{Gas, Hash, TransactionStatus};
use std::fmt::{self, Display, Formatter};
use std::mem::size_of;

/// Longest error reason kept, in bytes: the size of the included payload, so that every
/// status variant occupies the same room.
pub const MAX_REASON_BYTES: usize =
    size_of::<Gas>() + size_of::<Hash>() + 2 * size_of::<u64>();

const UNKNOWN_REASON: &str = "Unknown (for now)";

/// Why a transfer failed, bounded to [`MAX_REASON_BYTES`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorReason {
    text: String,
    provisional: bool,
}

impl ErrorReason {
    /// Longer reasons are truncated at a character boundary.
    pub fn new(reason: &str) -> Self {
        Self {
            text: truncate(reason).to_string(),
            provisional: false,
        }
    }

    /// Stand-in for a failure whose cause has not been learned yet.
    pub fn unknown() -> Self {
        Self {
            text: UNKNOWN_REASON.to_string(),
            provisional: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether this is a placeholder rather than the actual cause.
    pub fn is_provisional(&self) -> bool {
        self.provisional
    }
}

impl Display for ErrorReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn truncate(reason: &str) -> &str {
    if reason.len() <= MAX_REASON_BYTES {
        return reason;
    }
    let mut end = MAX_REASON_BYTES;
    while !reason.is_char_boundary(end) {
        end -= 1;
    }
    &reason[..end]
}

/// Where a transfer's block inclusion happened.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inclusion {
    gas_used: Gas,
    block_hash: Hash,
    block_number: u64,
    transaction_index: u64,
}

impl Inclusion {
    pub fn block_hash(&self) -> Hash {
        self.block_hash
    }

    pub fn block_number(&self) -> u64 {
        self.block_number
    }

    pub fn transaction_index(&self) -> u64 {
        self.transaction_index
    }
}

/// The payload-free kind of a [`TransferStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransferStatusType {
    Submitted,
    Included,
    Errored,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TransferStatus {
    /// Sent to the network, neither included nor failed yet.
    #[default]
    Submitted,
    Included(Inclusion),
    Errored(ErrorReason),
}

impl TransferStatus {
    pub fn included(
        gas_used: Gas,
        block_hash: Hash,
        block_number: u64,
        transaction_index: u64,
    ) -> Self {
        Self::Included(Inclusion {
            gas_used,
            block_hash,
            block_number,
            transaction_index,
        })
    }

    pub fn errored(reason: &str) -> Self {
        Self::Errored(ErrorReason::new(reason))
    }

    pub fn status_type(&self) -> TransferStatusType {
        match self {
            Self::Submitted => TransferStatusType::Submitted,
            Self::Included(_) => TransferStatusType::Included,
            Self::Errored(_) => TransferStatusType::Errored,
        }
    }

    pub(crate) fn gas_used(&self) -> Option<Gas> {
        match self {
            Self::Included(inclusion) => Some(inclusion.gas_used),
            _ => None,
        }
    }

    /// Project an on-chain status onto a transfer status.
    ///
    /// Only the block number of an inclusion is carried over; an on-chain failure
    /// becomes the provisional unknown reason.
    pub fn from_transaction_status(status: &TransactionStatus) -> Self {
        match status {
            TransactionStatus::Unknown | TransactionStatus::Queued | TransactionStatus::Pending => {
                Self::Submitted
            }
            TransactionStatus::Included { block_number, .. } => Self::Included(Inclusion {
                block_number: *block_number,
                ..Inclusion::default()
            }),
            TransactionStatus::Errored { .. } => Self::Errored(ErrorReason::unknown()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ewm_chain::utils::dummy_hash;

    #[test]
    fn reason_bound_matches_the_included_payload() {
        assert_eq!(56, MAX_REASON_BYTES);
    }

    #[test]
    fn long_reasons_are_truncated() {
        let exact = "x".repeat(MAX_REASON_BYTES);
        assert_eq!(exact, ErrorReason::new(&exact).as_str());

        let long = "y".repeat(MAX_REASON_BYTES + 10);
        assert_eq!(MAX_REASON_BYTES, ErrorReason::new(&long).as_str().len());

        // A multi-byte character straddling the bound is dropped whole.
        let straddling = format!("{}é", "z".repeat(MAX_REASON_BYTES - 1));
        let reason = ErrorReason::new(&straddling);
        assert_eq!(MAX_REASON_BYTES - 1, reason.as_str().len());
        assert!(!reason.is_provisional());
    }

    #[test]
    fn unknown_reason_is_provisional() {
        let reason = ErrorReason::unknown();
        assert!(reason.is_provisional());
        assert_eq!("Unknown (for now)", reason.to_string());
    }

    #[test]
    fn on_chain_status_projection() {
        for pending in [
            TransactionStatus::Unknown,
            TransactionStatus::Queued,
            TransactionStatus::Pending,
        ] {
            assert_eq!(
                TransferStatus::Submitted,
                TransferStatus::from_transaction_status(&pending)
            );
        }

        let included = TransferStatus::from_transaction_status(&TransactionStatus::included(
            Gas(21_000),
            dummy_hash(),
            100,
            4,
        ));
        match &included {
            TransferStatus::Included(inclusion) => {
                assert_eq!(100, inclusion.block_number());
                assert_eq!(0, inclusion.transaction_index());
                assert_eq!(Hash::ZERO, inclusion.block_hash());
            }
            other => panic!("expected an inclusion, got {other:?}"),
        }
        assert_eq!(Some(Gas::zero()), included.gas_used());

        assert_eq!(
            TransferStatus::Errored(ErrorReason::unknown()),
            TransferStatus::from_transaction_status(&TransactionStatus::errored("reverted"))
        );
    }
}
