// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod connection;
mod contracts;
mod events;

use thiserror::Error as ThisError;

pub use connection::ChainConnection;
pub use contracts::{encrypted_call_args, CallOptions, ContractBinding, ContractService};
pub use events::{event_selector, EventSubscription};

#[derive(ThisError, Debug)]
pub enum ContractError {
    #[error("Provider not available")]
    NoConnection,
    #[error("Unknown event: {0}")]
    UnknownEvent(String),
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    #[error(transparent)]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),
    #[error(transparent)]
    Transport(#[from] alloy::transports::TransportError),
}
