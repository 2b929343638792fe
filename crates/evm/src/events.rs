// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::ContractError;
use alloy::{
    json_abi::JsonAbi,
    primitives::B256,
    providers::{DynProvider, Provider},
    rpc::types::{Filter, Log},
};
use futures::stream::StreamExt;
use tokio::task::JoinHandle;
use tracing::error;

/// Topic-0 selector for a named event in an interface description. For
/// overloaded events the first declaration wins.
pub fn event_selector(abi: &JsonAbi, event_name: &str) -> Result<B256, ContractError> {
    abi.events
        .get(event_name)
        .and_then(|overloads| overloads.first())
        .map(|event| event.selector())
        .ok_or_else(|| ContractError::UnknownEvent(event_name.to_string()))
}

/// A live event subscription. The listener task runs until `unsubscribe`
/// is called or the provider's subscription ends.
pub struct EventSubscription {
    task: JoinHandle<()>,
}

impl EventSubscription {
    /// Detach the callback and stop the listener task.
    pub fn unsubscribe(self) {
        self.task.abort();
    }
}

pub(crate) async fn subscribe<F>(
    provider: DynProvider,
    filter: Filter,
    callback: F,
) -> Result<EventSubscription, ContractError>
where
    F: Fn(Log) + Send + Sync + 'static,
{
    let subscription = provider.subscribe_logs(&filter).await?;
    let task = tokio::spawn(async move {
        let mut stream = subscription.into_stream();
        while let Some(log) = stream.next().await {
            callback(log);
        }
        error!("event subscription stream ended");
    });
    Ok(EventSubscription { task })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_event_selectors_by_name() {
        let abi = JsonAbi::parse([
            "event ValueChanged(address indexed author, string value)",
            "event Transfer(address indexed from, address indexed to, uint256 amount)",
        ])
        .unwrap();

        let value_changed = event_selector(&abi, "ValueChanged").unwrap();
        let transfer = event_selector(&abi, "Transfer").unwrap();
        assert_ne!(value_changed, transfer);

        let err = event_selector(&abi, "Missing").unwrap_err();
        assert!(matches!(err, ContractError::UnknownEvent(name) if name == "Missing"));
    }
}
