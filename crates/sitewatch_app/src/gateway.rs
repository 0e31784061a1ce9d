use thiserror::Error;
use watch_logging::watch_info;

use sitewatch_core::{ActionSet, ConversationId};
use sitewatch_engine::{Notifier, NotifyError};

#[derive(Debug, Error)]
#[error("message delivery failed: {0}")]
pub struct GatewayError(pub String);

/// Outbound side of the messaging transport. The core hands over plain text
/// plus which affordance set applies; rendering buttons and talking to the
/// chat network is the transport's concern.
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    async fn send(
        &self,
        conversation: ConversationId,
        text: &str,
        actions: Option<ActionSet>,
    ) -> Result<(), GatewayError>;
}

/// Stand-in delivery that writes outbound messages to the log. Used until a
/// chat transport is attached to the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingGateway;

#[async_trait::async_trait]
impl Gateway for LoggingGateway {
    async fn send(
        &self,
        conversation: ConversationId,
        text: &str,
        actions: Option<ActionSet>,
    ) -> Result<(), GatewayError> {
        watch_info!("outbound to {conversation} (actions: {actions:?}):\n{text}");
        Ok(())
    }
}

/// Adapts a [`Gateway`] to the scheduler's [`Notifier`] seam. Scheduled
/// summaries carry no affordances.
pub struct GatewayNotifier<G> {
    gateway: G,
}

impl<G: Gateway> GatewayNotifier<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl<G: Gateway> Notifier for GatewayNotifier<G> {
    async fn notify(&self, conversation: ConversationId, text: &str) -> Result<(), NotifyError> {
        self.gateway
            .send(conversation, text, None)
            .await
            .map_err(|err| NotifyError(err.to_string()))
    }
}
