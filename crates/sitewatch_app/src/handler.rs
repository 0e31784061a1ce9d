use sitewatch_core::{
    format_results, format_site_list, transition, Action, ActionSet, ChatState, ConversationId,
    Event, NormalizedAddress, CHECKING, CHOOSE_ACTION, EMPTY_LIST, NOT_FOUND, PROMPT_ADD,
    PROMPT_REMOVE, REMOVED, STATUS_HEADER, WELCOME,
};
use sitewatch_engine::{Prober, SiteStore};

use crate::gateway::{Gateway, GatewayError};

/// Apply one inbound event: run the transition table, execute the resulting
/// action against the registry/prober, reply through the gateway and persist
/// the final guided-flow state.
///
/// Add input that accepts nothing re-enters the awaiting state with a fresh
/// prompt; a remove that matches nothing reports not-found and returns to
/// default.
pub async fn handle_event(
    store: &SiteStore,
    prober: &dyn Prober,
    gateway: &dyn Gateway,
    conversation: ConversationId,
    event: Event,
) -> Result<(), GatewayError> {
    let current = store.state(conversation);
    let (action, next) = transition(current, &event);

    let final_state = match action {
        Action::Ignore => return Ok(()),
        Action::ShowWelcome => {
            gateway
                .send(conversation, WELCOME, Some(ActionSet::Menu))
                .await?;
            next
        }
        Action::ShowMenu => {
            gateway
                .send(conversation, CHOOSE_ACTION, Some(ActionSet::Menu))
                .await?;
            next
        }
        Action::PromptForAdd => {
            gateway
                .send(conversation, PROMPT_ADD, Some(ActionSet::BackOnly))
                .await?;
            next
        }
        Action::PromptForRemove => {
            gateway
                .send(conversation, PROMPT_REMOVE, Some(ActionSet::BackOnly))
                .await?;
            next
        }
        Action::AddSites(raw) => {
            let accepted = store.add_sites(conversation, &raw);
            if accepted.is_empty() {
                gateway
                    .send(conversation, PROMPT_ADD, Some(ActionSet::BackOnly))
                    .await?;
                ChatState::AwaitingAdd
            } else {
                let listing = accepted
                    .iter()
                    .map(NormalizedAddress::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                gateway
                    .send(
                        conversation,
                        &format!("Added: {listing}"),
                        Some(ActionSet::Menu),
                    )
                    .await?;
                ChatState::Default
            }
        }
        Action::RemoveSites(raw) => {
            let text = if store.remove_sites(conversation, &raw) {
                REMOVED
            } else {
                NOT_FOUND
            };
            gateway
                .send(conversation, text, Some(ActionSet::Menu))
                .await?;
            ChatState::Default
        }
        Action::ListSites => {
            let sites = store.sites(conversation);
            let text = if sites.is_empty() {
                EMPTY_LIST.to_owned()
            } else {
                format_site_list(&sites)
            };
            gateway
                .send(conversation, &text, Some(ActionSet::Menu))
                .await?;
            ChatState::Default
        }
        Action::CheckSites => {
            let sites = store.sites(conversation);
            if sites.is_empty() {
                gateway
                    .send(conversation, EMPTY_LIST, Some(ActionSet::Menu))
                    .await?;
            } else {
                gateway
                    .send(conversation, CHECKING, Some(ActionSet::Menu))
                    .await?;
                let results = prober.check(&sites).await;
                let report = format!("{STATUS_HEADER}\n{}", format_results(&results, false));
                gateway
                    .send(conversation, &report, Some(ActionSet::Menu))
                    .await?;
            }
            ChatState::Default
        }
    };

    store.set_state(conversation, final_state);
    Ok(())
}
