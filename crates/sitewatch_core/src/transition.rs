use crate::{ButtonToken, ChatState, Event};

/// What the dispatcher should do in response to an event. Execution (registry
/// mutation, probing, replies) happens outside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ShowWelcome,
    AddSites(String),
    PromptForAdd,
    RemoveSites(String),
    PromptForRemove,
    ListSites,
    CheckSites,
    ShowMenu,
    Ignore,
}

/// The guided-flow transition table: (current state, event) to
/// (action, next state).
///
/// An add/remove request without arguments (or with blank arguments) enters
/// the matching awaiting state; the next free-text message supplies the
/// argument. Any other request leaves the guided flow. Free text outside a
/// guided flow is ignored.
pub fn transition(state: ChatState, event: &Event) -> (Action, ChatState) {
    match event {
        Event::Start => (Action::ShowWelcome, ChatState::Default),
        Event::Add(arg) => match non_blank(arg) {
            Some(raw) => (Action::AddSites(raw), ChatState::Default),
            None => (Action::PromptForAdd, ChatState::AwaitingAdd),
        },
        Event::Remove(arg) => match non_blank(arg) {
            Some(raw) => (Action::RemoveSites(raw), ChatState::Default),
            None => (Action::PromptForRemove, ChatState::AwaitingRemove),
        },
        Event::List => (Action::ListSites, ChatState::Default),
        Event::Check => (Action::CheckSites, ChatState::Default),
        Event::FreeText(text) => match state {
            ChatState::AwaitingAdd => (Action::AddSites(text.clone()), ChatState::Default),
            ChatState::AwaitingRemove => (Action::RemoveSites(text.clone()), ChatState::Default),
            ChatState::Default => (Action::Ignore, ChatState::Default),
        },
        Event::Button(token) => match token {
            ButtonToken::Add => (Action::PromptForAdd, ChatState::AwaitingAdd),
            ButtonToken::Remove => (Action::PromptForRemove, ChatState::AwaitingRemove),
            ButtonToken::List => (Action::ListSites, ChatState::Default),
            ButtonToken::Check => (Action::CheckSites, ChatState::Default),
            ButtonToken::Back => (Action::ShowMenu, ChatState::Default),
        },
    }
}

fn non_blank(arg: &Option<String>) -> Option<String> {
    arg.as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(ToOwned::to_owned)
}
