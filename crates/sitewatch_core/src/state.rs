/// An addressable chat context; the unit of isolation for site lists and
/// guided-flow state.
pub type ConversationId = i64;

/// Per-conversation guided-flow state.
///
/// `Default` is never persisted; absence of a stored entry means `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    #[default]
    Default,
    /// The next free-text message is treated as addresses to add.
    AwaitingAdd,
    /// The next free-text message is treated as addresses to remove.
    AwaitingRemove,
}

impl ChatState {
    /// Persisted token, or `None` for `Default` (which deletes the entry).
    pub fn token(self) -> Option<&'static str> {
        match self {
            ChatState::Default => None,
            ChatState::AwaitingAdd => Some("add"),
            ChatState::AwaitingRemove => Some("remove"),
        }
    }

    /// Parse a persisted token. Unrecognized tokens map to `None` so callers
    /// fall back to `Default`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "add" => Some(ChatState::AwaitingAdd),
            "remove" => Some(ChatState::AwaitingRemove),
            _ => None,
        }
    }
}

/// Which UI affordances the gateway should render alongside a reply.
/// Rendering itself is the gateway's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSet {
    /// The default action set: add, remove, list, check.
    Menu,
    /// A single back action, shown while a guided flow is pending.
    BackOnly,
}

impl ActionSet {
    pub fn for_state(state: ChatState) -> Self {
        match state {
            ChatState::Default => ActionSet::Menu,
            ChatState::AwaitingAdd | ChatState::AwaitingRemove => ActionSet::BackOnly,
        }
    }
}
