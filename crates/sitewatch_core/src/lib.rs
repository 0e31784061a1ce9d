//! Sitewatch core: pure address normalization, conversation state machine,
//! report formatting and tick math. No I/O lives here.
mod event;
mod format;
mod normalize;
mod state;
mod tick;
mod transition;

pub use event::{ButtonToken, Event, UnknownButton};
pub use format::{
    format_results, format_site_list, ProbeStatus, CHECKING, CHOOSE_ACTION, EMPTY_LIST,
    ERRORS_HEADER, NOT_FOUND, PROMPT_ADD, PROMPT_REMOVE, REMOVED, STATUS_HEADER, WELCOME,
};
pub use normalize::{normalize, normalize_batch, same_site, strip_scheme, NormalizedAddress};
pub use state::{ActionSet, ChatState, ConversationId};
pub use tick::next_tick_wait;
pub use transition::{transition, Action};
