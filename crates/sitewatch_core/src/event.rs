use std::fmt;
use std::str::FromStr;

/// One inbound event from the messaging gateway, already reduced to the
/// conversation-independent part the core cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Start/help request.
    Start,
    /// Add request, optionally carrying raw address tokens.
    Add(Option<String>),
    /// Remove request, optionally carrying raw address tokens.
    Remove(Option<String>),
    /// List request.
    List,
    /// On-demand check request.
    Check,
    /// Free-text message, used to fill the pending argument of a guided flow.
    FreeText(String),
    /// Button press carrying one of the recognized tokens.
    Button(ButtonToken),
}

/// The closed set of button-press tokens the gateway may deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonToken {
    Add,
    Remove,
    List,
    Check,
    Back,
}

/// Error for a button token outside the recognized set. Dispatch fails at
/// this single parse instead of falling through silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownButton(pub String);

impl fmt::Display for UnknownButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown button token: {:?}", self.0)
    }
}

impl std::error::Error for UnknownButton {}

impl FromStr for ButtonToken {
    type Err = UnknownButton;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "add" => Ok(ButtonToken::Add),
            "remove" => Ok(ButtonToken::Remove),
            "list" => Ok(ButtonToken::List),
            "check" => Ok(ButtonToken::Check),
            "back" => Ok(ButtonToken::Back),
            other => Err(UnknownButton(other.to_owned())),
        }
    }
}
