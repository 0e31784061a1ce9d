/// Outcome of probing a single address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeStatus {
    /// The normalized address that was probed.
    pub address: String,
    /// True iff a response arrived with a 2xx or 3xx status.
    pub ok: bool,
    /// Populated only when a response was received.
    pub status_code: Option<u16>,
    /// Populated only when the request could not complete.
    pub error: Option<String>,
}

pub const WELCOME: &str = "Hello! I monitor your website list and can run scheduled checks.\n\n\
Commands (your list is per-chat):\n\
/add <url> — add a website\n\
/remove <url> — remove a website\n\
/list — show your websites\n\
/check — check all your websites now and show results";
pub const PROMPT_ADD: &str = "Please provide URL:";
pub const PROMPT_REMOVE: &str = "Please provide URL(s) to remove:";
pub const REMOVED: &str = "Removed from your list.";
pub const NOT_FOUND: &str = "URL not found in your list. Use /list to see current sites.";
pub const EMPTY_LIST: &str = "No websites in your list. Use /add <url> to add one.";
pub const CHECKING: &str = "Checking…";
pub const CHOOSE_ACTION: &str = "Choose an action:";
pub const STATUS_HEADER: &str = "Status check:";
pub const ERRORS_HEADER: &str = "Status check (errors):";

/// Render probe results one bullet per line, `• <address> — OK (<code>)` or
/// `• <address> — Error: <message>`. With `errors_only`, OK lines are
/// dropped entirely. Empty string when nothing is left to report.
pub fn format_results(results: &[ProbeStatus], errors_only: bool) -> String {
    let mut lines = Vec::new();
    for result in results {
        if errors_only && result.ok {
            continue;
        }
        if result.ok {
            let code = result.status_code.unwrap_or_default();
            lines.push(format!("• {} — OK ({})", result.address, code));
        } else {
            let message = result
                .error
                .clone()
                .or_else(|| result.status_code.map(|code| format!("HTTP {code}")));
            match message {
                Some(message) => lines.push(format!("• {} — Error: {}", result.address, message)),
                None => lines.push(format!("• {} — Error", result.address)),
            }
        }
    }
    lines.join("\n")
}

/// Render the stored site list with a header line.
pub fn format_site_list(sites: &[String]) -> String {
    let mut lines = vec!["Your websites:".to_owned()];
    lines.extend(sites.iter().map(|site| format!("• {site}")));
    lines.join("\n")
}
