use std::fmt;

/// A validated, scheme-prefixed address string.
///
/// Produced only by [`normalize`]; the inner value is never empty and always
/// starts with `http://` or `https://`. This is the only form that is ever
/// persisted or probed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedAddress(String);

impl NormalizedAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalize raw user input into a comparable address form.
///
/// Trims surrounding whitespace, strips one layer of `<...>` wrapping, and
/// prepends `http://` unless a scheme is already present. Returns `None` for
/// input that is empty after trimming. Idempotent on every `Some` result.
pub fn normalize(raw: &str) -> Option<NormalizedAddress> {
    let mut value = raw.trim();
    if value.len() >= 2 && value.starts_with('<') && value.ends_with('>') {
        value = value[1..value.len() - 1].trim();
    }
    if value.is_empty() {
        return None;
    }
    let address = if value.starts_with("http://") || value.starts_with("https://") {
        value.to_owned()
    } else {
        format!("http://{value}")
    };
    Some(NormalizedAddress(address))
}

/// Normalize every whitespace-separated token in `raw`, silently dropping
/// tokens that normalize to empty. Order is preserved; no de-duplication.
pub fn normalize_batch(raw: &str) -> Vec<NormalizedAddress> {
    raw.split_whitespace().filter_map(normalize).collect()
}

/// Comparison key ignoring a leading `http://` or `https://`.
pub fn strip_scheme(address: &str) -> &str {
    address
        .strip_prefix("http://")
        .or_else(|| address.strip_prefix("https://"))
        .unwrap_or(address)
}

/// Two addresses name the same site when they are equal, or equal after
/// stripping the scheme from both. Lets `https://example.com` be removed by
/// typing `example.com`.
pub fn same_site(a: &str, b: &str) -> bool {
    a == b || strip_scheme(a) == strip_scheme(b)
}
