use chrono::Utc;
use thiserror::Error;
use watch_logging::{watch_debug, watch_info, watch_warn};

use sitewatch_core::{format_results, next_tick_wait, ConversationId, ERRORS_HEADER};

use crate::probe::Prober;
use crate::store::SiteStore;

/// Outbound delivery used by the background sweep; the gateway narrowed to
/// error summaries.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, conversation: ConversationId, text: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, Error)]
#[error("delivery failed: {0}")]
pub struct NotifyError(pub String);

/// Perpetual sweep loop: sleep until the next aligned wall-clock boundary,
/// then probe every conversation with sites. Runs until the task is dropped
/// at process shutdown.
pub async fn run_scheduler(
    store: SiteStore,
    prober: impl Prober,
    notifier: impl Notifier,
    interval_minutes: u32,
) {
    watch_info!("scheduler started, interval {interval_minutes}m");
    loop {
        let wait = next_tick_wait(Utc::now(), interval_minutes);
        watch_debug!("next sweep in {wait:?}");
        tokio::time::sleep(wait).await;
        sweep(&store, &prober, &notifier).await;
    }
}

/// One full pass over all conversations with non-empty registries. Only
/// failed probes are reported; a conversation with nothing to report gets no
/// message. A failed delivery is logged and skipped so one conversation
/// never aborts the sweep.
pub async fn sweep(store: &SiteStore, prober: &dyn Prober, notifier: &dyn Notifier) {
    let conversations = store.conversations_with_sites();
    watch_debug!("sweeping {} conversation(s)", conversations.len());
    for conversation in conversations {
        let sites = store.sites(conversation);
        if sites.is_empty() {
            continue;
        }
        let results = prober.check(&sites).await;
        let errors = format_results(&results, true);
        if errors.is_empty() {
            continue;
        }
        let message = format!("{ERRORS_HEADER}\n{errors}");
        if let Err(err) = notifier.notify(conversation, &message).await {
            watch_warn!("delivery to conversation {conversation} failed, skipping: {err}");
        }
    }
}
