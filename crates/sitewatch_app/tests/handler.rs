use std::sync::Mutex;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use sitewatch_app::{handle_event, Gateway, GatewayError};
use sitewatch_core::{ActionSet, ButtonToken, ChatState, ConversationId, Event, ProbeStatus};
use sitewatch_engine::{Prober, SiteStore};

fn init_logging() {
    watch_logging::initialize_for_tests();
}

fn temp_store() -> (TempDir, SiteStore) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = SiteStore::new(dir.path().join("sitewatch_data.json"));
    (dir, store)
}

/// Prober that marks every address with a 200 without touching the network.
struct AllOkProber;

#[async_trait::async_trait]
impl Prober for AllOkProber {
    async fn check(&self, addresses: &[String]) -> Vec<ProbeStatus> {
        addresses
            .iter()
            .map(|address| ProbeStatus {
                address: address.clone(),
                ok: true,
                status_code: Some(200),
                error: None,
            })
            .collect()
    }
}

#[derive(Default)]
struct RecordingGateway {
    sent: Mutex<Vec<(ConversationId, String, Option<ActionSet>)>>,
}

impl RecordingGateway {
    fn sent(&self) -> Vec<(ConversationId, String, Option<ActionSet>)> {
        self.sent.lock().unwrap().clone()
    }

    fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|(_, text, _)| text).collect()
    }
}

#[async_trait::async_trait]
impl Gateway for RecordingGateway {
    async fn send(
        &self,
        conversation: ConversationId,
        text: &str,
        actions: Option<ActionSet>,
    ) -> Result<(), GatewayError> {
        self.sent
            .lock()
            .unwrap()
            .push((conversation, text.to_owned(), actions));
        Ok(())
    }
}

#[tokio::test]
async fn start_shows_the_welcome_text_with_the_menu() {
    init_logging();
    let (_dir, store) = temp_store();
    store.set_state(7, ChatState::AwaitingAdd);
    let gateway = RecordingGateway::default();

    handle_event(&store, &AllOkProber, &gateway, 7, Event::Start)
        .await
        .unwrap();

    let sent = gateway.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].1.starts_with("Hello! I monitor your website list"));
    assert_eq!(sent[0].2, Some(ActionSet::Menu));
    assert_eq!(store.state(7), ChatState::Default);
}

#[tokio::test]
async fn add_with_arguments_updates_the_registry() {
    init_logging();
    let (_dir, store) = temp_store();
    let gateway = RecordingGateway::default();

    let event = Event::Add(Some("example.com foo.org".to_owned()));
    handle_event(&store, &AllOkProber, &gateway, 1, event)
        .await
        .unwrap();

    assert_eq!(
        gateway.texts(),
        vec!["Added: http://example.com, http://foo.org".to_owned()]
    );
    assert_eq!(
        store.sites(1),
        vec!["http://example.com".to_owned(), "http://foo.org".to_owned()]
    );
    assert_eq!(store.state(1), ChatState::Default);
}

#[tokio::test]
async fn guided_add_flow_prompts_then_consumes_free_text() {
    init_logging();
    let (_dir, store) = temp_store();
    let gateway = RecordingGateway::default();

    handle_event(&store, &AllOkProber, &gateway, 1, Event::Add(None))
        .await
        .unwrap();
    assert_eq!(store.state(1), ChatState::AwaitingAdd);
    assert_eq!(
        gateway.sent()[0],
        (1, "Please provide URL:".to_owned(), Some(ActionSet::BackOnly))
    );

    let free_text = Event::FreeText("example.com".to_owned());
    handle_event(&store, &AllOkProber, &gateway, 1, free_text)
        .await
        .unwrap();
    assert_eq!(store.state(1), ChatState::Default);
    assert_eq!(store.sites(1), vec!["http://example.com".to_owned()]);
}

#[tokio::test]
async fn invalid_add_input_reenters_the_guided_flow() {
    init_logging();
    let (_dir, store) = temp_store();
    let gateway = RecordingGateway::default();

    handle_event(&store, &AllOkProber, &gateway, 1, Event::Add(None))
        .await
        .unwrap();
    // "<>" normalizes to empty, so nothing is accepted.
    handle_event(
        &store,
        &AllOkProber,
        &gateway,
        1,
        Event::FreeText("<>".to_owned()),
    )
    .await
    .unwrap();

    assert_eq!(store.state(1), ChatState::AwaitingAdd);
    assert!(store.sites(1).is_empty());
    assert_eq!(
        gateway.texts(),
        vec![
            "Please provide URL:".to_owned(),
            "Please provide URL:".to_owned()
        ]
    );
}

#[tokio::test]
async fn guided_remove_flow_via_buttons() {
    init_logging();
    let (_dir, store) = temp_store();
    store.add_sites(1, "https://example.com");
    let gateway = RecordingGateway::default();

    let press = Event::Button(ButtonToken::Remove);
    handle_event(&store, &AllOkProber, &gateway, 1, press)
        .await
        .unwrap();
    assert_eq!(store.state(1), ChatState::AwaitingRemove);

    // Scheme-insensitive removal through the guided flow.
    let free_text = Event::FreeText("example.com".to_owned());
    handle_event(&store, &AllOkProber, &gateway, 1, free_text)
        .await
        .unwrap();

    assert_eq!(store.state(1), ChatState::Default);
    assert!(store.sites(1).is_empty());
    assert_eq!(
        gateway.texts(),
        vec![
            "Please provide URL(s) to remove:".to_owned(),
            "Removed from your list.".to_owned()
        ]
    );
}

#[tokio::test]
async fn removing_an_unknown_address_reports_not_found() {
    init_logging();
    let (_dir, store) = temp_store();
    store.add_sites(1, "example.com");
    let gateway = RecordingGateway::default();

    let event = Event::Remove(Some("missing.org".to_owned()));
    handle_event(&store, &AllOkProber, &gateway, 1, event)
        .await
        .unwrap();

    assert_eq!(
        gateway.texts(),
        vec!["URL not found in your list. Use /list to see current sites.".to_owned()]
    );
    assert_eq!(store.state(1), ChatState::Default);
}

#[tokio::test]
async fn list_renders_the_stored_sites() {
    init_logging();
    let (_dir, store) = temp_store();
    let gateway = RecordingGateway::default();

    handle_event(&store, &AllOkProber, &gateway, 1, Event::List)
        .await
        .unwrap();
    assert_eq!(
        gateway.texts(),
        vec!["No websites in your list. Use /add <url> to add one.".to_owned()]
    );

    store.add_sites(1, "example.com foo.org");
    handle_event(&store, &AllOkProber, &gateway, 1, Event::List)
        .await
        .unwrap();
    assert_eq!(
        gateway.texts()[1],
        "Your websites:\n• http://example.com\n• http://foo.org"
    );
}

#[tokio::test]
async fn check_sends_progress_then_the_full_report() {
    init_logging();
    let (_dir, store) = temp_store();
    store.add_sites(1, "example.com");
    let gateway = RecordingGateway::default();

    handle_event(&store, &AllOkProber, &gateway, 1, Event::Check)
        .await
        .unwrap();

    assert_eq!(
        gateway.texts(),
        vec![
            "Checking…".to_owned(),
            "Status check:\n• http://example.com — OK (200)".to_owned()
        ]
    );
    assert_eq!(store.state(1), ChatState::Default);
}

#[tokio::test]
async fn free_text_outside_a_flow_is_ignored_silently() {
    init_logging();
    let (_dir, store) = temp_store();
    let gateway = RecordingGateway::default();

    let event = Event::FreeText("just chatting".to_owned());
    handle_event(&store, &AllOkProber, &gateway, 1, event)
        .await
        .unwrap();

    assert!(gateway.sent().is_empty());
    assert_eq!(store.state(1), ChatState::Default);
}

#[tokio::test]
async fn back_button_returns_to_the_menu() {
    init_logging();
    let (_dir, store) = temp_store();
    store.set_state(1, ChatState::AwaitingRemove);
    let gateway = RecordingGateway::default();

    let press = Event::Button(ButtonToken::Back);
    handle_event(&store, &AllOkProber, &gateway, 1, press)
        .await
        .unwrap();

    assert_eq!(
        gateway.sent(),
        vec![(1, "Choose an action:".to_owned(), Some(ActionSet::Menu))]
    );
    assert_eq!(store.state(1), ChatState::Default);
}
