use pretty_assertions::assert_eq;
use sitewatch_core::{format_results, format_site_list, ActionSet, ChatState, ProbeStatus};

fn init_logging() {
    watch_logging::initialize_for_tests();
}

fn ok(address: &str, code: u16) -> ProbeStatus {
    ProbeStatus {
        address: address.to_owned(),
        ok: true,
        status_code: Some(code),
        error: None,
    }
}

fn http_error(address: &str, code: u16) -> ProbeStatus {
    ProbeStatus {
        address: address.to_owned(),
        ok: false,
        status_code: Some(code),
        error: None,
    }
}

fn transport_error(address: &str, message: &str) -> ProbeStatus {
    ProbeStatus {
        address: address.to_owned(),
        ok: false,
        status_code: None,
        error: Some(message.to_owned()),
    }
}

#[test]
fn full_report_lists_every_result() {
    init_logging();
    let results = [
        ok("http://a.com", 200),
        http_error("http://b.com", 404),
        transport_error("http://c.com", "connection refused"),
    ];
    assert_eq!(
        format_results(&results, false),
        "• http://a.com — OK (200)\n\
         • http://b.com — Error: HTTP 404\n\
         • http://c.com — Error: connection refused"
    );
}

#[test]
fn errors_only_report_drops_ok_lines() {
    init_logging();
    let results = [ok("http://a.com", 200), http_error("http://b.com", 500)];
    assert_eq!(
        format_results(&results, true),
        "• http://b.com — Error: HTTP 500"
    );
}

#[test]
fn all_ok_errors_only_report_is_empty() {
    init_logging();
    let results = [ok("http://a.com", 204), ok("http://b.com", 301)];
    assert_eq!(format_results(&results, true), "");
}

#[test]
fn site_list_renders_with_header() {
    init_logging();
    let sites = ["http://a.com".to_owned(), "https://b.com".to_owned()];
    assert_eq!(
        format_site_list(&sites),
        "Your websites:\n• http://a.com\n• https://b.com"
    );
}

#[test]
fn action_set_follows_the_guided_flow_state() {
    init_logging();
    assert_eq!(ActionSet::for_state(ChatState::Default), ActionSet::Menu);
    assert_eq!(
        ActionSet::for_state(ChatState::AwaitingAdd),
        ActionSet::BackOnly
    );
    assert_eq!(
        ActionSet::for_state(ChatState::AwaitingRemove),
        ActionSet::BackOnly
    );
}
