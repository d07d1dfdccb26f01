// Host-side tests for the contact message and its delivery contract.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod contact {
    include!("../src/core/contact.rs");
}

use contact::*;

#[test]
fn log_sink_always_accepts() {
    let message = ContactMessage {
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        message: "hi".to_string(),
    };
    assert!(LogSink.deliver(&message).is_ok());
}

#[test]
fn empty_fields_are_accepted_as_is() {
    // The form applies no validation; an all-empty submission still delivers
    let message = ContactMessage::default();
    assert_eq!(message.name, "");
    assert_eq!(message.email, "");
    assert_eq!(message.message, "");
    assert!(LogSink.deliver(&message).is_ok());
}

#[test]
fn rejected_delivery_reports_the_reason() {
    let err = DeliveryError::Rejected("endpoint unreachable".to_string());
    let text = err.to_string();
    assert!(
        text.contains("endpoint unreachable"),
        "error lost its reason: {text}"
    );
}

#[test]
fn acknowledgment_text_is_user_facing() {
    assert!(ACKNOWLEDGMENT.starts_with("Thank you"));
    assert!(!ACKNOWLEDGMENT.is_empty());
}
