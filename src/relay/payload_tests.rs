//! Tests for inbound payload decoding.

use super::{ClientRequest, RelayError};

#[test]
fn decodes_all_fields() {
    let request =
        ClientRequest::from_slice(br#"{"token":"xoxp-1","display_name":"@alice","text":"hi"}"#)
            .unwrap();

    assert_eq!(request.token, "xoxp-1");
    assert_eq!(request.display_name, "@alice");
    assert_eq!(request.text, "hi");
}

#[test]
fn ignores_unknown_fields() {
    let request = ClientRequest::from_slice(
        br#"{"token":"t","display_name":"alice","text":"hi","channel":"C1"}"#,
    )
    .unwrap();

    assert_eq!(request.display_name, "alice");
}

#[test]
fn empty_text_is_allowed() {
    let request =
        ClientRequest::from_slice(br#"{"token":"t","display_name":"alice","text":""}"#).unwrap();

    assert!(request.text.is_empty());
}

#[test]
fn rejects_malformed_json() {
    let result = ClientRequest::from_slice(b"token=t&display_name=alice");

    assert!(matches!(result, Err(RelayError::InvalidPayload(_))));
}

#[test]
fn rejects_missing_field() {
    let result = ClientRequest::from_slice(br#"{"display_name":"alice","text":"hi"}"#);

    match result {
        Err(RelayError::InvalidPayload(e)) => assert!(e.to_string().contains("token")),
        other => panic!("Expected invalid payload, got {other:?}"),
    }
}

#[test]
fn rejects_wrong_field_type() {
    let result = ClientRequest::from_slice(br#"{"token":"t","display_name":7,"text":"hi"}"#);

    assert!(matches!(result, Err(RelayError::InvalidPayload(_))));
}

#[test]
fn rejects_empty_display_name() {
    for name in ["", "@"] {
        let body = format!(r#"{{"token":"t","display_name":"{name}","text":"hi"}}"#);

        let result = ClientRequest::from_slice(body.as_bytes());

        assert!(
            matches!(result, Err(RelayError::EmptyDisplayName)),
            "{name:?}"
        );
    }
}

#[test]
fn debug_output_redacts_token() {
    let request =
        ClientRequest::from_slice(br#"{"token":"xoxp-secret","display_name":"alice","text":"hi"}"#)
            .unwrap();

    let debug = format!("{request:?}");

    assert!(!debug.contains("xoxp-secret"));
    assert!(debug.contains("alice"));
}
