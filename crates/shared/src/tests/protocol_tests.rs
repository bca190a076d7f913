use super::*;

#[test]
fn transcript_is_trimmed() {
    let response: TranscribeResponse =
        serde_json::from_str(r#"{"text": "  hello world  "}"#).expect("parse");
    assert_eq!(response.transcript(), Some("hello world"));
}

#[test]
fn blank_or_missing_text_has_no_transcript() {
    for raw in [r#"{"text": ""}"#, r#"{"text": " \n\t "}"#, r#"{}"#, r#"{"text": null}"#] {
        let response: TranscribeResponse = serde_json::from_str(raw).expect("parse");
        assert_eq!(response.transcript(), None, "body {raw}");
    }
}

#[test]
fn error_body_reads_detail() {
    let body = ErrorBody::from_bytes(br#"{"detail": "file too large"}"#);
    assert_eq!(body.detail.as_deref(), Some("file too large"));
}

#[test]
fn unparseable_error_body_is_treated_as_empty() {
    let bodies: [&[u8]; 4] = [b"", b"Internal Server Error", b"null", br#"{"detail": 42}"#];
    for raw in bodies {
        assert_eq!(ErrorBody::from_bytes(raw), ErrorBody::default());
    }
}
