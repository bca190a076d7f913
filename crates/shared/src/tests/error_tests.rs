use super::*;

#[test]
fn server_detail_is_shown_verbatim() {
    let err = UploadError::ServerRejected {
        status: 500,
        detail: Some("file too large".into()),
    };
    assert_eq!(err.status_text(), "file too large");
}

#[test]
fn missing_or_empty_detail_uses_generic_message() {
    for detail in [None, Some(String::new())] {
        let err = UploadError::ServerRejected {
            status: 400,
            detail,
        };
        assert_eq!(err.status_text(), SERVER_REJECTED_FALLBACK);
    }
}

#[test]
fn whitespace_detail_is_shown_as_sent() {
    let body = crate::protocol::ErrorBody::from_bytes(br#"{"detail": "   "}"#);
    let err = UploadError::ServerRejected {
        status: 400,
        detail: body.detail,
    };
    assert_eq!(err.status_text(), "   ");
}

#[test]
fn transport_failure_prefers_its_own_message() {
    assert_eq!(
        UploadError::Transport("connection refused".into()).status_text(),
        "connection refused"
    );
    assert_eq!(
        UploadError::Transport(String::new()).status_text(),
        TRANSPORT_FALLBACK
    );
    assert_eq!(UploadError::Transport(" ".into()).status_text(), " ");
}

#[test]
fn no_file_prompts_for_a_file() {
    assert_eq!(UploadError::NoFileSelected.status_text(), NO_FILE_MESSAGE);
}
