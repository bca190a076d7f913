use super::*;

#[test]
fn prints_status_with_variant_tag() {
    let mut renderer = ConsoleRenderer::new(Vec::new());
    renderer.set_label("lecture.mp3");
    renderer.set_status(&StatusMessage::info("Ready to upload lecture.mp3"));

    let printed = String::from_utf8(renderer.into_inner()).expect("utf8");
    assert_eq!(
        printed,
        "file: lecture.mp3\n[info] Ready to upload lecture.mp3\n"
    );
}

#[test]
fn tracks_result_visibility() {
    let mut renderer = ConsoleRenderer::new(Vec::new());
    assert!(!renderer.result_visible());

    renderer.show_result("hello world");
    assert!(renderer.result_visible());

    renderer.hide_result();
    assert!(!renderer.result_visible());

    let printed = String::from_utf8(renderer.into_inner()).expect("utf8");
    assert!(printed.contains("hello world"));
}
