use super::*;

#[test]
fn content_defaults_are_empty_and_closeable() {
    let content = ModalContent::default();
    assert_eq!(content.title, "");
    assert_eq!(content.body, "");
    assert_eq!(content.footer, "");
    assert!(content.closeable);
}

#[test]
fn load_with_title_only_defaults_the_rest() {
    let mut modal = ModalState::default();
    modal.load(ModalContent {
        title: "X".to_owned(),
        ..ModalContent::default()
    });
    assert_eq!(modal.title, "X");
    assert_eq!(modal.body, "");
    assert_eq!(modal.footer, "");
    assert!(modal.closeable);
    assert!(modal.show);
}

#[test]
fn load_overwrites_visible_content() {
    let mut modal = ModalState::default();
    modal.load(ModalContent {
        title: "first".to_owned(),
        body: "one".to_owned(),
        ..ModalContent::default()
    });
    modal.load(ModalContent {
        title: "second".to_owned(),
        closeable: false,
        ..ModalContent::default()
    });
    assert_eq!(modal.title, "second");
    assert_eq!(modal.body, "");
    assert!(!modal.closeable);
    assert!(modal.show);
}

#[test]
fn dismiss_hides_closeable_dialog() {
    let mut modal = ModalState::default();
    modal.load(ModalContent::default());
    modal.dismiss();
    assert!(!modal.show);
}

#[test]
fn dismiss_keeps_non_closeable_dialog_visible() {
    let mut modal = ModalState::default();
    modal.load(ModalContent {
        closeable: false,
        ..ModalContent::default()
    });
    modal.dismiss();
    assert!(modal.show);
}
