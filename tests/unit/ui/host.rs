use super::*;

#[test]
fn require_elements_names_every_missing_id() {
    let ui = RecordingUi::with_elements([ids::CANVAS, ids::SITE]);
    let err = require_elements(&ui, &ids::LANDING_REQUIRED).unwrap_err();
    assert!(matches!(err, PapillonError::MissingElement(_)));
    let msg = err.to_string();
    assert!(msg.contains(ids::CALL_TO_ACTION) && msg.contains(ids::LANDING));
    assert!(!msg.contains(ids::CANVAS));
}

#[test]
fn full_page_satisfies_every_requirement() {
    let ui = RecordingUi::full_page();
    require_elements(&ui, &ids::LANDING_REQUIRED).unwrap();
    require_elements(&ui, &ids::MODAL_REQUIRED).unwrap();
    require_elements(&ui, &[ids::CATEGORIES]).unwrap();
}

#[test]
fn writes_to_absent_elements_are_dropped() {
    let mut ui = RecordingUi::with_elements([ids::SITE]);
    ui.set_text("nope", "x");
    ui.reveal("nope");
    assert!(ui.events().is_empty());
    ui.set_visible(ids::SITE, true);
    assert!(ui.is_visible(ids::SITE));
}

#[test]
fn reveal_and_fade_toggle_visibility() {
    let mut ui = RecordingUi::full_page();
    ui.reveal(ids::CALL_TO_ACTION);
    assert!(ui.element(ids::CALL_TO_ACTION).unwrap().revealed);
    ui.set_visible(ids::LANDING, true);
    ui.fade_out(ids::LANDING, Duration::from_millis(800));
    assert!(!ui.is_visible(ids::LANDING));
}
