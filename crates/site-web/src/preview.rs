use crate::constants::{
    CARD_PREVIEW_ID, PREVIEW_EXPIRY_ID, PREVIEW_NAME_ID, PREVIEW_NUMBER_ID,
};
use site_core::CardState;
use web_sys as web;

/// Push the whole card state into the preview DOM: holder/number/expiry text
/// plus the face background (gradient + pattern layers) as an inline style.
pub fn apply(document: &web::Document, state: &CardState) {
    set_text(document, PREVIEW_NAME_ID, state.name());
    set_text(document, PREVIEW_NUMBER_ID, state.number());
    set_text(document, PREVIEW_EXPIRY_ID, state.expiry());
    if let Some(el) = document.get_element_by_id(CARD_PREVIEW_ID) {
        let _ = el.set_attribute("style", &state.face_style());
    }
}

#[inline]
fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}
