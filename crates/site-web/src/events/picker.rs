use crate::constants::{COLOR_SWATCH_PREFIX, PATTERN_BUTTON_PREFIX, SELECTED_CLASS};
use crate::dom;
use crate::preview;
use site_core::{CardColor, CardPattern, CardState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Wire the color swatches and pattern buttons. Both pickers carry no free
/// input: each button maps directly to one enum value.
pub fn wire_style_pickers(document: &web::Document, state: &Rc<RefCell<CardState>>) {
    for (i, color) in CardColor::ALL.iter().copied().enumerate() {
        let element_id = format!("{COLOR_SWATCH_PREFIX}{i}");
        let state = state.clone();
        let document_c = document.clone();
        dom::add_click_listener(document, &element_id, move || {
            state.borrow_mut().set_color(color);
            mark_selected_swatch(&document_c, i);
            preview::apply(&document_c, &state.borrow());
        });
    }

    for pattern in CardPattern::ALL {
        let element_id = format!("{PATTERN_BUTTON_PREFIX}{}", pattern.id());
        let state = state.clone();
        let document_c = document.clone();
        dom::add_click_listener(document, &element_id, move || {
            state.borrow_mut().set_pattern(pattern);
            mark_selected_pattern(&document_c, pattern);
            preview::apply(&document_c, &state.borrow());
        });
    }
}

fn mark_selected_swatch(document: &web::Document, selected: usize) {
    for i in 0..CardColor::ALL.len() {
        if let Some(el) = document.get_element_by_id(&format!("{COLOR_SWATCH_PREFIX}{i}")) {
            let _ = if i == selected {
                el.class_list().add_1(SELECTED_CLASS)
            } else {
                el.class_list().remove_1(SELECTED_CLASS)
            };
        }
    }
}

fn mark_selected_pattern(document: &web::Document, selected: CardPattern) {
    for pattern in CardPattern::ALL {
        let element_id = format!("{PATTERN_BUTTON_PREFIX}{}", pattern.id());
        if let Some(el) = document.get_element_by_id(&element_id) {
            let _ = if pattern == selected {
                el.class_list().add_1(SELECTED_CLASS)
            } else {
                el.class_list().remove_1(SELECTED_CLASS)
            };
        }
    }
}
