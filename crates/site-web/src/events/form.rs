use crate::constants::{EXPIRY_INPUT_ID, NAME_INPUT_ID, NUMBER_INPUT_ID};
use crate::dom;
use crate::preview;
use site_core::CardState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct FormWiring {
    pub document: web::Document,
    pub state: Rc<RefCell<CardState>>,
}

/// Wire the three text controls of the card form.
///
/// Each input event runs the matching sanitizer and writes the stored value
/// back into the control, so the controls always display exactly what the
/// state holds and a rejected expiry edit visibly reverts.
pub fn wire_form_inputs(wiring: &FormWiring) {
    if let Some(input) = dom::input_element(&wiring.document, NAME_INPUT_ID) {
        let state = wiring.state.clone();
        let document = wiring.document.clone();
        let input_el = input.clone();
        dom::add_input_listener(&input, move || {
            state.borrow_mut().set_name(&input_el.value());
            input_el.set_value(state.borrow().name());
            preview::apply(&document, &state.borrow());
        });
    }

    if let Some(input) = dom::input_element(&wiring.document, NUMBER_INPUT_ID) {
        let state = wiring.state.clone();
        let document = wiring.document.clone();
        let input_el = input.clone();
        dom::add_input_listener(&input, move || {
            state.borrow_mut().set_number(&input_el.value());
            input_el.set_value(state.borrow().number());
            preview::apply(&document, &state.borrow());
        });
    }

    if let Some(input) = dom::input_element(&wiring.document, EXPIRY_INPUT_ID) {
        let state = wiring.state.clone();
        let document = wiring.document.clone();
        let input_el = input.clone();
        dom::add_input_listener(&input, move || {
            // A discarded update keeps the previous value, with no message.
            let _ = state.borrow_mut().set_expiry(&input_el.value());
            input_el.set_value(state.borrow().expiry());
            preview::apply(&document, &state.borrow());
        });
    }
}
