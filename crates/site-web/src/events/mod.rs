pub mod form;
pub mod picker;

pub use form::{wire_form_inputs, FormWiring};
pub use picker::wire_style_pickers;
