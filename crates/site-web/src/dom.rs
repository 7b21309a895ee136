use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_input_listener(input: &web::HtmlInputElement, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn input_element(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

/// Size the canvas backing store to the window inner size. Setting width or
/// height clears the surface contents.
pub fn sync_canvas_viewport_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width(width.max(1.0) as u32);
        canvas.set_height(height.max(1.0) as u32);
    }
}

/// Window resize listener keeping the canvas backing store at viewport size.
/// The coin pool is untouched by resizes; only the surface and the recycling
/// bounds follow. Dropping the hook removes the listener.
pub struct ResizeHook {
    closure: Closure<dyn FnMut()>,
}

impl ResizeHook {
    pub fn attach(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let window = web::window()?;
        let canvas = canvas.clone();
        let closure = Closure::wrap(
            Box::new(move || sync_canvas_viewport_size(&canvas)) as Box<dyn FnMut()>
        );
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { closure })
    }
}

impl Drop for ResizeHook {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            let _ =
                w.remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
        }
    }
}
