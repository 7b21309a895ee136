use crate::dom::ResizeHook;
use crate::render;
use site_core::CoinField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame needs. Owned by the draw loop closure for
/// the lifetime of the page.
pub struct FrameContext {
    pub field: CoinField,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub image: web::HtmlImageElement,
    // Keeps the window resize listener registered exactly as long as the loop.
    _resize: Option<ResizeHook>,
}

impl FrameContext {
    pub fn new(
        field: CoinField,
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        image: web::HtmlImageElement,
        resize: Option<ResizeHook>,
    ) -> Self {
        Self {
            field,
            canvas,
            ctx,
            image,
            _resize: resize,
        }
    }

    pub fn frame(&mut self) {
        // Recycling bounds follow whatever backing size the resize hook set.
        self.field
            .resize(self.canvas.width() as f32, self.canvas.height() as f32);
        render::draw_field(&self.ctx, &self.canvas, &self.image, &self.field);
        self.field.step();
    }
}

/// Run `frame` once per display refresh, forever. There is no cancellation
/// path: the loop stops only when the hosting page is discarded.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
