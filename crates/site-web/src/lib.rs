#![cfg(target_arch = "wasm32")]
//! Browser glue for the XMONEY page. All behavioral state lives in
//! `site_core`; this crate wires DOM events to it and drives the coin canvas
//! draw loop.

mod constants;
mod dom;
mod events;
mod frame;
mod preview;
mod render;

use constants::{COIN_CANVAS_ID, COIN_IMAGE_URL};
use events::FormWiring;
use frame::FrameContext;
use site_core::{CardState, CoinField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Card customizer: wire the controls and paint the default state.
    let state = Rc::new(RefCell::new(CardState::default()));
    events::wire_form_inputs(&FormWiring {
        document: document.clone(),
        state: state.clone(),
    });
    events::wire_style_pickers(&document, &state);
    preview::apply(&document, &state.borrow());

    // Coin canvas. A missing canvas or 2D context disables the animation and
    // nothing else on the page.
    let canvas = match document
        .get_element_by_id(COIN_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    {
        Some(c) => c,
        None => {
            log::warn!("missing #{COIN_CANVAS_ID}, coin animation disabled");
            return Ok(());
        }
    };
    let ctx = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
    {
        Some(ctx) => ctx,
        None => {
            log::warn!("2d context unavailable, coin animation disabled");
            return Ok(());
        }
    };

    dom::sync_canvas_viewport_size(&canvas);
    let resize = dom::ResizeHook::attach(&canvas);

    // The pool is seeded only once the sprite is decodable. A failed load
    // leaves the canvas empty and the page otherwise intact.
    let image = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{e:?}"))?;
    image.set_src(COIN_IMAGE_URL);
    if let Err(e) = JsFuture::from(image.decode()).await {
        log::warn!("coin sprite failed to decode: {e:?}");
        return Ok(());
    }

    let field = CoinField::new(
        canvas.width() as f32,
        canvas.height() as f32,
        js_sys::Date::now() as u64,
    );
    log::info!("seeded {} coins", field.len());

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(
        field, canvas, ctx, image, resize,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
