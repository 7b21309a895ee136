use site_core::CoinField;
use web_sys as web;

/// Clear the surface and draw every coin at its current transform, in spawn
/// order. The draw is skipped per coin while the sprite image is not ready;
/// callers still step the field so motion is seamless once loading completes.
pub fn draw_field(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    image: &web::HtmlImageElement,
    field: &CoinField,
) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    for coin in field.coins() {
        ctx.save();
        let _ = ctx.translate(coin.pos.x as f64, coin.pos.y as f64);
        let _ = ctx.rotate(coin.rotation as f64);
        if image.complete() {
            let size = coin.size as f64;
            let half = size / 2.0;
            let _ = ctx
                .draw_image_with_html_image_element_and_dw_and_dh(image, -half, -half, size, size);
        }
        ctx.restore();
    }
}
