// Element ids wired by the glue code; index.html keeps these in sync.

pub const COIN_CANVAS_ID: &str = "coin-canvas";

pub const CARD_PREVIEW_ID: &str = "card-preview";
pub const PREVIEW_NAME_ID: &str = "preview-name";
pub const PREVIEW_NUMBER_ID: &str = "preview-number";
pub const PREVIEW_EXPIRY_ID: &str = "preview-expiry";

pub const NAME_INPUT_ID: &str = "card-name";
pub const NUMBER_INPUT_ID: &str = "card-number";
pub const EXPIRY_INPUT_ID: &str = "card-expiry";

// Swatches are color-0 .. color-6, pattern buttons pattern-<pattern id>
pub const COLOR_SWATCH_PREFIX: &str = "color-";
pub const PATTERN_BUTTON_PREFIX: &str = "pattern-";
pub const SELECTED_CLASS: &str = "selected";

// Coin sprite artwork. The draw loop tolerates this loading slowly or never.
pub const COIN_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1622020457014-24a745608d1d?auto=format&fit=crop&w=100&h=100";
