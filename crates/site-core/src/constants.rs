// Shared tuning constants for the coin field and the card customizer.

// Coin field
pub const COIN_DENSITY_DIVISOR: f32 = 50.0; // one coin per 50px of viewport width
pub const COIN_SPAWN_HEADROOM: f32 = 100.0; // extra space above the viewport at seed time
pub const COIN_MIN_SIZE: f32 = 30.0;
pub const COIN_SIZE_SPAN: f32 = 40.0;
pub const COIN_MIN_SPEED: f32 = 1.0;
pub const COIN_SPEED_SPAN: f32 = 3.0;
pub const COIN_SPIN_SPAN: f32 = 0.05; // spin is drawn from ±half this range

// Card input caps; the HTML controls carry matching maxlength attributes
pub const CARD_NAME_MAX_CHARS: usize = 24;
pub const CARD_NUMBER_MAX_CHARS: usize = 19; // 16 digits + 3 group separators
pub const CARD_EXPIRY_MAX_CHARS: usize = 5;

pub const CARD_NUMBER_GROUP: usize = 4;
pub const CARD_NUMBER_MAX_DIGITS: usize = 16;
pub const CARD_NUMBER_MIN_DIGITS: usize = 4;

// Card face gradient always falls off to black
pub const CARD_GRADIENT_END: &str = "#000000";
