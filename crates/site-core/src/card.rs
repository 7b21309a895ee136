//! Card customization state and input sanitation.
//!
//! The preview card is cosmetic: values are sanitized, never validated, so a
//! formally invalid number or expiry still renders. All rules live here so the
//! web layer only forwards raw control values and writes the stored result
//! back.

use crate::constants::{
    CARD_EXPIRY_MAX_CHARS, CARD_GRADIENT_END, CARD_NAME_MAX_CHARS, CARD_NUMBER_GROUP,
    CARD_NUMBER_MAX_CHARS, CARD_NUMBER_MAX_DIGITS, CARD_NUMBER_MIN_DIGITS,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardInputError {
    #[error("expiry is {len} characters after sanitizing, limit is {CARD_EXPIRY_MAX_CHARS}")]
    ExpiryTooLong { len: usize },
}

/// Fixed card face palette. Each tint blends into black on the preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardColor {
    #[default]
    Onyx,
    Graphite,
    Midnight,
    Indigo,
    Violet,
    Orchid,
    Garnet,
}

impl CardColor {
    pub const ALL: [CardColor; 7] = [
        CardColor::Onyx,
        CardColor::Graphite,
        CardColor::Midnight,
        CardColor::Indigo,
        CardColor::Violet,
        CardColor::Orchid,
        CardColor::Garnet,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            CardColor::Onyx => "#0f0f0f",
            CardColor::Graphite => "#1a1a1a",
            CardColor::Midnight => "#0f172a",
            CardColor::Indigo => "#1e1b4b",
            CardColor::Violet => "#3b0764",
            CardColor::Orchid => "#4a044e",
            CardColor::Garnet => "#450a0a",
        }
    }
}

/// Decorative overlay printed on the card face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardPattern {
    #[default]
    Geometric,
    Waves,
    Dots,
    None,
}

impl CardPattern {
    pub const ALL: [CardPattern; 4] = [
        CardPattern::Geometric,
        CardPattern::Waves,
        CardPattern::Dots,
        CardPattern::None,
    ];

    /// Stable identifier used for DOM element ids.
    pub fn id(self) -> &'static str {
        match self {
            CardPattern::Geometric => "geometric",
            CardPattern::Waves => "waves",
            CardPattern::Dots => "dots",
            CardPattern::None => "none",
        }
    }

    /// Inline CSS declarations for the pattern layers; empty for `None`.
    /// Pure lookup, the strings never change at runtime.
    pub fn css(self) -> &'static str {
        match self {
            CardPattern::Geometric => {
                "background-image: \
                 radial-gradient(circle at 100% 0%, rgba(255, 215, 0, 0.15) 20%, transparent 20%), \
                 radial-gradient(circle at 0% 100%, rgba(255, 215, 0, 0.15) 20%, transparent 20%), \
                 linear-gradient(45deg, rgba(255, 215, 0, 0.05) 25%, transparent 25%, transparent 75%, rgba(255, 215, 0, 0.05) 75%), \
                 linear-gradient(-45deg, rgba(255, 215, 0, 0.05) 25%, transparent 25%, transparent 75%, rgba(255, 215, 0, 0.05) 75%); \
                 background-size: 60px 60px, 60px 60px, 120px 120px, 120px 120px; \
                 background-position: 0 0, 0 0, 0 0, 0 0;"
            }
            CardPattern::Waves => {
                "background-image: \
                 repeating-linear-gradient(45deg, rgba(255, 215, 0, 0.05) 0px, rgba(255, 215, 0, 0.05) 2px, transparent 2px, transparent 4px), \
                 repeating-linear-gradient(-45deg, rgba(255, 215, 0, 0.05) 0px, rgba(255, 215, 0, 0.05) 2px, transparent 2px, transparent 4px), \
                 linear-gradient(to right, rgba(255, 215, 0, 0.1), rgba(255, 215, 0, 0.05)); \
                 background-size: 30px 30px, 30px 30px, 100% 100%;"
            }
            CardPattern::Dots => {
                "background-image: \
                 radial-gradient(circle, rgba(255, 215, 0, 0.1) 1px, transparent 1px), \
                 radial-gradient(circle, rgba(255, 215, 0, 0.05) 2px, transparent 2px); \
                 background-size: 30px 30px, 60px 60px; \
                 background-position: 0 0, 15px 15px;"
            }
            CardPattern::None => "",
        }
    }
}

/// Live state behind the card preview. Mutated only by user input events; the
/// stored values are what the preview and the controls both display.
#[derive(Clone, Debug)]
pub struct CardState {
    color: CardColor,
    pattern: CardPattern,
    name: String,
    number: String,
    expiry: String,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            color: CardColor::default(),
            pattern: CardPattern::default(),
            name: "YOUR NAME".to_owned(),
            number: "XXXX XXXX XXXX XXXX".to_owned(),
            expiry: "MM/YY".to_owned(),
        }
    }
}

impl CardState {
    pub fn color(&self) -> CardColor {
        self.color
    }

    pub fn pattern(&self) -> CardPattern {
        self.pattern
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    pub fn set_color(&mut self, color: CardColor) {
        self.color = color;
    }

    pub fn set_pattern(&mut self, pattern: CardPattern) {
        self.pattern = pattern;
    }

    /// Holder name is stored uppercased and capped at 24 characters.
    pub fn set_name(&mut self, raw: &str) {
        self.name = raw
            .to_uppercase()
            .chars()
            .take(CARD_NAME_MAX_CHARS)
            .collect();
    }

    /// Number is stored in display form (groups of 4), capped at 19
    /// characters.
    pub fn set_number(&mut self, raw: &str) {
        self.number = format_card_number(raw)
            .chars()
            .take(CARD_NUMBER_MAX_CHARS)
            .collect();
    }

    /// Expiry keeps only digits and `/`. An update whose sanitized form is
    /// longer than 5 characters is discarded and the previous value retained.
    pub fn set_expiry(&mut self, raw: &str) -> Result<(), CardInputError> {
        let stripped: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '/')
            .collect();
        let len = stripped.chars().count();
        if len > CARD_EXPIRY_MAX_CHARS {
            return Err(CardInputError::ExpiryTooLong { len });
        }
        self.expiry = stripped;
        Ok(())
    }

    /// Full inline style for the card face: color gradient first, then the
    /// pattern layers. The pattern's background-image declarations override
    /// the gradient image when a pattern is selected.
    pub fn face_style(&self) -> String {
        format!(
            "background: {}; {}",
            card_background(self.color),
            self.pattern.css()
        )
    }
}

/// Gradient from the selected tint into black, used as the card base.
pub fn card_background(color: CardColor) -> String {
    format!(
        "linear-gradient(135deg, {} 0%, {} 100%)",
        color.hex(),
        CARD_GRADIENT_END
    )
}

/// Reformat a raw card number for display.
///
/// Whitespace and non-digits are removed; the first run of 4 to 16 digits is
/// split into groups of 4 joined by single spaces. Inputs with fewer than 4
/// digits come back verbatim so partial typing is preserved; digits past the
/// 16th are dropped.
pub fn format_card_number(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter(char::is_ascii_digit)
        .collect();
    if cleaned.len() < CARD_NUMBER_MIN_DIGITS {
        return raw.to_owned();
    }
    let run = &cleaned[..cleaned.len().min(CARD_NUMBER_MAX_DIGITS)];
    let mut parts = Vec::with_capacity(run.len().div_ceil(CARD_NUMBER_GROUP));
    let mut i = 0;
    while i < run.len() {
        let end = (i + CARD_NUMBER_GROUP).min(run.len());
        parts.push(&run[i..end]);
        i = end;
    }
    parts.join(" ")
}
