// Host-side tests for the card customizer state and formatting rules.

use site_core::{
    card_background, format_card_number, CardColor, CardInputError, CardPattern, CardState,
};

#[test]
fn format_groups_eight_digits() {
    assert_eq!(format_card_number("4111 1111"), "4111 1111");
    assert_eq!(format_card_number("41111111"), "4111 1111");
}

#[test]
fn format_short_input_falls_back_verbatim() {
    // Fewer than 4 digits preserves whatever was typed, not an empty string
    assert_eq!(format_card_number("12"), "12");
    assert_eq!(format_card_number(""), "");
    assert_eq!(format_card_number("ab1c2"), "ab1c2");
    assert_eq!(format_card_number("1 2 3"), "1 2 3");
}

#[test]
fn format_full_sixteen_digit_number() {
    assert_eq!(
        format_card_number("4111111111111111"),
        "4111 1111 1111 1111"
    );
    assert_eq!(
        format_card_number("4111-1111-1111-1111"),
        "4111 1111 1111 1111"
    );
}

#[test]
fn format_drops_digits_past_sixteen() {
    // 20 digits in: only the first 16 survive
    assert_eq!(
        format_card_number("41111111111111112222"),
        "4111 1111 1111 1111"
    );
}

#[test]
fn format_cleans_before_matching() {
    // Non-digits are removed first, then the run is matched, so interspersed
    // separators do not split the run
    assert_eq!(format_card_number("4x1y1z1 1111"), "4111 1111");
    assert_eq!(format_card_number("  4111\t1111  "), "4111 1111");
}

#[test]
fn format_preserves_digit_count_between_4_and_16() {
    let digits = "0123456789012345";
    for len in 4..=16 {
        let input = &digits[..len];
        let formatted = format_card_number(input);
        let out_digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(out_digits, input, "digits dropped at len {len}");
        for group in formatted.split(' ') {
            assert!(
                !group.is_empty() && group.len() <= 4,
                "bad group {group:?} at len {len}"
            );
        }
        assert!(
            !formatted.contains("  "),
            "double separator at len {len}: {formatted:?}"
        );
    }
}

#[test]
fn defaults_match_the_placeholder_card() {
    let state = CardState::default();
    assert_eq!(state.name(), "YOUR NAME");
    assert_eq!(state.number(), "XXXX XXXX XXXX XXXX");
    assert_eq!(state.expiry(), "MM/YY");
    assert_eq!(state.color(), CardColor::Onyx);
    assert_eq!(state.pattern(), CardPattern::Geometric);
}

#[test]
fn name_is_stored_uppercase_and_capped() {
    let mut state = CardState::default();
    state.set_name("satoshi nakamoto");
    assert_eq!(state.name(), "SATOSHI NAKAMOTO");

    state.set_name("abcdefghijklmnopqrstuvwxyz");
    assert_eq!(state.name().chars().count(), 24);
    assert_eq!(state.name(), "ABCDEFGHIJKLMNOPQRSTUVWX");
    assert!(state.name().chars().all(|c| !c.is_lowercase()));
}

#[test]
fn number_setter_stores_display_form() {
    let mut state = CardState::default();
    state.set_number("41111111");
    assert_eq!(state.number(), "4111 1111");

    state.set_number("4111111111111111");
    assert_eq!(state.number(), "4111 1111 1111 1111");
    assert_eq!(state.number().len(), 19);

    // Below the 4-digit threshold the raw input is kept
    state.set_number("12");
    assert_eq!(state.number(), "12");
}

#[test]
fn expiry_strips_then_accepts_up_to_five() {
    let mut state = CardState::default();
    assert!(state.set_expiry("12/2").is_ok());
    assert_eq!(state.expiry(), "12/2");

    // The keystroke that made the raw value "12/25x": stripped to "12/25"
    assert!(state.set_expiry("12/25x").is_ok());
    assert_eq!(state.expiry(), "12/25");

    assert!(state.set_expiry("1a2b/c25").is_ok());
    assert_eq!(state.expiry(), "12/25");

    assert!(state.set_expiry("").is_ok());
    assert_eq!(state.expiry(), "");
}

#[test]
fn expiry_rejection_retains_previous_value() {
    let mut state = CardState::default();
    state.set_expiry("12/25").unwrap();

    let err = state.set_expiry("12/255").unwrap_err();
    assert_eq!(err, CardInputError::ExpiryTooLong { len: 6 });
    assert_eq!(state.expiry(), "12/25", "rejected update must not store");

    // Non-digit noise beyond the cap is stripped before the length check
    assert!(state.set_expiry("1x2x/x2x5").is_ok());
    assert_eq!(state.expiry(), "12/25");
}

#[test]
fn expiry_keeps_every_slash_within_the_cap() {
    // The sanitation rule only strips and length-checks; it does not enforce
    // slash placement
    let mut state = CardState::default();
    state.set_expiry("1/2/3").unwrap();
    assert_eq!(state.expiry(), "1/2/3");
}

#[test]
fn palette_is_seven_distinct_dark_tints() {
    let hexes: Vec<&str> = CardColor::ALL.iter().map(|c| c.hex()).collect();
    assert_eq!(
        hexes,
        [
            "#0f0f0f", "#1a1a1a", "#0f172a", "#1e1b4b", "#3b0764", "#4a044e", "#450a0a"
        ]
    );
    for (i, a) in hexes.iter().enumerate() {
        for b in &hexes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn pattern_css_is_a_pure_lookup() {
    assert!(CardPattern::Geometric.css().contains("background-image"));
    assert!(CardPattern::Geometric.css().contains("60px 60px"));
    assert!(CardPattern::Waves.css().contains("repeating-linear-gradient"));
    assert!(CardPattern::Dots.css().contains("15px 15px"));
    assert_eq!(CardPattern::None.css(), "");
}

#[test]
fn face_style_combines_gradient_and_pattern() {
    let mut state = CardState::default();
    state.set_color(CardColor::Violet);
    state.set_pattern(CardPattern::Dots);
    let style = state.face_style();
    assert!(style.contains("linear-gradient(135deg, #3b0764 0%, #000000 100%)"));
    assert!(style.contains("radial-gradient"));

    state.set_pattern(CardPattern::None);
    let style = state.face_style();
    assert!(style.contains("#3b0764"));
    assert!(!style.contains("radial-gradient"));
}

#[test]
fn card_background_uses_selected_tint() {
    for color in CardColor::ALL {
        let bg = card_background(color);
        assert!(bg.starts_with("linear-gradient(135deg, "));
        assert!(bg.contains(color.hex()));
        assert!(bg.ends_with("#000000 100%)"));
    }
}
