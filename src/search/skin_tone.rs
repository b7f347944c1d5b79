//! Skin tone application.
//!
//! Emoji that depict people accept one of five Fitzpatrick modifiers. A tone
//! is applied by inserting the modifier after the leading scalar, but only
//! when that scalar is listed as a modifier base in UTS #51; anything else is
//! returned unchanged. Tone 0 means "no modifier" and strips any modifier the
//! input already carries.

/// Highest selectable tone. Tone values are 0 (none) through 5 (darkest).
pub const MAX_SKIN_TONE: u8 = 5;

/// Human-readable tone names, indexed by tone value.
pub const SKIN_TONE_NAMES: [&str; 6] =
    ["none", "white", "cream white", "light brown", "brown", "dark brown"];

/// Fitzpatrick modifiers for tones 1 through 5.
const MODIFIERS: [char; 5] = ['\u{1F3FB}', '\u{1F3FC}', '\u{1F3FD}', '\u{1F3FE}', '\u{1F3FF}'];

const VARIATION_SELECTOR_16: char = '\u{FE0F}';

/// Emoji_Modifier_Base ranges from UTS #51.
const MODIFIER_BASE_RANGES: &[(u32, u32)] = &[
    (0x261D, 0x261D),   // index pointing up
    (0x26F9, 0x26F9),   // person bouncing ball
    (0x270A, 0x270D),   // fists, victory hand, writing hand
    (0x1F385, 0x1F385), // santa claus
    (0x1F3C2, 0x1F3C4), // snowboarder, golfer, surfer
    (0x1F3C7, 0x1F3C7), // horse racing
    (0x1F3CA, 0x1F3CC), // swimmer, weight lifter, golfer
    (0x1F442, 0x1F443), // ear, nose
    (0x1F446, 0x1F450), // pointing hands through open hands
    (0x1F466, 0x1F478), // people
    (0x1F47C, 0x1F47C), // baby angel
    (0x1F481, 0x1F483), // information desk, guard, dancer
    (0x1F485, 0x1F487), // nail polish, massage, haircut
    (0x1F48F, 0x1F48F), // kiss
    (0x1F491, 0x1F491), // couple with heart
    (0x1F4AA, 0x1F4AA), // flexed biceps
    (0x1F574, 0x1F575), // levitating person, detective
    (0x1F57A, 0x1F57A), // man dancing
    (0x1F590, 0x1F590), // hand with fingers splayed
    (0x1F595, 0x1F596), // middle finger, vulcan salute
    (0x1F645, 0x1F647), // no good, ok gesture, bowing
    (0x1F64B, 0x1F64F), // raising hand through folded hands
    (0x1F6A3, 0x1F6A3), // rowboat
    (0x1F6B4, 0x1F6B6), // bicyclist, mountain bicyclist, pedestrian
    (0x1F6C0, 0x1F6C0), // bath
    (0x1F6CC, 0x1F6CC), // person in bed
    (0x1F90C, 0x1F90C), // pinched fingers
    (0x1F90F, 0x1F90F), // pinching hand
    (0x1F918, 0x1F91F), // sign of horns through love-you gesture
    (0x1F926, 0x1F926), // facepalm
    (0x1F930, 0x1F939), // pregnant woman through juggling
    (0x1F93D, 0x1F93E), // water polo, handball
    (0x1F977, 0x1F977), // ninja
    (0x1F9B5, 0x1F9B6), // leg, foot
    (0x1F9B8, 0x1F9B9), // superhero, supervillain
    (0x1F9BB, 0x1F9BB), // ear with hearing aid
    (0x1F9CD, 0x1F9CF), // standing, kneeling, deaf person
    (0x1F9D1, 0x1F9DD), // adult through elf
    (0x1FAC3, 0x1FAC5), // pregnant man, pregnant person, person with crown
    (0x1FAF0, 0x1FAF8), // hand gestures
];

fn is_modifier(c: char) -> bool {
    MODIFIERS.contains(&c)
}

fn is_modifier_base(c: char) -> bool {
    let code = c as u32;
    MODIFIER_BASE_RANGES
        .iter()
        .any(|&(start, end)| code >= start && code <= end)
}

/// Applies `tone` to `emoji`, returning a new string.
///
/// Any modifier already present is removed first. For tones 1 through 5 the
/// matching modifier is inserted after the leading scalar when it is a
/// modifier base; the variation selector is dropped at the same time since a
/// modified emoji is always presented in emoji style.
pub fn apply(emoji: &str, tone: u8) -> String {
    let stripped: String = emoji.chars().filter(|c| !is_modifier(*c)).collect();
    if tone == 0 {
        return stripped;
    }

    let mut chars = stripped.chars();
    let Some(first) = chars.next() else {
        return stripped;
    };
    if !is_modifier_base(first) {
        return stripped;
    }

    let modifier = MODIFIERS[usize::from(tone.clamp(1, MAX_SKIN_TONE)) - 1];
    let mut toned = String::with_capacity(stripped.len() + modifier.len_utf8());
    toned.push(first);
    toned.push(modifier);
    toned.extend(chars.filter(|c| *c != VARIATION_SELECTOR_16));
    toned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_zero_is_identity_for_plain_emoji() {
        assert_eq!(apply("👍", 0), "👍");
        assert_eq!(apply("🦄", 0), "🦄");
    }

    #[test]
    fn applies_modifier_to_a_base() {
        assert_eq!(apply("👍", 1), "👍🏻");
        assert_eq!(apply("👍", 3), "👍🏽");
        assert_eq!(apply("👍", 5), "👍🏿");
    }

    #[test]
    fn non_bases_are_returned_unchanged() {
        assert_eq!(apply("🦄", 4), "🦄");
        assert_eq!(apply("🌈", 2), "🌈");
        assert_eq!(apply("❤️", 5), "❤️");
    }

    #[test]
    fn replaces_an_existing_modifier() {
        assert_eq!(apply("👍🏿", 1), "👍🏻");
        assert_eq!(apply("👋🏽", 2), "👋🏼");
    }

    #[test]
    fn tone_zero_strips_an_existing_modifier() {
        assert_eq!(apply("👍🏿", 0), "👍");
        assert_eq!(apply("🤙🏼", 0), "🤙");
    }

    #[test]
    fn drops_the_variation_selector_when_toning() {
        // ✌️ carries U+FE0F; the toned form must not keep it.
        assert_eq!(apply("✌️", 2), "✌🏼");
        assert_eq!(apply("✌️", 0), "✌️");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(apply("", 3), "");
    }
}
