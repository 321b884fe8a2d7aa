//! Sign lexicon and display translations
//!
//! Static data only. Translation is applied to words after they are emitted
//! and never influences recognition.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignCategory {
    Alphabet,
    Word,
    Phrase,
}

/// Catalog entry for one recognizable sign
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignEntry {
    pub id: &'static str,
    pub gloss: &'static str,
    pub category: SignCategory,
    pub description: &'static str,
}

const fn entry(
    id: &'static str,
    gloss: &'static str,
    category: SignCategory,
    description: &'static str,
) -> SignEntry {
    SignEntry { id, gloss, category, description }
}

use SignCategory::{Alphabet, Phrase, Word};

/// Every gloss the built-in corpus can produce
pub const SIGN_LEXICON: [SignEntry; 27] = [
    entry("hello", "HELLO", Word, "Greeting, open palm"),
    entry("yes", "YES", Word, "Agreement, closed fist"),
    entry("no", "NO", Word, "Disagreement, index and middle meet the thumb"),
    entry("a", "A", Alphabet, "Letter A, fist with thumb along the side"),
    entry("b", "B", Alphabet, "Letter B, flat hand with thumb tucked"),
    entry("c", "C", Alphabet, "Letter C, curved hand"),
    entry("d", "D", Alphabet, "Letter D, index up, others looped"),
    entry("e", "E", Alphabet, "Letter E, curled fingers over tucked thumb"),
    entry("f", "F", Alphabet, "Letter F, index and thumb joined, others up"),
    entry("i", "I", Alphabet, "Letter I, pinky up"),
    entry("l", "L", Alphabet, "Letter L, thumb and index at a right angle"),
    entry("m", "M", Alphabet, "Letter M, three fingers over the thumb"),
    entry("n", "N", Alphabet, "Letter N, two fingers over the thumb"),
    entry("o", "O", Alphabet, "Letter O, fingertips touch the thumb"),
    entry("r", "R", Alphabet, "Letter R, crossed index and middle"),
    entry("s", "S", Alphabet, "Letter S, fist with thumb across the fingers"),
    entry("u", "U", Alphabet, "Letter U, index and middle together"),
    entry("v", "V", Alphabet, "Letter V, index and middle apart"),
    entry("w", "W", Alphabet, "Letter W, three fingers apart"),
    entry("y", "Y", Alphabet, "Letter Y, thumb and pinky out"),
    entry("victory", "VICTORY", Word, "Peace sign"),
    entry("i_love_you", "I LOVE YOU", Phrase, "Thumb, index and pinky extended"),
    entry("look", "LOOK", Word, "Pointing with the index finger"),
    entry("thumbs_up", "THUMBS UP", Phrase, "Approval, thumb raised"),
    entry("ok", "OK", Word, "Index and thumb form a ring"),
    entry("stop", "STOP", Word, "Flat palm facing out"),
    entry("rock", "ROCK", Word, "Index and pinky raised"),
];

/// Catalog entry for a gloss
pub fn lookup(gloss: &str) -> Option<&'static SignEntry> {
    SIGN_LEXICON.iter().find(|e| e.gloss == gloss)
}

// ============================================================================
// DISPLAY TRANSLATIONS
// ============================================================================

/// Language words are displayed in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayLanguage {
    #[default]
    English,
    Spanish,
    Hindi,
}

const SPANISH: [(&str, &str); 10] = [
    ("HELLO", "HOLA"),
    ("YES", "SÍ"),
    ("NO", "NO"),
    ("VICTORY", "VICTORIA"),
    ("I LOVE YOU", "TE QUIERO"),
    ("LOOK", "MIRA"),
    ("THUMBS UP", "GENIAL"),
    ("OK", "VALE"),
    ("STOP", "ALTO"),
    ("ROCK", "ROCK"),
];

const HINDI: [(&str, &str); 10] = [
    ("HELLO", "नमस्ते"),
    ("YES", "हाँ"),
    ("NO", "नहीं"),
    ("VICTORY", "विजय"),
    ("I LOVE YOU", "मुझे तुमसे प्यार है"),
    ("LOOK", "देखो"),
    ("THUMBS UP", "बढ़िया"),
    ("OK", "ठीक है"),
    ("STOP", "रुको"),
    ("ROCK", "रॉक"),
];

/// Display string for a label; falls back to the label itself
pub fn translate(label: &str, language: DisplayLanguage) -> &str {
    let table: &[(&str, &str)] = match language {
        DisplayLanguage::English => return label,
        DisplayLanguage::Spanish => &SPANISH,
        DisplayLanguage::Hindi => &HINDI,
    };
    table
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, display)| *display)
        .unwrap_or(label)
}
