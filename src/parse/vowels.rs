//! Vowel and diphthong classification
//!
//! Table-driven predicates over single characters for Latin and polytonic
//! Greek. Every table is plain data so it can be inspected and tested on its
//! own; nothing here uses pattern matching on strings.
//!
//! Input is expected to be NFC-normalized (precomposed) text. Decomposed
//! sequences are only recognized through the combining diaeresis U+0308.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Latin vowels, including macron, breve, circumflex and diaeresis variants
const LATIN_VOWELS: &str = "aeiouyæœāēīōūȳĀĒĪŌŪȲăĕĭŏŭĂĔĬŎŬâêîôûŷÂÊÎÔÛŶäëïöüÿÄËÏÖÜŸ";

/// Greek vowels with every breathing, accent, length and iota-subscript
/// precomposition in the table
const GREEK_VOWELS: &str = "αεηιουωϊϋ\
    ἀἁἂἃἄἅἆἇὀὁὂὃὄὅἐἑἒἓἔἕἠἡἢἣἤἥἦἧἰἱἲἳἴἵἶἷὐὑὒὓὔὕὖὗὠὡὢὣὤὥὦὧ\
    ᾀᾁᾂᾃᾄᾅᾆᾇᾐᾑᾒᾓᾔᾕᾖᾗᾠᾡᾢᾣᾤᾥᾦᾧ\
    ὰάᾰᾱᾲᾳᾴᾶᾷὲέὴήῂῃῄῆῇὶίῐῑῒΐῖῗόὸὺύῠῡῢΰῦῧὼώῲῳῴῶῷ";

/// Characters carrying a diaeresis (trema), including the combining mark
const DIAERESIS: &str = "\u{0308}ϊϋΪΫΐΰῒῗῢῧ";

/// Greek vowels carrying an acute, grave or circumflex accent
const ACCENTED: &str = "άέήίόύώὰὲὴὶὸὺὼᾶῆῖῦῶἄἅἔἕἤἥἴἵὄὅὔὕὤὥᾴῄῴ";

/// Greek vowels carrying a smooth or rough breathing
const BREATHING: &str = "ἀἁἂἃἄἅἆἇἐἑἒἓἔἕἠἡἢἣἤἥἦἧἰἱἲἳἴἵἶἷὀὁὂὃὄὅὐὑὒὓὔὕὖὗὠὡὢὣὤὥὦὧ\
    ᾀᾁᾂᾃᾄᾅᾆᾇᾐᾑᾒᾓᾔᾕᾖᾗᾠᾡᾢᾣᾤᾥᾦᾧ";

/// Base vowel -> every decorated lower-case form that strips to it.
///
/// Latin entries cover length marks only; a Latin diaeresis keeps its own
/// identity so that `aë` never reads as the `ae` diphthong.
const BASE_VOWEL_GROUPS: &[(char, &str)] = &[
    ('α', "άὰᾶἀἁἂἃἄἅἆἇᾀᾁᾂᾃᾄᾅᾆᾇᾰᾱᾲᾳᾴᾷ"),
    ('ε', "έὲἐἑἒἓἔἕ"),
    ('η', "ήὴῆἠἡἢἣἤἥἦἧᾐᾑᾒᾓᾔᾕᾖᾗῂῃῄῇ"),
    ('ι', "ίὶῖϊΐῒῗἰἱἲἳἴἵἶἷῐῑ"),
    ('ο', "όὸὀὁὂὃὄὅ"),
    ('υ', "ύὺῦϋΰῢῧὐὑὒὓὔὕὖὗῠῡ"),
    ('ω', "ώὼῶὠὡὢὣὤὥὦὧᾠᾡᾢᾣᾤᾥᾦᾧῲῳῴῷ"),
    ('a', "āăâ"),
    ('e', "ēĕê"),
    ('i', "īĭî"),
    ('o', "ōŏô"),
    ('u', "ūŭû"),
    ('y', "ȳŷ"),
];

/// Base-vowel pairs that may form a diphthong
const DIPHTHONG_PAIRS: &[(char, char)] = &[
    ('a', 'e'),
    ('a', 'u'),
    ('α', 'ι'),
    ('ε', 'ι'),
    ('ο', 'ι'),
    ('υ', 'ι'),
    ('α', 'υ'),
    ('ε', 'υ'),
    ('ο', 'υ'),
    ('η', 'υ'),
];

static VOWELS: Lazy<HashSet<char>> =
    Lazy::new(|| LATIN_VOWELS.chars().chain(GREEK_VOWELS.chars()).collect());

static DIAERESIS_SET: Lazy<HashSet<char>> = Lazy::new(|| DIAERESIS.chars().collect());

static ACCENT_SET: Lazy<HashSet<char>> = Lazy::new(|| ACCENTED.chars().collect());

static BREATHING_SET: Lazy<HashSet<char>> = Lazy::new(|| BREATHING.chars().collect());

static BASE_VOWELS: Lazy<HashMap<char, char>> = Lazy::new(|| {
    BASE_VOWEL_GROUPS
        .iter()
        .flat_map(|(base, forms)| forms.chars().map(move |form| (form, *base)))
        .collect()
});

/// Lower-case a character, keeping it unchanged when lower-casing would
/// expand it into several characters
fn lower(ch: char) -> char {
    let mut lowered = ch.to_lowercase();
    match (lowered.next(), lowered.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// True if `ch` is a vowel of either alphabet (case-insensitive)
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch) || VOWELS.contains(&lower(ch))
}

/// True if `ch` carries a diaeresis
pub fn has_diaeresis(ch: char) -> bool {
    DIAERESIS_SET.contains(&ch)
}

/// True if `ch` carries an acute, grave or circumflex accent
pub fn has_accent(ch: char) -> bool {
    ACCENT_SET.contains(&ch)
}

/// True if `ch` carries a smooth or rough breathing
pub fn has_breathing(ch: char) -> bool {
    BREATHING_SET.contains(&ch)
}

/// Strip diacritics from a vowel, returning its plain lower-case letter.
///
/// Characters outside the tables come back lower-cased.
pub fn base_vowel(ch: char) -> char {
    let lowered = lower(ch);
    BASE_VOWELS.get(&lowered).copied().unwrap_or(lowered)
}

/// Decide whether two adjacent vowels form one syllable nucleus.
///
/// The pair must strip to a known diphthong. It is then split into hiatus
/// when any of these hold, checked in order:
/// 1. the second vowel has a diaeresis;
/// 2. the first vowel is accented and the second has neither breathing nor accent;
/// 3. the second vowel has a breathing and the first is accented.
pub fn is_true_diphthong(first: char, second: char) -> bool {
    let pair = (base_vowel(first), base_vowel(second));
    if !DIPHTHONG_PAIRS.contains(&pair) {
        return false;
    }

    if has_diaeresis(second) {
        return false;
    }

    if has_accent(first) && !has_breathing(second) && !has_accent(second) {
        return false;
    }

    if has_breathing(second) && has_accent(first) {
        return false;
    }

    true
}
