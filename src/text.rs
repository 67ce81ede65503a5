//! Text normalization and Turkish collation.
//!
//! Search is case- and whitespace-insensitive, so every value is passed
//! through [`normalize`] before substring matching. Dropdown options, tag
//! chips and the student ranking are ordered with [`compare_tr`], a
//! three-level collation tailored for the Turkish alphabet:
//!
//! - **primary**: character class, then letter position in
//!   `a b c ç d e f g ğ h ı i j k l m n o ö p q r s ş t u ü v w x y z`;
//!   whitespace and punctuation come first (`_` before `-`, `$` last),
//!   then digits, then letters; `ß` weighs as `ss`
//! - **secondary**: accents (`â` after `a`, combining marks)
//! - **tertiary**: lowercase before uppercase
//!
//! Remaining ties fall back to code point order so the result never depends
//! on the input order.

use std::cmp::Ordering;
use std::collections::HashSet;

/// Turkish alphabet, extended with the Latin letters Turkish omits.
const TR_ALPHABET: [char; 32] = [
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'ö',
    'p', 'q', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'w', 'x', 'y', 'z',
];

/// Accented letters that sort with a base letter: (letter, base, accent weight).
const ACCENTED: &[(char, char, u8)] = &[
    ('â', 'a', 1),
    ('á', 'a', 2),
    ('à', 'a', 3),
    ('ä', 'a', 4),
    ('ã', 'a', 5),
    ('å', 'a', 6),
    ('ê', 'e', 1),
    ('é', 'e', 2),
    ('è', 'e', 3),
    ('ë', 'e', 4),
    ('î', 'i', 1),
    ('í', 'i', 2),
    ('ì', 'i', 3),
    ('ï', 'i', 4),
    ('ô', 'o', 1),
    ('ó', 'o', 2),
    ('ò', 'o', 3),
    ('õ', 'o', 5),
    ('û', 'u', 1),
    ('ú', 'u', 2),
    ('ù', 'u', 3),
    ('ñ', 'n', 5),
    ('ý', 'y', 2),
    ('ÿ', 'y', 4),
];

/// ASCII punctuation and symbols in collation order. Whitespace sorts
/// before all of them.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Character classes, in primary order.
const CLASS_SEPARATOR: u8 = 0;
const CLASS_DIGIT: u8 = 1;
const CLASS_LETTER: u8 = 2;
const CLASS_OTHER: u8 = 3;

/// Lowercase and trim a possibly absent value.
///
/// Absent input normalizes to the empty string.
pub fn normalize(text: Option<&str>) -> String {
    text.unwrap_or_default().to_lowercase().trim().to_string()
}

/// True when `needle` (already normalized) occurs in the normalized `haystack`.
pub fn contains_normalized(haystack: Option<&str>, needle: &str) -> bool {
    normalize(haystack).contains(needle)
}

/// Collation key for Turkish ordering; compare keys with `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    primary: Vec<(u8, u32)>,
    secondary: Vec<u8>,
    tertiary: Vec<u8>,
}

/// Build the collation key of `text`.
pub fn sort_key(text: &str) -> SortKey {
    let mut key = SortKey {
        primary: Vec::with_capacity(text.len()),
        secondary: Vec::with_capacity(text.len()),
        tertiary: Vec::with_capacity(text.len()),
    };

    for c in text.chars() {
        if is_combining_mark(c) {
            // No primary weight; the mark only distinguishes at level two.
            key.secondary.push(mark_weight(c));
            continue;
        }

        let upper = c.is_uppercase();
        let lower = turkish_lowercase(c);

        if lower == 'ß' {
            // Same letters as "ss", told apart only at the last level.
            let s = (CLASS_LETTER, alphabet_position('s').unwrap_or(u32::from('s')));
            key.primary.extend([s, s]);
            key.secondary.extend([0, 0]);
            key.tertiary.extend([2 + u8::from(upper), 2]);
            continue;
        }

        let (class, rank, accent) = if let Some(pos) = alphabet_position(lower) {
            (CLASS_LETTER, pos, 0)
        } else if let Some(&(_, base, accent)) = ACCENTED.iter().find(|(l, _, _)| *l == lower) {
            (CLASS_LETTER, alphabet_position(base).unwrap_or(u32::from(base)), accent)
        } else if let Some(digit) = c.to_digit(10) {
            (CLASS_DIGIT, digit, 0)
        } else if let Some(rank) = separator_rank(c) {
            (CLASS_SEPARATOR, rank, 0)
        } else {
            (CLASS_OTHER, u32::from(lower), 0)
        };

        key.primary.push((class, rank));
        key.secondary.push(accent);
        key.tertiary.push(u8::from(upper));
    }

    key
}

/// Compare two strings using Turkish collation.
///
/// The ordering is total: strings that collate equal at every level are
/// ordered by code point.
pub fn compare_tr(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

/// Remove exact duplicates and sort with [`compare_tr`].
///
/// Values that differ only by case are distinct (`"a"` and `"A"` both stay).
pub fn distinct_sorted<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = values
        .into_iter()
        .map(Into::into)
        .filter(|value| seen.insert(value.clone()))
        .collect();
    unique.sort_by_cached_key(|value| (sort_key(value), value.clone()));
    unique
}

fn turkish_lowercase(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

fn alphabet_position(c: char) -> Option<u32> {
    TR_ALPHABET
        .iter()
        .position(|&letter| letter == c)
        .map(|pos| pos as u32)
}

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

fn mark_weight(c: char) -> u8 {
    // 0x300..=0x36F fits after the accent table weights.
    (u32::from(c) - 0x300 + 16) as u8
}

/// Primary rank among separators: whitespace, then ASCII punctuation in
/// [`PUNCTUATION_ORDER`], then the rest of the punctuation blocks.
fn separator_rank(c: char) -> Option<u32> {
    const ASCII_BASE: u32 = 0x1_0000;
    const GENERAL_BASE: u32 = 0x2_0000;

    if c.is_whitespace() {
        return Some(u32::from(c));
    }
    if let Some(pos) = PUNCTUATION_ORDER.chars().position(|p| p == c) {
        return Some(ASCII_BASE + pos as u32);
    }
    if is_general_punctuation(c) {
        return Some(GENERAL_BASE + u32::from(c));
    }
    None
}

fn is_general_punctuation(c: char) -> bool {
    matches!(c, '\u{2000}'..='\u{206F}' | '\u{00A1}'..='\u{00BF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize(Some("  Uzay Oyunu ")), "uzay oyunu");
    }

    #[test]
    fn test_normalize_absent_is_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("   ")), "");
    }

    #[test]
    fn test_contains_normalized() {
        assert!(contains_normalized(Some("Labirent KAÇIŞ"), "labirent"));
        assert!(contains_normalized(Some("Çılgın Yarış"), "çılgın"));
        assert!(!contains_normalized(None, "x"));
        assert!(contains_normalized(None, ""));
    }

    #[test]
    fn test_distinct_sorted_keeps_case_variants() {
        let result = distinct_sorted(["b", "a", "b", "A"]);
        assert_eq!(result, vec!["a", "A", "b"]);
    }

    #[test]
    fn test_distinct_sorted_is_input_order_independent() {
        let forward = distinct_sorted(["Zeynep", "Çağrı", "Can", "Ömer", "Oğuz"]);
        let backward = distinct_sorted(["Oğuz", "Ömer", "Can", "Çağrı", "Zeynep"]);
        assert_eq!(forward, backward);
        assert_eq!(forward, vec!["Can", "Çağrı", "Oğuz", "Ömer", "Zeynep"]);
    }

    #[test]
    fn test_dotless_i_before_dotted_i() {
        assert_eq!(compare_tr("ılık", "ilik"), Ordering::Less);
        assert_eq!(compare_tr("Işık", "İnci"), Ordering::Less);
        // Turkish capital I folds to ı, not i.
        assert_eq!(compare_tr("Irmak", "ilk"), Ordering::Less);
    }

    #[test]
    fn test_turkish_letters_follow_their_base() {
        assert_eq!(compare_tr("cx", "ça"), Ordering::Less);
        assert_eq!(compare_tr("ça", "d"), Ordering::Less);
        assert_eq!(compare_tr("gz", "ğa"), Ordering::Less);
        assert_eq!(compare_tr("sz", "şa"), Ordering::Less);
        assert_eq!(compare_tr("uz", "üa"), Ordering::Less);
        assert_eq!(compare_tr("oz", "öa"), Ordering::Less);
    }

    #[test]
    fn test_accent_is_secondary() {
        // Primary difference in a later letter outranks the accent.
        assert_eq!(compare_tr("kâr", "kas"), Ordering::Less);
        assert_eq!(compare_tr("kar", "kâr"), Ordering::Less);
    }

    #[test]
    fn test_case_is_tertiary() {
        assert_eq!(compare_tr("ali", "Ali"), Ordering::Less);
        assert_eq!(compare_tr("Ali", "alp"), Ordering::Less);
    }

    #[test]
    fn test_classes_order() {
        assert_eq!(compare_tr(" ", "1"), Ordering::Less);
        assert_eq!(compare_tr("9", "a"), Ordering::Less);
        assert_eq!(compare_tr("z", "α"), Ordering::Less);
    }

    #[test]
    fn test_punctuation_order() {
        assert_eq!(compare_tr("_x", "-y"), Ordering::Less);
        assert_eq!(compare_tr(" z", "_x"), Ordering::Less);
        assert_eq!(compare_tr("-y", ".a"), Ordering::Less);
        assert_eq!(compare_tr("$", "0"), Ordering::Less);
        let sorted = distinct_sorted(["(b)", "a", "1", "_a", "-a", " a"]);
        assert_eq!(sorted, vec![" a", "_a", "-a", "(b)", "1", "a"]);
    }

    #[test]
    fn test_sharp_s_sorts_as_double_s() {
        let sorted = distinct_sorted(["zz", "ß", "st", "ss", "sr"]);
        assert_eq!(sorted, vec!["sr", "ss", "ß", "st", "zz"]);
        assert_eq!(compare_tr("Strasse", "Straße"), Ordering::Less);
        assert_eq!(compare_tr("Straße", "Strasst"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_tr("Ada", "Ada Lovelace"), Ordering::Less);
    }

    #[test]
    fn test_compare_is_total() {
        assert_eq!(compare_tr("a", "a"), Ordering::Equal);
        assert_ne!(compare_tr("a", "A"), Ordering::Equal);
    }
}
