//! Locale-insensitive equivalence at primary collation strength
//!
//! Two strings are equivalent when they spell the same base letters, ignoring
//! case and accents: "débárquér" and "DEBARQUER" compare equal, "debarquer"
//! and "debarquez" do not.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary-strength comparator.
///
/// Stateless: build it once and share it. Comparison works on raw input, before
/// any normalization has discarded accented letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleComparator;

impl LocaleComparator {
    pub fn new() -> Self {
        Self
    }

    /// True when `a` and `b` collate equal at primary strength
    pub fn equivalent(&self, a: &str, b: &str) -> bool {
        // Cheap exits before building keys
        if a == b {
            return true;
        }
        if a.is_ascii() && b.is_ascii() {
            return a.eq_ignore_ascii_case(b);
        }
        self.key(a) == self.key(b)
    }

    /// Primary collation key: base letters only, lowercased.
    ///
    /// Decomposition runs before case folding, so compatibility capitals
    /// such as "ℌ" or mathematical bold letters fold like their ASCII base.
    pub fn key(&self, s: &str) -> String {
        s.nfkd()
            .flat_map(char::to_lowercase)
            .filter(|c| !is_combining_mark(*c))
            .fold(String::with_capacity(s.len()), |mut key, c| {
                match fold_letter(c) {
                    Some(base) => key.push_str(base),
                    None => key.push(c),
                }
                key
            })
    }
}

/// Letters that are distinct code points but share a base letter at primary
/// strength, and do not decompose under NFKD.
fn fold_letter(c: char) -> Option<&'static str> {
    let base = match c {
        'ł' => "l",
        'ø' => "o",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ı' => "i",
        'ŧ' => "t",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'þ' => "th",
        _ => return None,
    };
    Some(base)
}
