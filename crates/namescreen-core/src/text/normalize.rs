/// Canonicalize a raw string for comparison.
///
/// Lowercases, deletes everything that is not a lowercase Latin letter or
/// whitespace, collapses whitespace runs to one space and trims. Digits,
/// punctuation and non-Latin letters are deleted, not transliterated;
/// accented letters are the collation step's business.
///
/// The output only contains `a-z` and single interior spaces, so the
/// function is idempotent.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;

    for c in s.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else if c.is_whitespace() {
            pending_space = true;
        }
    }

    out
}
