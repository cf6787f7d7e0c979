//! Query and key normalization.
//!
//! Every string that enters the index — dataset makes and models, alias
//! phrases, and user queries — passes through [`normalize`] so that case,
//! punctuation, whitespace, and hyphenation differences cannot cause a miss.
//!
//! The procedure, in order:
//!
//! 1. Lower-case everything.
//! 2. Keep letters, digits, and hyphens; every other character becomes a
//!    space. Runs of spaces collapse to one.
//! 3. Delete hyphens inside tokens: `"C-Class"` → `"cclass"`,
//!    `"CR-V"` → `"crv"`, `"3-Series"` → `"3series"`.
//! 4. Merge a single-character token into an immediately preceding token of
//!    at most two characters, so spaced-out abbreviations land on the same
//!    key as their hyphenated forms: `"cr v"` → `"crv"`, `"gt r"` → `"gtr"`,
//!    `"mx 5"` → `"mx5"`. Longer words are left alone — `"model s"` and
//!    `"c class"` keep their space.
//!
//! The function is pure and idempotent.

/// Normalizes a raw make/model string into an index key.
///
/// Returns an empty string for input that carries no usable signal
/// (empty, whitespace-only, or punctuation-only).
///
/// # Examples
///
/// ```
/// use clq_lookup::normalize;
///
/// assert_eq!(normalize("Mercedes-Benz C-Class"), "mercedesbenz cclass");
/// assert_eq!(normalize("  Tesla   Model   S  "), "tesla model s");
/// assert_eq!(normalize("CR V"), "crv");
/// assert_eq!(normalize("!!!"), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    // Pass 1: lower-case; strip everything except letters, digits, and
    // hyphens, turning the stripped characters into spaces.
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            cleaned.extend(ch.to_lowercase());
        } else if ch == '-' {
            cleaned.push('-');
        } else {
            cleaned.push(' ');
        }
    }

    // Pass 2: tokenize (collapsing whitespace runs), delete hyphens, and
    // merge single-character abbreviation fragments leftwards.
    let mut tokens: Vec<String> = Vec::new();
    for raw_token in cleaned.split_whitespace() {
        let token: String = raw_token.chars().filter(|&c| c != '-').collect();
        if token.is_empty() {
            continue;
        }

        if token.chars().count() == 1 {
            if let Some(prev) = tokens.last_mut() {
                if prev.chars().count() <= 2 {
                    prev.push_str(&token);
                    continue;
                }
            }
        }

        tokens.push(token);
    }

    tokens.join(" ")
}
