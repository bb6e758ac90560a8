//! Word tokenizer.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Split text into lowercase words of letters and decimal digits.
///
/// A word character is any code point in a Letter category (`Lu`, `Ll`,
/// `Lt`, `Lm`, `Lo`) or in `Nd`. Everything else, including other numerics
/// such as `²`, `½` and `Ⅻ`, acts as a separator. Empty and
/// punctuation-only input produce no tokens.
///
/// # Example
///
/// ```
/// use resonance_core::text::tokenize;
///
/// assert_eq!(tokenize("Hello, World! 123"), vec!["hello", "world", "123"]);
/// assert_eq!(tokenize("x² ½"), vec!["x"]);
/// assert!(tokenize("...!?").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if is_word_char(c) {
            // Lowercasing may expand to combining marks (`İ` → `i̇`); keep only
            // the word characters of the expansion.
            current.extend(c.to_lowercase().filter(|&l| is_word_char(l)));
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

fn is_word_char(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}
