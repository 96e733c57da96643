//! Spellcheck pass over every free-text field of every resume record.
//!
//! Read-only with respect to the store. Output order: experience, education,
//! skill; then record order; then field order; then token order. Repeated
//! misspellings are reported every time they occur.

use serde::{Deserialize, Serialize};

use crate::models::resume::Record;
use crate::resume::dictionary::SpellDictionary;
use crate::resume::store::ResumeSnapshot;

/// Tokens longer than this are never looked up (URLs, hashes, joined identifiers).
pub const MAX_TOKEN_LEN: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCorrection {
    pub before: String,
    pub after: String,
}

/// Runs over a snapshot so no store lock is held while the dictionary works.
pub fn spellcheck(
    snapshot: &ResumeSnapshot,
    dictionary: &dyn SpellDictionary,
) -> Vec<SpellCorrection> {
    let mut corrections = Vec::new();
    check_records(&snapshot.experience, dictionary, &mut corrections);
    check_records(&snapshot.education, dictionary, &mut corrections);
    check_records(&snapshot.skill, dictionary, &mut corrections);
    corrections
}

fn check_records<T: Record>(
    records: &[T],
    dictionary: &dyn SpellDictionary,
    out: &mut Vec<SpellCorrection>,
) {
    for record in records {
        for text in record.spellcheck_fields() {
            out.extend(check_text(text, dictionary));
        }
    }
}

/// Corrections for the unknown words of one piece of text.
pub fn check_text(text: &str, dictionary: &dyn SpellDictionary) -> Vec<SpellCorrection> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| word.chars().count() <= MAX_TOKEN_LEN)
        .filter(|word| word.chars().any(char::is_alphabetic))
        .filter(|word| !dictionary.is_known(word))
        .filter_map(|word| {
            let suggestion = dictionary.correction(word)?;
            if suggestion == word.to_lowercase() {
                return None;
            }
            Some(SpellCorrection {
                before: word.to_string(),
                after: match_casing(word, &suggestion),
            })
        })
        .collect()
}

/// Applies the casing style of `original` to `correction`.
///
/// Title-case wins over all-caps, so a single capital letter like "A" is
/// treated as title-case.
pub fn match_casing(original: &str, correction: &str) -> String {
    if is_title_case(original) {
        capitalize(correction)
    } else if is_upper_case(original) {
        correction.to_uppercase()
    } else {
        correction.to_string()
    }
}

/// First cased character upper-case, every following cased character lower-case.
fn is_title_case(word: &str) -> bool {
    let mut cased = word.chars().filter(|c| c.is_uppercase() || c.is_lowercase());
    match cased.next() {
        Some(first) if first.is_uppercase() => cased.all(char::is_lowercase),
        _ => false,
    }
}

fn is_upper_case(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
