//! Spellcheck dictionary collaborator.
//!
//! `SpellDictionary` is the seam the spellcheck pass talks to. The default
//! `WordFrequencyDictionary` ranks candidate corrections by word frequency,
//! trying edit distance 1 before edit distance 2. The distance-2 candidate set
//! grows with the square of the word length, so it is only searched for short
//! words.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

const DEFAULT_WORDLIST: &str = include_str!("../../data/words.txt");
const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
/// Longest word for which distance-2 candidates are searched.
pub const MAX_DISTANCE_TWO_LEN: usize = 10;

pub trait SpellDictionary: Send + Sync {
    /// Whether `word` is a known word. Case-insensitive.
    fn is_known(&self, word: &str) -> bool;

    /// Best lowercase correction for an unknown word, if any.
    fn correction(&self, word: &str) -> Option<String>;
}

/// Frequency-ranked word list.
pub struct WordFrequencyDictionary {
    frequencies: HashMap<String, u64>,
}

impl WordFrequencyDictionary {
    /// Dictionary built from the word list embedded in the binary.
    pub fn embedded() -> Self {
        Self::parse(DEFAULT_WORDLIST)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list '{}'", path.display()))?;
        let dictionary = Self::parse(&text);
        info!(
            "Loaded {} words from {}",
            dictionary.frequencies.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Parses `word [count]` lines. Blank lines and `#` comments are skipped.
    /// Lines without a count are ranked by position: earlier means more frequent.
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();
        let total = lines.len() as u64;

        let mut frequencies = HashMap::with_capacity(lines.len());
        for (rank, line) in lines.iter().enumerate() {
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else { continue };
            let count = parts
                .next()
                .and_then(|c| c.parse::<u64>().ok())
                .unwrap_or(total - rank as u64);
            let entry = frequencies.entry(word.to_lowercase()).or_insert(0);
            *entry = (*entry).max(count);
        }

        Self { frequencies }
    }

    fn most_frequent<'a>(&self, candidates: impl Iterator<Item = &'a String>) -> Option<String> {
        candidates
            .filter_map(|w| self.frequencies.get(w).map(|&f| (w, f)))
            // Ties break alphabetically so results are deterministic.
            .max_by(|(wa, fa), (wb, fb)| fa.cmp(fb).then_with(|| wb.cmp(wa)))
            .map(|(w, _)| w.clone())
    }
}

impl SpellDictionary for WordFrequencyDictionary {
    fn is_known(&self, word: &str) -> bool {
        self.frequencies.contains_key(&word.to_lowercase())
    }

    fn correction(&self, word: &str) -> Option<String> {
        let word = word.to_lowercase();
        if self.frequencies.contains_key(&word) {
            return Some(word);
        }

        let one = single_edits(&word);
        if let Some(best) = self.most_frequent(one.iter()) {
            return Some(best);
        }
        if word.chars().count() > MAX_DISTANCE_TWO_LEN {
            return None;
        }

        // Streamed per first edit; the full distance-2 set is never built.
        one.iter()
            .filter_map(|edit| {
                let two = single_edits(edit);
                self.most_frequent(two.iter())
            })
            .map(|w| {
                let f = self.frequencies[&w];
                (w, f)
            })
            .max_by(|(wa, fa), (wb, fb)| fa.cmp(fb).then_with(|| wb.cmp(wa)))
            .map(|(w, _)| w)
    }
}

/// All strings one delete, transpose, replace or insert away from `word`.
fn single_edits(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = HashSet::new();

    for i in 0..=chars.len() {
        let (left, right) = chars.split_at(i);

        if !right.is_empty() {
            edits.insert(left.iter().chain(&right[1..]).collect());
        }
        if right.len() > 1 {
            edits.insert(
                left.iter()
                    .chain([right[1], right[0]].iter())
                    .chain(&right[2..])
                    .collect(),
            );
        }
        for c in ALPHABET.chars() {
            if !right.is_empty() {
                edits.insert(
                    left.iter()
                        .chain(std::iter::once(&c))
                        .chain(&right[1..])
                        .collect(),
                );
            }
            edits.insert(
                left.iter()
                    .chain(std::iter::once(&c))
                    .chain(right.iter())
                    .collect(),
            );
        }
    }

    edits
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_known_is_case_insensitive() {
        let dict = WordFrequencyDictionary::parse("company\npython\n");
        assert!(dict.is_known("Company"));
        assert!(dict.is_known("PYTHON"));
        assert!(!dict.is_known("comapny"));
    }

    #[test]
    fn test_transposition_is_corrected() {
        let dict = WordFrequencyDictionary::parse("company\n");
        assert_eq!(dict.correction("Comapny").as_deref(), Some("company"));
    }

    #[test]
    fn test_distance_two_correction() {
        let dict = WordFrequencyDictionary::parse("software\n");
        assert_eq!(dict.correction("sftwre").as_deref(), Some("software"));
    }

    #[test]
    fn test_distance_one_preferred_over_more_frequent_distance_two() {
        let dict = WordFrequencyDictionary::parse("cart 1\ncat 1000\n");
        // "cartt" is one edit from "cart" and two from "cat".
        assert_eq!(dict.correction("cartt").as_deref(), Some("cart"));
    }

    #[test]
    fn test_frequency_breaks_ties_between_candidates() {
        let dict = WordFrequencyDictionary::parse("bat 5\ncat 50\n");
        assert_eq!(dict.correction("zat").as_deref(), Some("cat"));
    }

    #[test]
    fn test_rank_order_used_without_counts() {
        let dict = WordFrequencyDictionary::parse("cat\nbat\n");
        assert_eq!(dict.correction("zat").as_deref(), Some("cat"));
    }

    #[test]
    fn test_long_word_gets_no_distance_two_correction() {
        let dict = WordFrequencyDictionary::parse("infrastructure\n");
        // Two edits away, but longer than the distance-2 limit.
        assert_eq!(dict.correction("infrastrcutre"), None);
        // One edit away still corrects.
        assert_eq!(
            dict.correction("infrastrucure").as_deref(),
            Some("infrastructure")
        );
    }

    #[test]
    fn test_no_correction_for_distant_word() {
        let dict = WordFrequencyDictionary::parse("python\n");
        assert_eq!(dict.correction("xylophone"), None);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let dict = WordFrequencyDictionary::parse("# header\n\n  rust  \n");
        assert!(dict.is_known("rust"));
        assert!(!dict.is_known("#"));
    }

    #[test]
    fn test_embedded_list_knows_seed_vocabulary() {
        let dict = WordFrequencyDictionary::embedded();
        for word in [
            "Software",
            "Developer",
            "Company",
            "Python",
            "University",
            "Tech",
            "latency",
            "hiring",
        ] {
            assert!(dict.is_known(word), "{word} should be known");
        }
    }

    #[test]
    fn test_embedded_list_is_a_full_english_list() {
        let dict = WordFrequencyDictionary::embedded();
        assert!(dict.frequencies.len() > 20_000);
        assert_eq!(dict.correction("teh").as_deref(), Some("the"));
    }

    #[test]
    fn test_from_path_loads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kubernetes 10").unwrap();
        writeln!(file, "docker 5").unwrap();
        let dict = WordFrequencyDictionary::from_path(file.path()).unwrap();
        assert!(dict.is_known("Docker"));
        assert_eq!(dict.correction("kubernetse").as_deref(), Some("kubernetes"));
    }

    #[test]
    fn test_from_path_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(WordFrequencyDictionary::from_path(&dir.path().join("nope.txt")).is_err());
    }
}
