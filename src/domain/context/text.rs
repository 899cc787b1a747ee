//! Text normalization shared by the classifier and the extractor.
//!
//! Matching runs on a folded copy of the text: lowercase with Spanish
//! diacritics removed. Folding maps every char to exactly one char, so a
//! byte span found in the folded text can be mapped back to the original
//! text to recover the value as the user wrote it. The byte offset table is
//! built once per scan so mapping a span costs two lookups.

use regex::Regex;

/// Collapses every run of whitespace into a single space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Folds a single char for matching.
///
/// Chars whose lowercase form expands to several chars are kept as-is so the
/// folded text stays char-aligned with the original.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    let lowered = match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    };
    match lowered {
        'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

/// Folds a whole string for matching.
pub fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Returns true if the word starts with an uppercase letter.
pub fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Conversation text prepared for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedText {
    original: String,
    folded: String,
    /// Original byte offset for every folded byte offset, plus the end.
    offsets: Vec<usize>,
}

impl ScannedText {
    /// Normalizes whitespace and builds the folded copy.
    pub fn new(text: &str) -> Self {
        let original = normalize_whitespace(text);
        let mut folded = String::with_capacity(original.len());
        let mut offsets = Vec::with_capacity(original.len() + 1);
        for (at, c) in original.char_indices() {
            let f = fold_char(c);
            offsets.extend(std::iter::repeat(at).take(f.len_utf8()));
            folded.push(f);
        }
        offsets.push(original.len());
        Self {
            original,
            folded,
            offsets,
        }
    }

    /// The whitespace-normalized text as written.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The folded text used for matching.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Returns true if there is nothing to scan.
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Maps a byte span of the folded text back to the original text.
    ///
    /// Both ends must lie on char boundaries of the folded text.
    pub fn original_span(&self, start: usize, end: usize) -> &str {
        &self.original[self.offsets[start]..self.offsets[end]]
    }

    /// Returns true if the original char at folded offset `start` is uppercase.
    pub fn is_capitalized_at(&self, start: usize) -> bool {
        self.offsets
            .get(start)
            .and_then(|&at| self.original.get(at..))
            .is_some_and(is_capitalized)
    }

    /// Returns the original text of the first match of `pattern`, or of its
    /// capture `group` when the pattern has one.
    pub fn first_match(&self, pattern: &Regex, group: usize) -> Option<&str> {
        pattern
            .captures(&self.folded)
            .and_then(|caps| caps.get(group))
            .map(|m| self.original_span(m.start(), m.end()))
    }

    /// Returns true if `pattern` matches anywhere in the folded text.
    pub fn matches(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.folded)
    }

    /// Returns up to `max` whitespace-separated words starting at `start`
    /// in the folded text, as `(folded_start, folded_end)` byte spans.
    pub fn words_from(&self, start: usize, max: usize) -> Vec<(usize, usize)> {
        let mut spans = Vec::with_capacity(max);
        let mut word_start: Option<usize> = None;
        for (i, c) in self.folded[start..].char_indices() {
            let at = start + i;
            if c.is_whitespace() {
                if let Some(ws) = word_start.take() {
                    spans.push((ws, at));
                    if spans.len() == max {
                        return spans;
                    }
                }
            } else if word_start.is_none() {
                word_start = Some(at);
            }
        }
        if let Some(ws) = word_start {
            spans.push((ws, self.folded.len()));
        }
        spans.truncate(max);
        spans
    }
}

/// Builds an alternation of literal terms, longest first so multi-word
/// entries win over their prefixes.
pub fn alternation(terms: &[&str]) -> String {
    let mut sorted: Vec<&str> = terms.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    sorted
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|")
}

/// Builds a pattern matching any of `terms` as whole words, allowing a
/// plural `s`/`es` suffix.
///
/// Terms are expected in folded form.
pub fn keyword_pattern(terms: &[&str]) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\b(?:{})(?:s|es)?\b", alternation(terms)))
}

/// Spelled-out numbers accepted wherever a count or quantity is expected.
pub const NUMBER_WORDS: &[(&str, u32)] = &[
    ("un", 1),
    ("una", 1),
    ("uno", 1),
    ("dos", 2),
    ("tres", 3),
    ("cuatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("siete", 7),
    ("ocho", 8),
    ("nueve", 9),
    ("diez", 10),
    ("once", 11),
    ("doce", 12),
    ("quince", 15),
    ("veinte", 20),
    ("treinta", 30),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("fifteen", 15),
    ("twenty", 20),
    ("thirty", 30),
];

/// Regex fragment matching a number written as digits or as a word.
pub fn number_fragment() -> String {
    let words: Vec<&str> = NUMBER_WORDS.iter().map(|(w, _)| *w).collect();
    format!(r"(?:\d{{1,3}}|{})", alternation(&words))
}

/// Parses a folded number token produced by [`number_fragment`].
pub fn parse_number(token: &str) -> Option<u32> {
    let token = token.trim();
    if let Ok(n) = token.parse::<u32>() {
        return Some(n);
    }
    let folded = fold(token);
    NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == folded)
        .map(|(_, n)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod folding {
        use super::*;

        #[test]
        fn strips_spanish_diacritics() {
            assert_eq!(fold("Bogotá México Perú año"), "bogota mexico peru ano");
        }

        #[test]
        fn keeps_char_count() {
            let text = "¿Qué MÉDICO? Ñandú İstanbul";
            assert_eq!(fold(text).chars().count(), text.chars().count());
        }

        #[test]
        fn normalizes_whitespace() {
            assert_eq!(normalize_whitespace("  hola \n\t  mundo  "), "hola mundo");
        }

        #[test]
        fn detects_capitalized_words() {
            assert!(is_capitalized("Ávila"));
            assert!(!is_capitalized("ávila"));
            assert!(!is_capitalized(""));
        }
    }

    mod scanned_text {
        use super::*;

        #[test]
        fn maps_folded_spans_back_to_original() {
            let scanned = ScannedText::new("Salgo de Bogotá hacia Cancún");
            let start = scanned.folded().find("cancun").unwrap();
            let end = start + "cancun".len();
            assert_eq!(scanned.original_span(start, end), "Cancún");
        }

        #[test]
        fn maps_spans_around_multibyte_folds() {
            let scanned = ScannedText::new("ÑANDÚ  en Perú y Ávila");
            assert_eq!(scanned.folded(), "nandu en peru y avila");
            let peru = scanned.folded().find("peru").unwrap();
            assert_eq!(scanned.original_span(peru, peru + 4), "Perú");
            let avila = scanned.folded().find("avila").unwrap();
            assert_eq!(scanned.original_span(avila, scanned.folded().len()), "Ávila");
            assert_eq!(scanned.original_span(0, scanned.folded().len()), scanned.original());
        }

        #[test]
        fn capitalization_read_from_original() {
            let scanned = ScannedText::new("viaje a Ávila o ávila");
            let first = scanned.folded().find("avila").unwrap();
            let second = scanned.folded().rfind("avila").unwrap();
            assert!(scanned.is_capitalized_at(first));
            assert!(!scanned.is_capitalized_at(second));
            assert!(!scanned.is_capitalized_at(scanned.folded().len()));
        }

        #[test]
        fn long_text_maps_spans_at_the_tail() {
            let text = format!("{}Cancún", "año b ".repeat(40_000));
            let scanned = ScannedText::new(&text);
            let start = scanned.folded().rfind("cancun").unwrap();
            assert_eq!(scanned.original_span(start, start + 6), "Cancún");
        }

        #[test]
        fn first_match_returns_original_text() {
            let scanned = ScannedText::new("Voy a Perú");
            let pattern = Regex::new(r"a (peru)").unwrap();
            assert_eq!(scanned.first_match(&pattern, 1), Some("Perú"));
        }

        #[test]
        fn words_from_returns_spans() {
            let scanned = ScannedText::new("a  nueva york mañana");
            let start = scanned.folded().find("nueva").unwrap();
            let words: Vec<&str> = scanned
                .words_from(start, 2)
                .into_iter()
                .map(|(s, e)| scanned.original_span(s, e))
                .collect();
            assert_eq!(words, vec!["nueva", "york"]);
        }

        #[test]
        fn empty_text_is_empty() {
            assert!(ScannedText::new("   ").is_empty());
        }
    }

    mod numbers {
        use super::*;

        #[test]
        fn parses_digits_and_words() {
            assert_eq!(parse_number("15"), Some(15));
            assert_eq!(parse_number("dos"), Some(2));
            assert_eq!(parse_number("Three"), Some(3));
            assert_eq!(parse_number("muchos"), None);
        }

        #[test]
        fn keyword_pattern_allows_plurals_but_not_prefixes() {
            let pattern = keyword_pattern(&["auto", "perro"]).unwrap();
            assert!(pattern.is_match("mis autos"));
            assert!(pattern.is_match("dos perros"));
            assert!(!pattern.is_match("una autorizacion"));
        }
    }
}
