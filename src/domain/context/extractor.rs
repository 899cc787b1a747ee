//! Entity extraction: locating specific values for canonical fields.
//!
//! A field is only present when a specific value was found. Vague
//! qualifiers ("joven", "cachorro", "mascota") never satisfy a field.
//! Presence depends only on whether some match exists, so appending text to
//! a conversation can add facts but never remove them.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use super::lexicon::{self, is_known_place};
use super::rules;
use super::text::{self, keyword_pattern, number_fragment, parse_number, ScannedText};
use crate::domain::foundation::{Category, FieldKey};

/// Bounds applied while extracting numeric facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionLimits {
    /// Model years accepted for the auto `year` field.
    pub vehicle_years: RangeInclusive<u16>,
}

impl ExtractionLimits {
    pub fn new(vehicle_years: RangeInclusive<u16>) -> Self {
        Self { vehicle_years }
    }
}

/// Oldest plausible human age.
const MAX_PERSON_AGE: u32 = 120;

/// Oldest plausible pet age, in years. Months and weeks scale from it.
const MAX_PET_AGE: u32 = 40;

/// Words that may follow an anchor as part of a place name.
const MAX_PLACE_WORDS: usize = 4;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

fn compile_keywords(terms: &[&str]) -> Regex {
    keyword_pattern(terms).unwrap_or_else(|e| panic!("invalid keyword table: {e}"))
}

// Anchors match only the anchor phrase, so an anchor word that follows
// another ("to visit Paris") is still tried. Anchors in the `named` group may
// introduce any proper noun; the others ("a", "para") only a known place.

static DESTINATION_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\b(?:(?P<named>con destino a|rumbo a|hacia|to|visitar|visit|conocer)|para|al|a)\s+",
    )
});

static ORIGIN_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\b(?P<named>desde|salgo de|salimos de|saldre de|saldremos de|saliendo de|parto de|partimos de|soy de|somos de|vivo en|vivimos en|resido en|from|leaving|departing)\s+",
    )
});

static RESIDENCE_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\b(?P<named>vivo en|vivimos en|resido en|radico en|estoy en|circula en|circulo en|live in|living in|based in|i'm in|im in)\s+",
    )
});

static PLACE: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"\b(?:{})\b", text::alternation(lexicon::PLACES))));

static DURATION: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"\b({})[\s-]*(?:dias?|semanas?|meses|mes|noches?|days?|weeks?|months?|nights?)\b",
        number_fragment()
    ))
});

static TRAVELER_COUNT: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"\b({})\s+(?:personas?|viajeros?|adultos?|pasajeros?|travell?ers?|people|persons?|adults?|passengers?)\b",
        number_fragment()
    ))
});

static TRAVELER_GROUP: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"\b(?:somos|seremos|vamos|we are|we're|there are)\s+({})\b",
        number_fragment()
    ))
});

static TRAVELER_SOLO: Lazy<Regex> = Lazy::new(|| {
    compile(r"\b(?:viajo|viajare|voy|ire|travel(?:l?ing)?|going)\s+(?:sol[oa]|alone|by myself)\b|\bsolo yo\b")
});

static PURPOSES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    lexicon::TRIP_PURPOSES
        .iter()
        .map(|(value, words)| (*value, compile_keywords(words)))
        .collect()
});

static BRAND: Lazy<Regex> = Lazy::new(|| compile_keywords(lexicon::VEHICLE_BRANDS));

static YEAR: Lazy<Regex> = Lazy::new(|| compile(r"\b((?:19|20)\d{2})\b"));

static DOG: Lazy<Regex> = Lazy::new(|| {
    compile_keywords(&[lexicon::DOG_WORDS, lexicon::DOG_BREEDS].concat())
});

static CAT: Lazy<Regex> = Lazy::new(|| {
    compile_keywords(&[lexicon::CAT_WORDS, lexicon::CAT_BREEDS].concat())
});

static BREED: Lazy<Regex> = Lazy::new(|| {
    compile_keywords(&[lexicon::DOG_BREEDS, lexicon::CAT_BREEDS, lexicon::MIXED_BREEDS].concat())
});

static PET_AGE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"\b({})[\s-]*(anos?|meses|mes|semanas?|years?|yrs?|months?|weeks?)\b",
        number_fragment()
    ))
});

static PERSON_AGE_UNIT: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"\b({})[\s-]*(?:anos|ano|years?|yrs?)\b",
        number_fragment()
    ))
});

static PERSON_AGE_ANCHOR: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(?:edad|age|aged)\s*(?:de|es|is|of|:)?\s*(\d{1,3})\b"));

static GENDERS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    lexicon::GENDERS
        .iter()
        .map(|(value, words)| (*value, compile_keywords(words)))
        .collect()
});

// ---------------------------------------------------------------------------
// Field extractors
// ---------------------------------------------------------------------------

/// Travel destination: a place anchored by "a", "hacia", "to", ..., else the
/// first recognized place that is not the origin.
pub fn destination(scanned: &ScannedText, _limits: &ExtractionLimits) -> Option<String> {
    let span = anchored_place(scanned, &DESTINATION_ANCHOR).or_else(|| {
        let origin = anchored_place(scanned, &ORIGIN_ANCHOR);
        PLACE
            .find_iter(scanned.folded())
            .map(|m| (m.start(), m.end()))
            .find(|&(start, end)| {
                origin.map_or(true, |(o_start, o_end)| end <= o_start || start >= o_end)
            })
    })?;
    Some(span_text(scanned, span))
}

/// Travel origin: a place anchored by "desde", "salgo de", "from", ...
pub fn origin(scanned: &ScannedText, _limits: &ExtractionLimits) -> Option<String> {
    anchored_place(scanned, &ORIGIN_ANCHOR).map(|span| span_text(scanned, span))
}

/// Trip length: a number next to a time unit.
pub fn duration(scanned: &ScannedText, _limits: &ExtractionLimits) -> Option<String> {
    DURATION
        .captures_iter(scanned.folded())
        .filter(|caps| caps.get(1).and_then(|n| parse_number(n.as_str())).is_some_and(|n| n > 0))
        .find_map(|caps| caps.get(0))
        .map(|m| scanned.original_span(m.start(), m.end()).to_string())
}

/// Number of travelers, as a count.
pub fn travelers(scanned: &ScannedText, _limits: &ExtractionLimits) -> Option<String> {
    let counted = [&*TRAVELER_COUNT, &*TRAVELER_GROUP].into_iter().find_map(|pattern| {
        pattern
            .captures_iter(scanned.folded())
            .filter_map(|caps| caps.get(1).and_then(|n| parse_number(n.as_str())))
            .find(|n| *n > 0)
    });
    counted
        .or_else(|| scanned.matches(&TRAVELER_SOLO).then_some(1))
        .map(|n| n.to_string())
}

/// Trip purpose as `business`, `study`, or `leisure`.
pub fn purpose(scanned: &ScannedText, _limits: &ExtractionLimits) -> Option<String> {
    PURPOSES
        .iter()
        .find(|(_, pattern)| scanned.matches(pattern))
        .map(|(value, _)| value.to_string())
}

/// Vehicle brand as written.
pub fn brand(scanned: &ScannedText, _limits: &ExtractionLimits) -> Option<String> {
    scanned.first_match(&BRAND, 0).map(str::to_string)
}

/// Vehicle model year within the configured range.
pub fn vehicle_year(scanned: &ScannedText, limits: &ExtractionLimits) -> Option<String> {
    YEAR.captures_iter(scanned.folded())
        .filter_map(|caps| caps.get(1).and_then(|m| m.as_str().parse::<u16>().ok()))
        .find(|year| limits.vehicle_years.contains(year))
        .map(|year| year.to_string())
}

/// Country or city: any recognized place, else a residence-anchored proper noun.
pub fn place(scanned: &ScannedText, _limits: &ExtractionLimits) -> Option<String> {
    PLACE
        .find(scanned.folded())
        .map(|m| (m.start(), m.end()))
        .or_else(|| anchored_place(scanned, &RESIDENCE_ANCHOR))
        .map(|span| span_text(scanned, span))
}

/// Pet species as `dog` or `cat`. Generic pet words do not count.
pub fn species(scanned: &ScannedText, _limits: &ExtractionLimits) -> Option<String> {
    if scanned.matches(&DOG) {
        Some("dog".to_string())
    } else if scanned.matches(&CAT) {
        Some("cat".to_string())
    } else {
        None
    }
}

/// Pet breed as written.
pub fn breed(scanned: &ScannedText, _limits: &ExtractionLimits) -> Option<String> {
    scanned.first_match(&BREED, 0).map(str::to_string)
}

/// Pet age: a number next to an age unit. "joven", "viejo", "cachorro" and
/// other descriptors without a number are not an age.
pub fn pet_age(scanned: &ScannedText, _limits: &ExtractionLimits) -> Option<String> {
    numeric_span(scanned, &PET_AGE, |caps| {
        let unit = caps.get(2).map_or("", |m| m.as_str());
        if unit.starts_with("mes") || unit.starts_with("month") {
            MAX_PET_AGE * 12
        } else if unit.starts_with("semana") || unit.starts_with("week") {
            MAX_PET_AGE * 52
        } else {
            MAX_PET_AGE
        }
    })
}

/// Age of the insured person.
pub fn person_age(scanned: &ScannedText, _limits: &ExtractionLimits) -> Option<String> {
    numeric_span(scanned, &PERSON_AGE_UNIT, |_| MAX_PERSON_AGE).or_else(|| {
        PERSON_AGE_ANCHOR
            .captures_iter(scanned.folded())
            .filter_map(|caps| caps.get(1).and_then(|m| parse_number(m.as_str())))
            .find(|age| (1..=MAX_PERSON_AGE).contains(age))
            .map(|age| age.to_string())
    })
}

/// Gender as `female` or `male`.
pub fn gender(scanned: &ScannedText, _limits: &ExtractionLimits) -> Option<String> {
    GENDERS
        .iter()
        .find(|(_, pattern)| scanned.matches(pattern))
        .map(|(value, _)| value.to_string())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// First match of `pattern` whose number (capture 1) is within `1..=max`,
/// where `max` may depend on the rest of the match.
fn numeric_span(
    scanned: &ScannedText,
    pattern: &Regex,
    max: impl Fn(&Captures) -> u32,
) -> Option<String> {
    pattern
        .captures_iter(scanned.folded())
        .filter(|caps| {
            caps.get(1)
                .and_then(|n| parse_number(n.as_str()))
                .is_some_and(|n| (1..=max(caps)).contains(&n))
        })
        .find_map(|caps| caps.get(0))
        .map(|m| scanned.original_span(m.start(), m.end()).to_string())
}

/// Byte span in the folded text.
type Span = (usize, usize);

fn span_text(scanned: &ScannedText, (start, end): Span) -> String {
    scanned.original_span(start, end).to_string()
}

/// First place name following any match of `anchor`.
fn anchored_place(scanned: &ScannedText, anchor: &Regex) -> Option<Span> {
    anchor.captures_iter(scanned.folded()).find_map(|caps| {
        let end = caps.get(0)?.end();
        place_at(scanned, end, caps.name("named").is_some())
    })
}

/// End of a span with trailing punctuation removed.
fn trimmed_end(scanned: &ScannedText, (start, end): Span) -> usize {
    let word = &scanned.folded()[start..end];
    start + word.trim_end_matches(|c: char| !c.is_alphanumeric()).len()
}

/// Reads a place name starting at a folded byte offset: the longest known
/// place, else (when `proper_nouns` is set) a run of capitalized words.
fn place_at(scanned: &ScannedText, start: usize, proper_nouns: bool) -> Option<Span> {
    let words = scanned.words_from(start, MAX_PLACE_WORDS);
    let first = *words.first()?;

    for n in (1..=words.len()).rev() {
        let end = trimmed_end(scanned, words[n - 1]);
        if end > first.0 && is_known_place(&scanned.folded()[first.0..end]) {
            return Some((first.0, end));
        }
    }

    if !proper_nouns {
        return None;
    }
    let first_end = trimmed_end(scanned, first);
    let first_folded = &scanned.folded()[first.0..first_end];
    if !scanned.is_capitalized_at(first.0) || lexicon::NON_PLACE_WORDS.contains(&first_folded) {
        return None;
    }

    let mut end = first_end;
    let mut clean = first_end == first.1;
    let mut i = 1;
    while clean && i < words.len() {
        let span = words[i];
        let folded = &scanned.folded()[span.0..span.1];
        if scanned.is_capitalized_at(span.0) {
            end = trimmed_end(scanned, span);
            clean = end == span.1;
            i += 1;
        } else if lexicon::PLACE_CONNECTORS.contains(&folded)
            && words
                .get(i + 1)
                .is_some_and(|next| scanned.is_capitalized_at(next.0))
        {
            let next = words[i + 1];
            end = trimmed_end(scanned, next);
            clean = end == next.1;
            i += 2;
        } else {
            break;
        }
    }

    Some((first.0, end))
}

// ---------------------------------------------------------------------------
// Presence map
// ---------------------------------------------------------------------------

/// Whether a field was found, and the value as extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPresence {
    pub present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FieldPresence {
    fn from_value(value: Option<String>) -> Self {
        Self {
            present: value.is_some(),
            value,
        }
    }
}

/// Presence of every canonical field for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPresenceMap {
    category: Category,
    fields: BTreeMap<FieldKey, FieldPresence>,
}

impl FieldPresenceMap {
    /// Creates an empty map.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            fields: BTreeMap::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Records the extraction result for a field.
    pub fn record(&mut self, key: FieldKey, value: Option<String>) {
        self.fields.insert(key, FieldPresence::from_value(value));
    }

    /// Returns true if a specific value was found for `key`.
    pub fn is_present(&self, key: FieldKey) -> bool {
        self.fields.get(&key).is_some_and(|f| f.present)
    }

    /// Returns the extracted value for `key`.
    pub fn value(&self, key: FieldKey) -> Option<&str> {
        self.fields.get(&key).and_then(|f| f.value.as_deref())
    }

    /// Returns the fields that were found, in key order.
    pub fn present_keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.fields
            .iter()
            .filter(|(_, f)| f.present)
            .map(|(key, _)| *key)
    }

    /// Iterates over every recorded field.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &FieldPresence)> + '_ {
        self.fields.iter().map(|(key, f)| (*key, f))
    }

    /// Number of recorded fields, present or not.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Extractor
// ---------------------------------------------------------------------------

/// Applies the per-category field rules to conversation text.
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    limits: ExtractionLimits,
}

impl EntityExtractor {
    /// Creates an extractor with the given limits.
    pub fn new(limits: ExtractionLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ExtractionLimits {
        &self.limits
    }

    /// Extracts every canonical field for `category` from raw text.
    pub fn extract(&self, text: &str, category: Category) -> FieldPresenceMap {
        self.extract_scanned(&ScannedText::new(text), category)
    }

    /// Extracts every canonical field for `category` from prepared text.
    ///
    /// `General` has no fields and yields an empty map.
    pub fn extract_scanned(&self, scanned: &ScannedText, category: Category) -> FieldPresenceMap {
        let mut map = FieldPresenceMap::new(category);
        let Some(rules) = rules::rules_for(category) else {
            return map;
        };

        for rule in rules.fields {
            let value = if scanned.is_empty() {
                None
            } else {
                (rule.extract)(scanned, &self.limits)
            };
            map.record(rule.requirement.key, value);
        }

        tracing::debug!(
            category = %category,
            present = ?map.present_keys().collect::<Vec<_>>(),
            "Extracted fields"
        );
        map
    }
}
