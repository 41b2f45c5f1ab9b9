//! Named-entity extraction over extracted document text.
//!
//! There is no model dependency here: candidates are runs of capitalized
//! tokens, classified by organization suffix cues, a location gazetteer, and
//! person-title/shape heuristics. Only three categories exist (person,
//! location, organization); candidates that fit none are discarded.

use std::collections::HashSet;
use std::sync::Arc;

use itertools::Itertools;
use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;

/// Category of a recognized span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityCategory {
    Person,
    Location,
    Organization,
}

/// A recognized span and its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub category: EntityCategory,
}

/// Extraction seam between the PDF converter and whatever does the
/// recognition. Implementations must be shareable across requests.
pub trait EntityRecognizer: Send + Sync {
    fn analyze(&self, text: &str) -> Vec<Entity>;
}

/// Collect the spans of one category, deduplicated in first-seen order.
pub fn spans_of(entities: &[Entity], category: EntityCategory) -> Vec<String> {
    entities
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.text.clone())
        .unique()
        .collect()
}

static CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    // A run of capitalized tokens, optionally glued by common connectors.
    // Periods are excluded from tokens so a sentence boundary ends the run.
    Regex::new(
        r"\b[A-Z][A-Za-z0-9&'-]*(?:[ \t](?:of|the|de|da|la|van|von|und|[A-Z][A-Za-z0-9&'-]*))*",
    )
    .expect("candidate regex is valid")
});

static TITLE_BEFORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:Mr|Mrs|Ms|Dr|Prof|Sir|Dame|Lord|Lady|President|Senator|Judge)\.?\s*$")
        .expect("title regex is valid")
});

// Candidate tokens never contain periods or commas, so cues are bare words.
const ORG_CUES: &[&str] = &[
    "Inc", "Ltd", "LLC", "LLP", "PLC", "GmbH", "AG", "SA", "NV", "Corp", "Corporation",
    "Company", "Co", "Holdings", "Group", "Partners", "Bank", "University", "College",
    "Institute", "Laboratories", "Labs", "Foundation", "Association", "Agency", "Authority",
    "Ministry", "Department", "Committee", "Council", "Systems", "Technologies", "Industries",
    "Airlines", "Press",
];

const LOCATION_SUFFIXES: &[&str] = &[
    "City", "County", "Province", "Island", "Islands", "Republic", "Kingdom", "States",
    "Valley", "Bay", "Coast", "Mountains", "River",
];

static GAZETTEER: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Africa", "America", "Amsterdam", "Asia", "Athens", "Atlanta", "Australia", "Austria",
        "Bangalore", "Barcelona", "Beijing", "Belgium", "Berlin", "Boston", "Brazil", "Brussels",
        "Cairo", "California", "Canada", "Chicago", "China", "Copenhagen", "Delhi", "Denmark",
        "Dubai", "Dublin", "Edinburgh", "Egypt", "England", "Europe", "Finland", "Florida",
        "France", "Frankfurt", "Geneva", "Germany", "Greece", "Helsinki", "Hamburg",
        "Hong Kong", "India", "Indonesia", "Ireland", "Israel", "Istanbul", "Italy", "Japan",
        "Kenya", "Lagos", "Lisbon", "London", "Los Angeles", "Madrid", "Melbourne", "Mexico",
        "Miami", "Milan", "Moscow", "Mumbai", "Munich", "Nairobi", "Netherlands",
        "New York", "New Zealand", "Nigeria", "Norway", "Oslo", "Ottawa", "Paris", "Poland",
        "Portugal", "Prague", "Rome", "Russia", "San Francisco", "Scotland", "Seattle",
        "Seoul", "Shanghai", "Singapore", "Spain", "Stockholm", "Sweden", "Switzerland",
        "Sydney", "Texas", "Tokyo", "Toronto", "Turkey", "Vienna", "Wales", "Warsaw",
        "Washington", "Zurich", "United Kingdom", "United States",
    ]
    .into_iter()
    .collect()
});

// Capitalized words that open sentences far more often than they name anyone.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "The", "This", "That", "These", "Those", "A", "An", "It", "He", "She", "They", "We",
        "You", "I", "If", "In", "On", "At", "By", "For", "From", "To", "And", "But", "Or",
        "As", "Is", "Are", "Was", "Were", "Be", "Not", "No", "Yes", "All", "Any", "Each",
        "When", "Where", "While", "With", "Within", "Without", "After", "Before", "Between",
        "However", "Therefore", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
        "Saturday", "Sunday", "January", "February", "March", "April", "May", "June", "July",
        "August", "September", "October", "November", "December", "Page", "Chapter",
        "Section", "Table", "Figure",
    ]
    .into_iter()
    .collect()
});

/// Rule-based recognizer. Built once per process and shared by reference
/// (see [`RuleBasedRecognizer::shared`]).
pub struct RuleBasedRecognizer {
    org_cues: HashSet<&'static str>,
    location_suffixes: HashSet<&'static str>,
}

impl RuleBasedRecognizer {
    pub fn new() -> Self {
        Self {
            org_cues: ORG_CUES.iter().copied().collect(),
            location_suffixes: LOCATION_SUFFIXES.iter().copied().collect(),
        }
    }

    /// Process-wide handle, initialized lazily on first use. Callers hold the
    /// `Arc` and pass it into the extraction path explicitly.
    pub fn shared() -> Arc<RuleBasedRecognizer> {
        static INSTANCE: OnceCell<Arc<RuleBasedRecognizer>> = OnceCell::new();
        INSTANCE
            .get_or_init(|| Arc::new(RuleBasedRecognizer::new()))
            .clone()
    }

    fn classify(&self, span: &str, preceded_by_title: bool) -> Option<EntityCategory> {
        let tokens: Vec<&str> = span.split_whitespace().collect();
        if tokens.is_empty() {
            return None;
        }

        if tokens.iter().any(|t| self.org_cues.contains(t)) {
            return Some(EntityCategory::Organization);
        }

        if GAZETTEER.contains(span)
            || tokens
                .last()
                .is_some_and(|t| self.location_suffixes.contains(*t))
        {
            return Some(EntityCategory::Location);
        }

        if preceded_by_title {
            return Some(EntityCategory::Person);
        }

        // Person shape: two or three plain capitalized words, e.g. "Ada Lovelace".
        if (2..=3).contains(&tokens.len())
            && tokens.iter().all(|t| {
                t.chars().next().is_some_and(|c| c.is_uppercase())
                    && t.chars().all(|c| c.is_alphabetic() || c == '\'' || c == '-')
            })
        {
            return Some(EntityCategory::Person);
        }

        None
    }
}

impl Default for RuleBasedRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer for RuleBasedRecognizer {
    fn analyze(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for m in CANDIDATE.find_iter(text) {
            let mut span = m.as_str().trim();

            // Drop leading connector-like stopwords ("The Acme Corp" -> "Acme Corp").
            if let Some(first) = span.split_whitespace().next() {
                if STOPWORDS.contains(first) && span.contains(' ') {
                    span = span[first.len()..].trim_start();
                }
            }
            if span.is_empty() || STOPWORDS.contains(span) {
                continue;
            }

            let preceded_by_title = TITLE_BEFORE.is_match(&text[..m.start()]);

            if let Some(category) = self.classify(span, preceded_by_title) {
                entities.push(Entity {
                    text: span.to_string(),
                    category,
                });
            }
        }

        entities
    }
}
