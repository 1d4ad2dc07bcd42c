//! Fuzzy model matcher - maps a decoded model name onto the canonical catalog.
//!
//! Decoders and the catalog spell model names differently: the catalog often
//! appends a body style ("Frontier" vs "Frontier Pickup"), and sometimes the
//! decoder is the more specific one ("Frontier Pickup King Cab" vs "Frontier").
//! The matcher tries three strategies in a fixed order and returns the first
//! candidate that satisfies one of them.

/// Match strategies in priority order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchStrategy {
    /// Case-insensitive equality.
    Exact,
    /// The candidate contains the raw model.
    CandidateContainsRaw,
    /// The raw model contains the candidate.
    RawContainsCandidate,
}

impl MatchStrategy {
    const ORDER: [MatchStrategy; 3] = [
        MatchStrategy::Exact,
        MatchStrategy::CandidateContainsRaw,
        MatchStrategy::RawContainsCandidate,
    ];

    fn accepts(self, raw: &str, candidate: &str) -> bool {
        match self {
            Self::Exact => candidate == raw,
            Self::CandidateContainsRaw => candidate.contains(raw),
            // An empty candidate is contained in everything
            Self::RawContainsCandidate => !candidate.is_empty() && raw.contains(candidate),
        }
    }
}

/// Find the canonical model that best matches a decoded model name.
///
/// Comparison is case-insensitive and the raw model is trimmed. Within each
/// strategy the first candidate in list order wins; there is no scoring.
///
/// Returns `None` when the raw model is blank, the list is empty, or nothing
/// matches.
///
/// # Examples
///
/// ```
/// use autoglass_vehicle_data::resolver::match_model;
///
/// assert_eq!(match_model("Frontier", &["Frontier Pickup", "Titan"]), Some("Frontier Pickup"));
/// assert_eq!(match_model("Frontier Pickup King Cab", &["Frontier"]), Some("Frontier"));
/// assert_eq!(match_model("Zzyzx", &["Frontier", "Titan"]), None);
/// ```
pub fn match_model<'a, S: AsRef<str>>(raw_model: &str, canonical_models: &'a [S]) -> Option<&'a str> {
    match_model_with_strategy(raw_model, canonical_models).map(|(model, _)| model)
}

/// Like [`match_model`], also reporting which strategy produced the match.
pub fn match_model_with_strategy<'a, S: AsRef<str>>(
    raw_model: &str,
    canonical_models: &'a [S],
) -> Option<(&'a str, MatchStrategy)> {
    let raw = raw_model.trim().to_lowercase();
    if raw.is_empty() || canonical_models.is_empty() {
        return None;
    }

    let lowered: Vec<String> = canonical_models
        .iter()
        .map(|c| c.as_ref().to_lowercase())
        .collect();

    MatchStrategy::ORDER.iter().find_map(move |&strategy| {
        lowered
            .iter()
            .position(|candidate| strategy.accepts(&raw, candidate))
            .map(|idx| (canonical_models[idx].as_ref(), strategy))
    })
}
