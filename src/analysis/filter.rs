//! Provenance-based message filtering.

use crate::core::models::{Provenance, RawMessage};

/// Reduce raw channel history to the texts eligible for classification.
///
/// A message survives iff its provenance tag is [`Provenance::HumanText`] and
/// its text is non-empty after trimming. Order is preserved and the original
/// (untrimmed) text is kept; there is no deduplication. An empty result is the
/// caller's signal that the channel has nothing to analyze, not an error here.
#[must_use]
pub fn human_texts(messages: &[RawMessage]) -> Vec<String> {
    messages
        .iter()
        .filter(|msg| msg.provenance() == Provenance::HumanText)
        .filter_map(|msg| msg.text.as_deref())
        .filter(|text| !text.trim().is_empty())
        .map(ToString::to_string)
        .collect()
}
