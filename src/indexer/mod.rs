use std::collections::BTreeMap;

use serde::Serialize;

use crate::{document::Document, keywords::KeywordSet, tokenizer::Column};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Serialize)]
pub struct Occurrence {
    pub line: usize,
    pub column: Column,
}

impl Occurrence {
    pub const fn new(line: usize, column: Column) -> Self {
        Self { line, column }
    }
}

/// Non-keyword word to every place it occurs. Keys iterate in lexicographic
/// order; each list is in (line, column) order.
pub type FrequencyIndex = BTreeMap<String, Vec<Occurrence>>;

/// Collects the position of every token that is not a keyword.
///
/// Lines and tokens are visited in document order, so each occurrence list
/// comes out sorted without a separate sort step.
pub fn index(document: &Document, keywords: &KeywordSet) -> FrequencyIndex {
    let mut frequency_index = FrequencyIndex::new();

    for (line, tokens) in document.lines() {
        for token in tokens {
            if keywords.contains(&token.text) {
                continue;
            }

            frequency_index
                .entry(token.text.clone())
                .or_default()
                .push(Occurrence::new(line, token.column));
        }
    }

    frequency_index
}

pub fn occurrence_count(frequency_index: &FrequencyIndex) -> usize {
    frequency_index.values().map(Vec::len).sum()
}
