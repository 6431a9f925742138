use std::collections::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::tagger::NounTagger;

pub const MAX_KEYWORDS: usize = 10;

/// A noun and how often it occurs. Serializes as `[word, count]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword(pub String, pub usize);

impl Keyword {
    pub fn word(&self) -> &str {
        &self.0
    }

    pub fn count(&self) -> usize {
        self.1
    }
}

pub async fn extract_keywords(tagger: &dyn NounTagger, content: &str) -> Result<Vec<Keyword>> {
    let nouns = tagger.nouns(content).await?;
    Ok(rank_keywords(&nouns))
}

/// Ranks the distinct nouns longer than one character by their frequency in
/// the full noun sequence and keeps the top [`MAX_KEYWORDS`].
///
/// Ties keep first-occurrence order: candidates are collected in the order
/// they first appear and the sort is stable.
pub fn rank_keywords(nouns: &[String]) -> Vec<Keyword> {
    let mut seen = HashSet::new();
    let candidates: Vec<&str> = nouns
        .iter()
        .map(String::as_str)
        .filter(|word| word.chars().count() > 1)
        .filter(|word| seen.insert(*word))
        .collect();

    // Counted against the original sequence, not the deduplicated one
    let mut frequency: HashMap<&str, usize> = HashMap::with_capacity(candidates.len());
    for noun in nouns {
        *frequency.entry(noun.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<Keyword> = candidates
        .into_iter()
        .map(|word| Keyword(word.to_string(), frequency[word]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(MAX_KEYWORDS);
    ranked
}
