use crate::config::{BlockPolicy, ExtractionConfig};
use crate::error::ExtractError;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// A parsed JSON-LD object, before type classification.
pub type Candidate = Map<String, Value>;

/// Escaped-newline followed by a tab, left behind by some CMS templates.
const NEWLINE_TAB_ARTIFACT: &str = "\\n\t";

/// Candidates in insertion order, unique by their serialized form.
#[derive(Debug, Default)]
pub struct CandidateSet {
    entries: Vec<Candidate>,
    seen: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate unless an identical one is already present.
    ///
    /// Returns whether the candidate was new.
    pub fn insert(&mut self, candidate: Candidate) -> Result<bool, ExtractError> {
        let key = canonical_form(&candidate)?;
        if !self.seen.insert(key) {
            return Ok(false);
        }
        self.entries.push(candidate);
        Ok(true)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn canonical_form(candidate: &Candidate) -> Result<String, ExtractError> {
    // serde_json's Map is ordered by key, so equal objects serialize equally
    serde_json::to_string(candidate).map_err(|e| ExtractError::ParseError(e.to_string()))
}

fn strip_artifacts(raw: &str) -> String {
    raw.replace(NEWLINE_TAB_ARTIFACT, "")
}

/// Parse every located block and flatten it into unique candidates.
pub fn normalize_blocks(
    blocks: &[String],
    options: &ExtractionConfig,
) -> Result<CandidateSet, ExtractError> {
    let mut candidates = CandidateSet::new();

    for (index, raw) in blocks.iter().enumerate() {
        let cleaned = strip_artifacts(raw);
        let parsed = match serde_json::from_str::<Value>(&cleaned) {
            Ok(value) => value,
            Err(source) => match options.block_policy {
                BlockPolicy::Strict => {
                    return Err(ExtractError::InvalidJson {
                        block: index,
                        source,
                    })
                }
                BlockPolicy::Lenient => {
                    warn!("Skipping invalid JSON-LD block {}: {}", index, source);
                    continue;
                }
            },
        };

        let items = match parsed {
            Value::Array(items) => items,
            other => vec![other],
        };

        for item in items {
            let Value::Object(candidate) = item else {
                debug!("Block {}: dropping non-object JSON-LD value", index);
                continue;
            };

            let graph = if options.expand_graph {
                graph_members(&candidate)
            } else {
                Vec::new()
            };

            if !candidates.insert(candidate)? {
                debug!("Block {}: duplicate candidate", index);
            }
            for member in graph {
                candidates.insert(member)?;
            }
        }
    }

    debug!("Normalized {} unique candidates", candidates.len());
    Ok(candidates)
}

fn graph_members(candidate: &Candidate) -> Vec<Candidate> {
    match candidate.get("@graph") {
        Some(Value::Array(members)) => members
            .iter()
            .filter_map(|member| member.as_object().cloned())
            .collect(),
        _ => Vec::new(),
    }
}
