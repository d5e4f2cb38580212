//! JSON entry points for foreign hosts.
//!
//! Each function takes a JSON document and returns one. They never panic:
//! malformed input and invalid configuration come back as
//! `{"error": "..."}`. A failed match is not an error, it is
//! `{"name": null, "matched": false}`.

use crate::config::MatchConfig;
use crate::distance::{distance, EditCosts};
use serde::{Deserialize, Serialize};

/// Input for [`match_names_json`]
#[derive(Debug, Deserialize)]
pub struct MatchInput {
    pub base: String,
    #[serde(default)]
    pub candidates: Vec<String>,
    #[serde(default)]
    pub config: MatchConfig,
}

/// Output of [`match_names_json`]
#[derive(Debug, Serialize)]
pub struct MatchOutput {
    pub name: Option<String>,
    pub matched: bool,
}

/// Input for [`normalize_name_json`]
#[derive(Debug, Deserialize)]
pub struct NormalizeInput {
    pub name: String,
    #[serde(default)]
    pub config: MatchConfig,
}

/// Output of [`normalize_name_json`]
#[derive(Debug, Serialize)]
pub struct NormalizeOutput {
    pub chunks: Vec<String>,
    pub total: usize,
}

/// Input for [`distance_json`]
#[derive(Debug, Deserialize)]
pub struct DistanceInput {
    pub a: String,
    pub b: String,
    #[serde(default)]
    pub costs: EditCosts,
}

/// Output of [`distance_json`]
#[derive(Debug, Serialize)]
pub struct DistanceOutput {
    pub distance: f64,
}

fn error_json(context: &str, message: impl std::fmt::Display) -> String {
    serde_json::json!({ "error": format!("{}: {}", context, message) }).to_string()
}

fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => error_json("serialization failed", e),
    }
}

/// Deserialize a match request, fold the candidates, serialize the answer
pub fn match_names_json(input: &str) -> String {
    let parsed: MatchInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return error_json("invalid match input", e),
    };

    let matcher = match parsed.config.compile() {
        Ok(m) => m,
        Err(e) => return error_json("invalid config", e),
    };

    let name = matcher.match_names(&parsed.base, &parsed.candidates);
    to_json(&MatchOutput {
        matched: name.is_some(),
        name,
    })
}

/// Deserialize a name, split it into chunks, serialize the chunks
pub fn normalize_name_json(input: &str) -> String {
    let parsed: NormalizeInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return error_json("invalid normalize input", e),
    };

    let normalizer = match parsed.config.compile_normalizer() {
        Ok(n) => n,
        Err(e) => return error_json("invalid config", e),
    };

    let chunks = normalizer.normalize(&parsed.name).texts();
    let total = chunks.len();
    to_json(&NormalizeOutput { chunks, total })
}

/// Deserialize two strings and costs, serialize their edit distance
pub fn distance_json(input: &str) -> String {
    let parsed: DistanceInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return error_json("invalid distance input", e),
    };

    match distance(&parsed.a, &parsed.b, &parsed.costs) {
        Ok(distance) => to_json(&DistanceOutput { distance }),
        Err(e) => error_json("invalid costs", e),
    }
}
