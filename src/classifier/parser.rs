use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::classifier::provider::{RelevanceScore, ZeroShotOutput};
use crate::error::{Error, Result};

#[derive(Deserialize)]
struct LabelScore {
    #[allow(dead_code)]
    label: String,
    score: f64,
}

#[derive(Deserialize)]
struct InferenceError {
    error: String,
    #[serde(default)]
    estimated_time: Option<f64>,
}

/// Checks a zero-shot response against the labels that were requested.
pub fn validate_zero_shot(output: ZeroShotOutput, requested: &[String]) -> Result<ZeroShotOutput> {
    if output.labels.len() != output.scores.len() {
        return Err(Error::Classification(format!(
            "label/score count mismatch: {} labels, {} scores",
            output.labels.len(),
            output.scores.len()
        )));
    }

    if output.labels.len() != requested.len() {
        return Err(Error::Classification(format!(
            "expected {} labels, classifier returned {}",
            requested.len(),
            output.labels.len()
        )));
    }

    if let Some(label) = output.labels.iter().find(|l| !requested.contains(l)) {
        return Err(Error::Classification(format!("unexpected label in response: {}", label)));
    }

    let distinct: HashSet<&String> = output.labels.iter().collect();
    if distinct.len() != output.labels.len() {
        return Err(Error::Classification(
            "duplicate label in zero-shot response".to_string(),
        ));
    }

    for score in &output.scores {
        validate_score(*score)?;
    }

    Ok(output)
}

pub fn validate_score(score: f64) -> Result<f64> {
    if !score.is_finite() || !(0.0..=1.0).contains(&score) {
        return Err(Error::Classification(format!("score out of range: {}", score)));
    }
    Ok(score)
}

pub fn parse_zero_shot_response(body: &str, requested: &[String]) -> Result<ZeroShotOutput> {
    let output: ZeroShotOutput = serde_json::from_str(body)
        .map_err(|e| Error::Classification(format!("Failed to parse zero-shot response: {}", e)))?;

    validate_zero_shot(output, requested)
}

/// Takes the top label's score. The API answers either `[[{label, score}, ..]]`
/// or a flat `[{label, score}, ..]`.
pub fn parse_relevance_response(body: &str) -> Result<RelevanceScore> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        Error::Classification(format!("Failed to parse classification response: {}", e))
    })?;

    let candidates = match value {
        Value::Array(items) if matches!(items.first(), Some(Value::Array(_))) => {
            items.into_iter().next().unwrap_or(Value::Null)
        }
        other => other,
    };

    let mut scores: Vec<LabelScore> = serde_json::from_value(candidates).map_err(|e| {
        Error::Classification(format!("Unexpected classification response shape: {}", e))
    })?;

    scores.sort_by(|a, b| b.score.total_cmp(&a.score));

    let top = scores
        .first()
        .ok_or_else(|| Error::Classification("Empty classification response".to_string()))?;

    Ok(RelevanceScore {
        score: validate_score(top.score)?,
    })
}

/// Maps an error body from the inference API to the matching error kind.
pub fn parse_error_response(status: u16, body: &str) -> Error {
    match serde_json::from_str::<InferenceError>(body) {
        Ok(err) if status == 503 => match err.estimated_time {
            Some(secs) => Error::ModelLoading(secs.ceil().max(1.0) as u64),
            None => Error::ClassifierUnavailable(err.error),
        },
        Ok(err) => Error::Classification(format!("Inference API error ({}): {}", status, err.error)),
        Err(_) if status >= 500 => {
            Error::ClassifierUnavailable(format!("Inference API error ({}): {}", status, body))
        }
        Err(_) => Error::Classification(format!("Inference API error ({}): {}", status, body)),
    }
}
