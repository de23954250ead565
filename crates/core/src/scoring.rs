//! Prediction scoring: softmax normalization, arg-max, top-k ranking.
//!
//! The secure inference service returns raw (unnormalized) output
//! vectors; normalization and ranking happen here, on plaintext scores.

use serde::Serialize;

use crate::error::CoreError;
use crate::labels::{DEMENTIA_LABELS, SYMPTOM_LABELS, TOP_PREDICTIONS};

/// A single ranked diagnosis candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub label: &'static str,
    pub probability: f32,
}

/// Numerically stable softmax over a raw score vector.
///
/// Subtracts the maximum before exponentiating so large logits do not
/// overflow. An empty input yields an empty output.
pub fn softmax(raw: &[f32]) -> Vec<f32> {
    let max = raw.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if !max.is_finite() {
        return vec![0.0; raw.len()];
    }
    let exps: Vec<f32> = raw.iter().map(|&x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Index of the largest element in a score vector.
///
/// Ties resolve to the earliest index, matching conventional arg-max
/// so the label mapping agrees with what the model was validated
/// against.
pub fn arg_max(raw: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &score) in raw.iter().enumerate() {
        match best {
            Some((_, top)) if score > top => best = Some((i, score)),
            Some(_) => {}
            None => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}

/// Rank the symptom classifier's raw output into the top candidate
/// diagnoses.
///
/// Applies softmax, pairs each probability with its label positionally,
/// sorts descending by probability (stable, so ties keep model output
/// order), and keeps the first [`TOP_PREDICTIONS`].
///
/// Fails if the vector length does not match the 22-label taxonomy --
/// that means the deployed artifact and the label list have drifted
/// apart, and any ranking over it would be garbage.
pub fn rank_symptom_predictions(raw: &[f32]) -> Result<Vec<Prediction>, CoreError> {
    if raw.len() != SYMPTOM_LABELS.len() {
        return Err(CoreError::OutputShape {
            model: crate::labels::DIAGNOSIS_MODEL,
            expected: SYMPTOM_LABELS.len(),
            actual: raw.len(),
        });
    }

    let probabilities = softmax(raw);

    let mut ranked: Vec<Prediction> = SYMPTOM_LABELS
        .iter()
        .zip(probabilities)
        .map(|(&label, probability)| Prediction { label, probability })
        .collect();

    ranked.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    ranked.truncate(TOP_PREDICTIONS);
    Ok(ranked)
}

/// Pick the single most likely dementia label from the image
/// classifier's raw output.
///
/// Arg-max over the raw scores, mapped through the 4-label taxonomy.
/// Softmax is unnecessary here because it is monotonic and only the
/// winning index matters.
pub fn classify_image_output(raw: &[f32]) -> Result<&'static str, CoreError> {
    if raw.len() != DEMENTIA_LABELS.len() {
        return Err(CoreError::OutputShape {
            model: crate::labels::IMAGE_MODEL,
            expected: DEMENTIA_LABELS.len(),
            actual: raw.len(),
        });
    }

    let index = arg_max(raw).ok_or_else(|| {
        CoreError::Internal("arg-max over empty output vector".to_string())
    })?;

    Ok(DEMENTIA_LABELS[index])
}
