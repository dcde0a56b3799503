use crate::error::ClassifyError;
use crate::label_catalog::LabelCatalog;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassScore {
    pub label: String,
    pub probability: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub top_index: usize,
    pub top_label: String,
    pub top_confidence: f32,
    /// Catalog order.
    pub per_class: Vec<ClassScore>,
}

impl PredictionReport {
    /// Highest probability first, NaN last; equal scores keep catalog order.
    pub fn ranked(&self) -> Vec<&ClassScore> {
        let mut ranked: Vec<&ClassScore> = self.per_class.iter().collect();
        ranked.sort_by(|a, b| rank_key(b.probability).total_cmp(&rank_key(a.probability)));
        ranked
    }
}

fn rank_key(probability: f32) -> f32 {
    if probability.is_nan() {
        f32::NEG_INFINITY
    } else {
        probability
    }
}

/// Leftmost index of the maximum score. NaN never wins.
fn leftmost_argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        if best.map_or(true, |b| score > scores[b]) {
            best = Some(index);
        }
    }
    best
}

pub fn decide(
    probabilities: &[f32],
    catalog: &LabelCatalog,
) -> Result<PredictionReport, ClassifyError> {
    if probabilities.len() != catalog.len() {
        return Err(ClassifyError::CatalogMismatch {
            labels: catalog.len(),
            outputs: probabilities.len(),
        });
    }

    let top_index = leftmost_argmax(probabilities).unwrap_or(0);

    let per_class: Vec<ClassScore> = catalog
        .iter()
        .zip(probabilities)
        .map(|(label, &probability)| ClassScore {
            label: label.to_string(),
            probability,
        })
        .collect();

    let top = per_class
        .get(top_index)
        .ok_or(ClassifyError::CatalogMismatch {
            labels: catalog.len(),
            outputs: probabilities.len(),
        })?;

    Ok(PredictionReport {
        top_index,
        top_label: top.label.clone(),
        top_confidence: top.probability,
        per_class,
    })
}
