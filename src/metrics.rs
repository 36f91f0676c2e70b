use crate::Vector;
use crate::error::PerceptronError;

pub fn accuracy_score(y_true: &Vector, y_pred: &Vector) -> Result<f32, PerceptronError> {
    if y_true.len() != y_pred.len() {
        return Err(PerceptronError::LengthMismatch {
            features: y_pred.len(),
            labels: y_true.len(),
        });
    }

    if y_true.is_empty() {
        return Ok(0.0);
    }

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(actual, pred)| actual == pred)
        .count();
    Ok(correct as f32 / y_true.len() as f32)
}
