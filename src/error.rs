use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PerceptronError {
    /// The input vector length differs from the number of weights.
    InputSizeMismatch { expected: usize, actual: usize },
    /// Two collections that must be paired element by element differ in length.
    LengthMismatch { features: usize, labels: usize },
    /// A dataset has fewer feature columns than an operation needs.
    TooFewFeatures { required: usize, actual: usize },
    /// The plotting backend failed to draw or write the image.
    Render(String),
}

impl fmt::Display for PerceptronError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PerceptronError::InputSizeMismatch { expected, actual } => write!(
                f,
                "input size ({}) does not match number of weights ({})",
                actual, expected
            ),
            PerceptronError::LengthMismatch { features, labels } => write!(
                f,
                "number of samples ({}) does not match number of labels ({})",
                features, labels
            ),
            PerceptronError::TooFewFeatures { required, actual } => write!(
                f,
                "need at least {} feature columns, got {}",
                required, actual
            ),
            PerceptronError::Render(message) => write!(f, "failed to render plot: {}", message),
        }
    }
}

impl std::error::Error for PerceptronError {}
