use crate::error::PerceptronError;
use crate::linear_model::Perceptron;
use crate::{Matrix, Vector};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;

/// A classified point in the plane: `(x, y, class)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub x: f32,
    pub y: f32,
    pub class: f32,
}

#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self, PerceptronError> {
        if features.nrows() != labels.len() {
            return Err(PerceptronError::LengthMismatch {
                features: features.nrows(),
                labels: labels.len(),
            });
        }

        Ok(Self { features, labels })
    }

    /// Draws `n_samples` points uniformly from `[low, high)` on both axes and
    /// labels each one with `perceptron`. The perceptron is not trained.
    ///
    /// Panics if `low >= high`.
    pub fn classify_uniform<R: Rng + ?Sized>(
        perceptron: &Perceptron,
        n_samples: usize,
        low: f32,
        high: f32,
        rng: &mut R,
    ) -> Result<Self, PerceptronError> {
        let features = Matrix::random_using((n_samples, 2), Uniform::new(low, high), rng);
        let labels = perceptron.predict_batch(&features)?;
        Self::new(features, labels)
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Rows as plane points, using the first two feature columns.
    pub fn points(&self) -> Result<impl Iterator<Item = SamplePoint> + '_, PerceptronError> {
        if self.n_features() < 2 {
            return Err(PerceptronError::TooFewFeatures {
                required: 2,
                actual: self.n_features(),
            });
        }

        Ok(self
            .features
            .rows()
            .into_iter()
            .zip(self.labels.iter())
            .map(|(row, &class)| SamplePoint { x: row[0], y: row[1], class }))
    }

    /// Returns `(class_0, class_1)`. Any label other than `1.0` counts as class 0.
    pub fn class_counts(&self) -> (usize, usize) {
        let class_1 = self.labels.iter().filter(|&&label| label == 1.0).count();
        (self.labels.len() - class_1, class_1)
    }
}
