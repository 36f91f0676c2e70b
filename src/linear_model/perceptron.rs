use crate::error::PerceptronError;
use crate::{Matrix, Vector};
use ndarray::{ArrayBase, Data, Ix1, Zip};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;

/// Single-layer binary classifier with a hard-threshold activation.
///
/// There is no bias weight. Callers that want one append a constant `1.0`
/// feature to every input.
#[derive(Clone, Debug)]
pub struct Perceptron {
    weights: Vector,
    learning_rate: f32,
}

impl Perceptron {
    pub fn new(input_size: usize, learning_rate: f32) -> Self {
        Self::with_rng(input_size, learning_rate, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(input_size: usize, learning_rate: f32, rng: &mut R) -> Self {
        let mut perceptron = Self {
            weights: Vector::zeros(0),
            learning_rate,
        };
        perceptron.initialize(input_size, learning_rate, rng);
        perceptron
    }

    pub fn from_weights(weights: Vector, learning_rate: f32) -> Self {
        if weights.is_empty() {
            panic!("weights must contain at least one element");
        }

        Self {
            weights,
            learning_rate,
        }
    }

    /// Draws every weight independently from `[-1, 1)` and stores the
    /// learning rate. Anything learned so far is discarded.
    pub fn initialize<R: Rng + ?Sized>(&mut self, input_size: usize, learning_rate: f32, rng: &mut R) {
        if input_size == 0 {
            panic!("input_size must be > 0, got {}", input_size);
        }

        self.weights = Vector::random_using(input_size, Uniform::new(-1.0f32, 1.0), rng);
        self.learning_rate = learning_rate;
    }

    pub fn weights(&self) -> &Vector {
        &self.weights
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(sum: f32) -> f32 {
        if sum >= 0.0 { 1.0 } else { 0.0 }
    }

    /// Weighted sum of `inputs` before activation.
    pub fn net_input<S>(&self, inputs: &ArrayBase<S, Ix1>) -> Result<f32, PerceptronError>
    where
        S: Data<Elem = f32>,
    {
        if inputs.len() != self.weights.len() {
            return Err(PerceptronError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }

        Ok(self.weights.dot(inputs))
    }

    pub fn predict<S>(&self, inputs: &ArrayBase<S, Ix1>) -> Result<f32, PerceptronError>
    where
        S: Data<Elem = f32>,
    {
        let sum = self.net_input(inputs)?;
        Ok(Self::activation(sum))
    }

    pub fn predict_batch(&self, x: &Matrix) -> Result<Vector, PerceptronError> {
        if x.ncols() != self.weights.len() {
            return Err(PerceptronError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: x.ncols(),
            });
        }

        let predictions = x
            .rows()
            .into_iter()
            .map(|row| self.predict(&row))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Vector::from(predictions))
    }

    /// Applies the perceptron learning rule for a single sample:
    /// `w[i] += learning_rate * (target - prediction) * inputs[i]`.
    ///
    /// On a size mismatch the weights are left untouched.
    pub fn train<S>(&mut self, inputs: &ArrayBase<S, Ix1>, target: f32) -> Result<(), PerceptronError>
    where
        S: Data<Elem = f32>,
    {
        let prediction = self.predict(inputs)?;
        let error = target - prediction;
        if error == 0.0 {
            return Ok(());
        }

        let step = self.learning_rate * error;
        Zip::from(&mut self.weights)
            .and(inputs)
            .for_each(|w, &x| *w += step * x);
        Ok(())
    }

    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f32, PerceptronError> {
        let predictions = self.predict_batch(x)?;
        crate::metrics::accuracy_score(y, &predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_activation_step() {
        assert_eq!(Perceptron::activation(0.0), 1.0);
        assert_eq!(Perceptron::activation(-0.0), 1.0);
        assert_eq!(Perceptron::activation(1e-30), 1.0);
        assert_eq!(Perceptron::activation(f32::MAX), 1.0);
        assert_eq!(Perceptron::activation(f32::INFINITY), 1.0);
        assert_eq!(Perceptron::activation(-1e-30), 0.0);
        assert_eq!(Perceptron::activation(-3.5), 0.0);
        assert_eq!(Perceptron::activation(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_initialize_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let model = Perceptron::with_rng(1000, 0.1, &mut rng);

        assert_eq!(model.input_size(), 1000);
        assert_eq!(model.learning_rate(), 0.1);
        assert!(model.weights().iter().all(|&w| (-1.0..1.0).contains(&w)));
    }

    #[test]
    fn test_initialize_is_reproducible_with_seed() {
        let a = Perceptron::with_rng(5, 0.1, &mut StdRng::seed_from_u64(42));
        let b = Perceptron::with_rng(5, 0.1, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.weights(), b.weights());
    }

    #[test]
    fn test_reinitialize_discards_training() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut model = Perceptron::from_weights(array![5.0, 5.0], 0.5);

        model.initialize(3, 0.25, &mut rng);

        assert_eq!(model.input_size(), 3);
        assert_eq!(model.learning_rate(), 0.25);
        assert!(model.weights().iter().all(|&w| (-1.0..1.0).contains(&w)));
    }

    #[test]
    fn test_thread_rng_constructor() {
        let model = Perceptron::new(2, 0.1);
        assert_eq!(model.input_size(), 2);
        assert!(model.weights().iter().all(|&w| (-1.0..1.0).contains(&w)));
    }

    #[test]
    #[should_panic(expected = "input_size must be > 0")]
    fn test_zero_input_size_panics() {
        Perceptron::new(0, 0.1);
    }

    #[test]
    #[should_panic]
    fn test_empty_weights_panic() {
        Perceptron::from_weights(Vector::zeros(0), 0.1);
    }

    #[test]
    fn test_predict_scenario() {
        let model = Perceptron::from_weights(array![1.0, 0.0], 0.1);
        assert_eq!(model.predict(&array![1.0, 1.0]), Ok(1.0));
        assert_eq!(model.predict(&array![-1.0, 100.0]), Ok(0.0));
    }

    #[test]
    fn test_predict_on_boundary_is_class_one() {
        let model = Perceptron::from_weights(array![1.0, -1.0], 0.1);
        assert_eq!(model.net_input(&array![2.0, 2.0]), Ok(0.0));
        assert_eq!(model.predict(&array![2.0, 2.0]), Ok(1.0));
    }

    #[test]
    fn test_predict_accepts_views() {
        let model = Perceptron::from_weights(array![-1.0, 0.5], 0.1);
        let x = array![[1.0, 1.0], [-1.0, 1.0]];
        assert_eq!(model.predict(&x.row(0)), Ok(0.0));
        assert_eq!(model.predict(&x.row(1)), Ok(1.0));
    }

    #[test]
    fn test_predict_size_mismatch() {
        let model = Perceptron::from_weights(array![1.0, 0.0], 0.1);
        let before = model.weights().clone();

        let result = model.predict(&array![1.0]);

        assert_eq!(
            result,
            Err(PerceptronError::InputSizeMismatch { expected: 2, actual: 1 })
        );
        assert!(model.predict(&array![1.0, 2.0, 3.0]).is_err());
        assert_eq!(model.weights(), &before);
    }

    #[test]
    fn test_train_scenario() {
        let mut model = Perceptron::from_weights(array![1.0, 0.0], 0.1);

        model.train(&array![1.0, 1.0], 0.0).unwrap();

        let weights = model.weights();
        assert!((weights[0] - 0.9).abs() < 1e-6);
        assert!((weights[1] + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_train_correct_prediction_leaves_weights_unchanged() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut model = Perceptron::with_rng(4, 0.3, &mut rng);
        let x = array![0.5, -2.0, 3.0, 1.25];
        let target = model.predict(&x).unwrap();
        let before = model.weights().clone();

        model.train(&x, target).unwrap();

        assert_eq!(model.weights(), &before);
    }

    #[test]
    fn test_train_update_matches_learning_rule() {
        let mut rng = StdRng::seed_from_u64(19);
        let mut model = Perceptron::with_rng(3, 0.25, &mut rng);
        let x = array![1.5, -0.75, 2.0];
        let prediction = model.predict(&x).unwrap();
        let target = 1.0 - prediction;
        let before = model.weights().clone();

        model.train(&x, target).unwrap();

        let lr = model.learning_rate();
        for i in 0..x.len() {
            let expected = before[i] + lr * (target - prediction) * x[i];
            assert_eq!(model.weights()[i], expected);
        }
    }

    #[test]
    fn test_train_size_mismatch_is_atomic() {
        let mut model = Perceptron::from_weights(array![1.0, 0.0], 0.1);
        let before = model.weights().clone();

        let result = model.train(&array![1.0], 0.0);

        assert_eq!(
            result,
            Err(PerceptronError::InputSizeMismatch { expected: 2, actual: 1 })
        );
        assert_eq!(model.weights(), &before);
    }

    #[test]
    fn test_repeated_training_separates_two_points() {
        let mut model = Perceptron::from_weights(array![-1.0, -1.0], 0.5);
        let positive = array![2.0, 1.0];
        let negative = array![-1.0, -3.0];

        for _ in 0..10 {
            model.train(&positive, 1.0).unwrap();
            model.train(&negative, 0.0).unwrap();
        }

        assert_eq!(model.predict(&positive), Ok(1.0));
        assert_eq!(model.predict(&negative), Ok(0.0));
    }

    #[test]
    fn test_predict_batch_and_score() {
        let model = Perceptron::from_weights(array![1.0, 0.0], 0.1);
        let x = array![[1.0, 5.0], [-1.0, 5.0], [0.0, -5.0], [-2.0, 0.0]];
        let y = array![1.0, 0.0, 0.0, 0.0];

        let predictions = model.predict_batch(&x).unwrap();
        assert_eq!(predictions, array![1.0, 0.0, 1.0, 0.0]);

        let score = model.score(&x, &y).unwrap();
        assert!((score - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_predict_batch_size_mismatch() {
        let model = Perceptron::from_weights(array![1.0, 0.0], 0.1);
        let x = array![[1.0], [2.0]];
        assert!(model.predict_batch(&x).is_err());
    }
}
