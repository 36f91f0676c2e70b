//! Linear models for binary classification.
//!
//! This module provides:
//! - `Perceptron`: single-layer perceptron with a step activation and the
//!   classical online learning rule
//!
//! # Examples
//!
//! ## Prediction and a single training step
//! ```rust
//! use perceptron_viz::{Perceptron, Vector};
//! use ndarray::array;
//!
//! let mut model = Perceptron::from_weights(array![1.0, 0.0], 0.1);
//! let x: Vector = array![1.0, 1.0];
//!
//! assert_eq!(model.predict(&x).unwrap(), 1.0);
//!
//! // Target 0.0 is a misclassification, so the weights move by -0.1 * x.
//! model.train(&x, 0.0).unwrap();
//! assert!((model.weights()[0] - 0.9).abs() < 1e-6);
//! assert!((model.weights()[1] + 0.1).abs() < 1e-6);
//! ```
//!
//! ## Reproducible initialization
//! ```rust
//! use perceptron_viz::Perceptron;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let model = Perceptron::with_rng(2, 0.1, &mut rng);
//! assert_eq!(model.input_size(), 2);
//! ```

mod perceptron;

pub use perceptron::Perceptron;
