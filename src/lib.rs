pub use ndarray::{Array1, Array2};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod plot;

pub use dataset::{Dataset, SamplePoint};
pub use error::PerceptronError;
pub use linear_model::Perceptron;
pub use plot::{Marker, PlotConfig};

pub type Vector = Array1<f32>;
pub type Matrix = Array2<f32>;
