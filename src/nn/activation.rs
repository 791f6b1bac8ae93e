//! Activation Functions
//!
//! Implements the activation functions the classifier uses and their
//! derivatives for backpropagation.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Types of activation functions available
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivationType {
    /// Rectified Linear Unit: max(0, x)
    ReLU,
    /// Sigmoid: 1 / (1 + exp(-x))
    Sigmoid,
}

/// Activation function trait with forward pass and derivative
pub trait Activation: Send + Sync {
    /// Apply the activation function to a batch
    fn forward(&self, x: &Array2<f64>) -> Array2<f64>;

    /// Compute the derivative for backpropagation
    fn derivative(&self, x: &Array2<f64>) -> Array2<f64>;
}

/// ReLU activation function
pub struct ReLU;

impl Activation for ReLU {
    fn forward(&self, x: &Array2<f64>) -> Array2<f64> {
        x.mapv(|v| v.max(0.0))
    }

    fn derivative(&self, x: &Array2<f64>) -> Array2<f64> {
        x.mapv(|v| if v > 0.0 { 1.0 } else { 0.0 })
    }
}

/// Sigmoid activation function
pub struct Sigmoid;

impl Activation for Sigmoid {
    fn forward(&self, x: &Array2<f64>) -> Array2<f64> {
        x.mapv(|v| 1.0 / (1.0 + (-v).exp()))
    }

    fn derivative(&self, x: &Array2<f64>) -> Array2<f64> {
        let s = self.forward(x);
        &s * &(1.0 - &s)
    }
}

/// Create an activation function from type
pub fn create_activation(activation_type: ActivationType) -> Box<dyn Activation> {
    match activation_type {
        ActivationType::ReLU => Box::new(ReLU),
        ActivationType::Sigmoid => Box::new(Sigmoid),
    }
}
