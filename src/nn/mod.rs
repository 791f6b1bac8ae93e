//! Neural Network Module
//!
//! Provides building blocks for the feedforward classifier:
//! - Activation functions (ReLU, Sigmoid)
//! - Dense layers with forward and backward propagation
//! - Full network with seeded, reproducible training

mod activation;
mod layer;
mod network;
mod optimizer;

pub use activation::{Activation, ActivationType};
pub use layer::DenseLayer;
pub use network::{NetworkConfig, NeuralNetwork};
pub use optimizer::{Adam, Optimizer, SGD};
