//! Neural Network Implementation
//!
//! Feedforward binary classifier trained with binary cross-entropy.
//! All randomness (weight initialization, epoch shuffling) comes from one
//! seeded RNG so a fixed seed gives bit-identical training runs.

use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::activation::ActivationType;
use super::layer::DenseLayer;
use super::optimizer::{Adam, Optimizer};

const BCE_EPSILON: f64 = 1e-15;

/// Neural Network configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub layer_sizes: Vec<usize>,
    pub activations: Vec<ActivationType>,
}

impl NetworkConfig {
    pub fn new(input_size: usize) -> Self {
        Self {
            layer_sizes: vec![input_size],
            activations: vec![],
        }
    }

    /// Add a layer
    pub fn add_layer(mut self, size: usize, activation: ActivationType) -> Self {
        self.layer_sizes.push(size);
        self.activations.push(activation);
        self
    }
}

/// Feedforward neural network for binary classification
pub struct NeuralNetwork {
    pub layers: Vec<DenseLayer>,
    pub config: NetworkConfig,
    optimizers: Vec<Box<dyn Optimizer>>,
    rng: StdRng,
}

impl NeuralNetwork {
    /// Create network from configuration with seeded initialization
    pub fn from_config(config: NetworkConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut layers = Vec::new();

        for i in 0..config.activations.len() {
            let input_size = config.layer_sizes[i];
            let output_size = config.layer_sizes[i + 1];
            let activation = config.activations[i];

            layers.push(DenseLayer::new(input_size, output_size, activation, &mut rng));
        }

        // Default optimizer: Adam
        let optimizers: Vec<Box<dyn Optimizer>> = (0..layers.len())
            .map(|_| Box::new(Adam::new(0.001)) as Box<dyn Optimizer>)
            .collect();

        Self {
            layers,
            config,
            optimizers,
            rng,
        }
    }

    /// Create a network for binary classification: ReLU hidden layers and a
    /// single sigmoid output unit.
    pub fn binary_classification(input_size: usize, hidden_sizes: &[usize], seed: u64) -> Self {
        let mut config = NetworkConfig::new(input_size);

        for &size in hidden_sizes {
            config = config.add_layer(size, ActivationType::ReLU);
        }
        config = config.add_layer(1, ActivationType::Sigmoid);

        Self::from_config(config, seed)
    }

    /// Set optimizer for all layers
    pub fn set_optimizer(&mut self, optimizer: Box<dyn Optimizer>) {
        self.optimizers = self.layers.iter().map(|_| optimizer.clone_box()).collect();
    }

    /// Forward pass through the network
    pub fn forward(&mut self, input: &Array2<f64>) -> Array2<f64> {
        let mut output = input.clone();
        for layer in &mut self.layers {
            output = layer.forward(&output);
        }
        output
    }

    /// Predicted positive-class probabilities, one per input row
    pub fn predict_proba(&mut self, input: &Array2<f64>) -> Array1<f64> {
        self.forward(input).column(0).to_owned()
    }

    /// Binary cross-entropy loss
    pub fn compute_loss(&self, predictions: &Array2<f64>, targets: &Array2<f64>) -> f64 {
        let n = predictions.len() as f64;
        let p = predictions.mapv(|v| v.clamp(BCE_EPSILON, 1.0 - BCE_EPSILON));
        let loss =
            targets * &p.mapv(f64::ln) + &(1.0 - targets) * &(1.0 - &p).mapv(f64::ln);
        -loss.sum() / n
    }

    /// Binary cross-entropy gradient with respect to the predictions
    fn compute_loss_gradient(
        &self,
        predictions: &Array2<f64>,
        targets: &Array2<f64>,
    ) -> Array2<f64> {
        let n = predictions.nrows() as f64;
        let p = predictions.mapv(|v| v.clamp(BCE_EPSILON, 1.0 - BCE_EPSILON));
        ((&p - targets) / (&p * &(1.0 - &p))) / n
    }

    /// Backward pass and weight update
    pub fn backward(&mut self, predictions: &Array2<f64>, targets: &Array2<f64>) {
        let mut gradient = self.compute_loss_gradient(predictions, targets);

        for i in (0..self.layers.len()).rev() {
            let (input_grad, weight_grad, bias_grad) = self.layers[i].backward(&gradient);

            self.optimizers[i].update_weights(&mut self.layers[i].weights, &weight_grad);
            self.optimizers[i].update_biases(&mut self.layers[i].biases, &bias_grad);

            gradient = input_grad;
        }
    }

    /// Train for one epoch, returning the mean batch loss
    pub fn train_epoch(
        &mut self,
        x_train: &Array2<f64>,
        y_train: &Array2<f64>,
        batch_size: usize,
    ) -> f64 {
        let n_samples = x_train.nrows();
        let n_batches = n_samples.div_ceil(batch_size);
        let mut total_loss = 0.0;

        let mut indices: Vec<usize> = (0..n_samples).collect();
        indices.shuffle(&mut self.rng);

        for batch_idx in 0..n_batches {
            let start = batch_idx * batch_size;
            let end = (start + batch_size).min(n_samples);
            let batch_indices = &indices[start..end];

            let x_batch = x_train.select(Axis(0), batch_indices);
            let y_batch = y_train.select(Axis(0), batch_indices);

            let predictions = self.forward(&x_batch);
            total_loss += self.compute_loss(&predictions, &y_batch);
            self.backward(&predictions, &y_batch);
        }

        total_loss / n_batches as f64
    }

    /// Train the network, returning per-epoch losses.
    ///
    /// Emits a warning when the final loss has not improved on the initial
    /// one; the caller decides what to do with a poorly converged model.
    pub fn train(
        &mut self,
        x_train: &Array2<f64>,
        y_train: &Array2<f64>,
        epochs: usize,
        batch_size: usize,
    ) -> Vec<f64> {
        let mut losses = Vec::with_capacity(epochs);

        for _ in 0..epochs {
            losses.push(self.train_epoch(x_train, y_train, batch_size));
        }

        if let (Some(&first), Some(&last)) = (losses.first(), losses.last()) {
            if !last.is_finite() || last >= first {
                warn!(
                    initial_loss = first,
                    final_loss = last,
                    "training loss did not improve"
                );
            }
        }

        losses
    }

    /// Loss on held-out data
    pub fn evaluate(&mut self, x_test: &Array2<f64>, y_test: &Array2<f64>) -> f64 {
        let predictions = self.forward(x_test);
        self.compute_loss(&predictions, y_test)
    }

    /// Get total number of parameters
    pub fn num_parameters(&self) -> usize {
        self.layers.iter().map(|l| l.num_parameters()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::optimizer::SGD;

    fn separable_batch() -> (Array2<f64>, Array2<f64>) {
        let x = Array2::from_shape_vec(
            (8, 2),
            vec![
                0.0, 0.1, 0.1, 0.0, 0.2, 0.1, 0.0, 0.2, 1.0, 0.9, 0.9, 1.0, 0.8, 1.0, 1.0, 0.8,
            ],
        )
        .unwrap();
        let y =
            Array2::from_shape_vec((8, 1), vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
        (x, y)
    }

    #[test]
    fn test_network_creation() {
        let network = NeuralNetwork::binary_classification(10, &[30, 30, 30], 42);
        assert_eq!(network.layers.len(), 4);
        assert_eq!(network.layers[0].input_size, 10);
        assert_eq!(network.layers[3].output_size, 1);
        assert_eq!(network.layers[3].activation_type, ActivationType::Sigmoid);
    }

    #[test]
    fn test_forward_pass_shape() {
        let mut network = NeuralNetwork::binary_classification(4, &[8], 42);
        let input = Array2::ones((10, 4));
        let proba = network.predict_proba(&input);
        assert_eq!(proba.len(), 10);
        for p in proba.iter() {
            assert!((0.0..=1.0).contains(p));
        }
    }

    #[test]
    fn test_training_reduces_loss() {
        let (x, y) = separable_batch();
        let mut network = NeuralNetwork::binary_classification(2, &[16], 42);

        let initial_loss = network.evaluate(&x, &y);
        network.train(&x, &y, 200, 8);
        let final_loss = network.evaluate(&x, &y);

        assert!(final_loss < initial_loss);
    }

    #[test]
    fn test_same_seed_trains_identically() {
        let (x, y) = separable_batch();

        let mut a = NeuralNetwork::binary_classification(2, &[8, 8], 7);
        let mut b = NeuralNetwork::binary_classification(2, &[8, 8], 7);
        a.train(&x, &y, 50, 4);
        b.train(&x, &y, 50, 4);

        assert_eq!(a.predict_proba(&x), b.predict_proba(&x));
    }

    #[test]
    fn test_sgd_optimizer_also_trains() {
        let (x, y) = separable_batch();
        let mut network = NeuralNetwork::binary_classification(2, &[8], 3);
        network.set_optimizer(Box::new(SGD::new(0.1)));

        let initial_loss = network.evaluate(&x, &y);
        network.train(&x, &y, 100, 8);
        assert!(network.evaluate(&x, &y) < initial_loss);
    }

    #[test]
    fn test_num_parameters() {
        let network = NeuralNetwork::binary_classification(4, &[8], 42);
        // 4*8 + 8 biases, then 8*1 + 1 bias.
        assert_eq!(network.num_parameters(), 40 + 9);
    }
}
