pub mod activations;
mod grad;
pub mod init;
pub mod optimizer;

use crate::prelude::*;
use std::io::Write;

use crate::matrix::{ops::Dot, Matrix};
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use self::activations::{Activation, Activations};
use self::optimizer::Optimizer;

/// Divider printed around a `feed_forward` report.
const DIVIDER: &str = "------------------------";

/// A fully connected layer: `n_inputs x n_neurons` weights and a `1 x n_neurons` bias row.
#[derive(Debug, Clone)]
pub struct DenseLayer {
    weights: Matrix,
    biases: Matrix,
}

/// Feed-forward network together with the dataset it is trained on.
///
/// Hidden layers use `hidden_activation` (relu by default), the last layer
/// uses `output_activation` (sigmoid by default).
#[derive(Debug, Clone)]
pub struct Network {
    inputs: Vec<Matrix>,
    targets: Vec<Matrix>,
    layers: Vec<DenseLayer>,
    n_inputs: usize,
    n_outputs: usize,
    hidden_activation: Activations,
    output_activation: Activations,
    rng: StdRng,
}

impl DenseLayer {
    /// Initializes a layer given the number of inputs and neurons.
    /// Params are drawn uniformly from [-1.0, 1.0).
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, n_neurons: usize, rng: &mut R) -> Result<Self> {
        Ok(Self {
            weights: init::uniform_matrix(n_inputs, n_neurons, rng)?,
            biases: init::uniform_matrix(1, n_neurons, rng)?,
        })
    }

    /// Affine part of the layer, `input . weights + biases`, without activation.
    pub fn forward(&self, input: &Matrix) -> Result<Matrix> {
        let mut res = input.dot(&self.weights)?;
        res.add_in_place(&self.biases)?;
        Ok(res)
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &Matrix {
        &self.biases
    }

    /// Returns the amount of inputs this layer accepts
    pub fn input_amount(&self) -> usize {
        self.weights.rows()
    }

    /// Returns the amount of neurons in the layer
    pub fn neuron_amount(&self) -> usize {
        self.weights.cols()
    }
}

impl Network {
    /// Splits every row of `data` into an input row (first `n_inputs` columns) and a
    /// target row (remaining `n_outputs` columns), keeping row order.
    ///
    /// An empty `data` matrix gives a network with no training examples. Both widths
    /// must be non-zero.
    pub fn new(data: &Matrix, n_inputs: usize, n_outputs: usize) -> Result<Self> {
        if n_inputs == 0 || n_outputs == 0 {
            return Err(Error::InvalidShape {
                rows: n_inputs,
                cols: n_outputs,
            });
        }
        let width = n_inputs.checked_add(n_outputs);
        if !data.is_empty() && width != Some(data.cols()) {
            return Err(Error::DatasetShapeMismatch {
                expected: width.unwrap_or(usize::MAX),
                got: data.cols(),
            });
        }

        let mut inputs = Vec::with_capacity(data.rows());
        let mut targets = Vec::with_capacity(data.rows());
        for row in data.iter_rows() {
            let (input, target) = row.split_at(n_inputs);
            inputs.push(Matrix::from_row(input.to_vec())?);
            targets.push(Matrix::from_row(target.to_vec())?);
        }

        Ok(Self {
            inputs,
            targets,
            layers: Vec::new(),
            n_inputs,
            n_outputs,
            hidden_activation: Activations::ReLU,
            output_activation: Activations::Sigmoid,
            rng: StdRng::from_entropy(),
        })
    }

    /// Reseeds the parameter initializer so layer weights are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_activations(mut self, hidden: Activations, output: Activations) -> Self {
        self.hidden_activation = hidden;
        self.output_activation = output;
        self
    }

    pub fn dataset_size(&self) -> usize {
        self.inputs.len()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Neuron count of layer `layer`, if it exists.
    pub fn layer_width(&self, layer: usize) -> Option<usize> {
        self.layers.get(layer).map(DenseLayer::neuron_amount)
    }

    pub fn input_width(&self) -> usize {
        self.n_inputs
    }

    pub fn output_width(&self) -> usize {
        self.n_outputs
    }

    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    /// Appends a layer of `n_neurons` fed by the previous layer (or the inputs).
    pub fn add_layer(&mut self, n_neurons: usize) -> Result<()> {
        self.add_layers(&[n_neurons])
    }

    /// Appends layers in order. Nothing is appended if any count is zero.
    ///
    /// Layers can still be appended after training; earlier layers keep their
    /// trained values and the new layer is sized from the current last layer.
    pub fn add_layers(&mut self, neuron_counts: &[usize]) -> Result<()> {
        let mut n_inputs = self.layers.last().map_or(self.n_inputs, DenseLayer::neuron_amount);

        let mut new_layers = Vec::with_capacity(neuron_counts.len());
        for &n_neurons in neuron_counts {
            new_layers.push(DenseLayer::new(n_inputs, n_neurons, &mut self.rng)?);
            n_inputs = n_neurons;
        }

        for layer in new_layers {
            debug!(
                "layer {}: {} x {}",
                self.layers.len(),
                layer.input_amount(),
                layer.neuron_amount()
            );
            self.layers.push(layer);
        }
        Ok(())
    }

    /// Reset every weight and bias to a fresh draw from the network's random source.
    pub fn randomize(&mut self) {
        for layer in self.layers.iter_mut() {
            init::fill_uniform(&mut layer.weights, &mut self.rng);
            init::fill_uniform(&mut layer.biases, &mut self.rng);
        }
    }

    /// Propagates a `1 x n_inputs` row through every layer.
    pub fn predict(&self, input: &Matrix) -> Result<Matrix> {
        if input.dim() != (1, self.n_inputs) {
            return Err(Error::InputShapeMismatch {
                expected: self.n_inputs,
                got: input.dim(),
            });
        }
        let (last, hidden) = self.layers.split_last().ok_or(Error::NoLayers)?;

        let mut activations = input.clone();
        for layer in hidden {
            activations = layer.forward(&activations)?;
            activations.apply(|x| self.hidden_activation.call(x));
        }

        let mut output = last.forward(&activations)?;
        output.apply(|x| self.output_activation.call(x));
        Ok(output)
    }

    /// Sum of squared errors over the whole dataset, divided by the number of examples.
    pub fn compute_cost(&self) -> Result<f64> {
        if self.layers.is_empty() {
            return Err(Error::NoLayers);
        }
        if self.inputs.is_empty() {
            return Ok(0.0);
        }

        let mut total = 0.0;
        for (input, target) in self.inputs.iter().zip(&self.targets) {
            let diff = (&self.predict(input)? - target)?;
            total += diff.iter_rows().flatten().map(|d| d * d).sum::<f64>();
        }
        Ok(total / self.inputs.len() as f64)
    }

    /// Trains for `epochs` epochs of finite-difference gradient descent, logging the
    /// cost every 1000th epoch and at the last one.
    pub fn train(&mut self, epochs: usize, eps: f64, rate: f64) -> Result<()> {
        Optimizer::new(epochs, eps, rate).train(self)
    }

    /// Writes each row of `inputs` next to the network's prediction for it.
    pub fn feed_forward<W: Write>(&self, inputs: &Matrix, out: &mut W) -> Result<()> {
        if inputs.cols() != self.n_inputs {
            return Err(Error::InputShapeMismatch {
                expected: self.n_inputs,
                got: inputs.dim(),
            });
        }
        if self.layers.is_empty() {
            return Err(Error::NoLayers);
        }

        writeln!(out, "{DIVIDER}")?;
        for row in inputs.iter_rows() {
            let output = self.predict(&Matrix::from_row(row.to_vec())?)?;
            for x in row {
                write!(out, "{x} ")?;
            }
            for y in output.iter_rows().flatten() {
                write!(out, "| {y} ")?;
            }
            writeln!(out)?;
        }
        writeln!(out, "{DIVIDER}")?;
        Ok(())
    }
}
