use crate::matrix::Matrix;
use crate::prelude::*;

use super::Network;

/// Cost derivatives laid out like the network's parameters:
/// one matrix per layer for the weights and one for the biases.
pub struct Grad {
    pub weights: Vec<Matrix>,
    pub biases: Vec<Matrix>,
}

impl Grad {
    pub fn zeros(net: &Network) -> Result<Self> {
        let mut weights = Vec::with_capacity(net.layers.len());
        let mut biases = Vec::with_capacity(net.layers.len());

        for layer in &net.layers {
            weights.push(Matrix::new(layer.weights.rows(), layer.weights.cols())?);
            biases.push(Matrix::new(1, layer.biases.cols())?);
        }

        Ok(Grad { weights, biases })
    }
}
