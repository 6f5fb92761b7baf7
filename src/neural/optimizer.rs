#[cfg(feature = "gui")]
use std::sync::mpsc;

use log::{debug, info};

#[cfg(feature = "gui")]
use crate::viz::Visualizer;
use crate::{
    neural::{grad::Grad, Network},
    prelude::*,
};

/// Epochs between progress lines when no interval is configured.
pub const DEFAULT_LOG_INTERVAL: usize = 1_000;

/// Gradient descent with forward-difference derivative estimates.
///
/// Every epoch nudges each weight and bias by `eps` in turn, re-evaluates the
/// cost over the whole dataset, and then steps all parameters at once.
#[derive(Debug, Clone)]
pub struct Optimizer {
    epochs: usize,
    eps: f64,
    rate: f64,
    epochs_per_log: Option<usize>,
}

impl Optimizer {
    pub fn new(epochs: usize, eps: f64, rate: f64) -> Self {
        Self {
            epochs,
            eps,
            rate,
            epochs_per_log: Some(DEFAULT_LOG_INTERVAL),
        }
    }

    /// Log the cost every `epochs_per_log` epochs and at the last epoch.
    /// `None` turns progress logging off.
    pub fn with_log(mut self, epochs_per_log: Option<usize>) -> Self {
        self.epochs_per_log = epochs_per_log;
        self
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    pub fn set_epochs(&mut self, epochs: usize) {
        self.epochs = epochs;
    }

    pub fn train(&self, net: &mut Network) -> Result<()> {
        self.run(net, |_, _| {})
    }

    /// Trains on a worker thread while `Gui` plots the logged costs.
    /// Closing the window does not stop training.
    #[cfg(feature = "gui")]
    pub fn train_gui<Gui: Visualizer>(&self, net: &mut Network) -> Result<()> {
        std::thread::scope(|scope| -> Result<()> {
            let (tx, rx) = mpsc::channel();
            let handle = scope.spawn(move || {
                self.run(net, |epoch, cost| {
                    // the window may already be gone
                    let _ = tx.send((epoch, cost));
                })
            });

            let _ = eframe::run_native(
                "numdiff-nn",
                eframe::NativeOptions::default(),
                Box::new(move |cc| Box::new(Gui::new(cc, rx))),
            );

            handle.join().map_err(|_| Error::ThreadErr)?
        })
    }

    fn run<F: FnMut(usize, f64)>(&self, net: &mut Network, mut on_log: F) -> Result<()> {
        if net.layers.is_empty() {
            return Err(Error::NoLayers);
        }
        debug!(
            "training {} parameters on {} examples for {} epochs",
            parameter_count(net),
            net.dataset_size(),
            self.epochs
        );

        for epoch in 0..self.epochs {
            self.finite_diff_once(net)?;

            if self.should_log(epoch) {
                let cost = net.compute_cost()?;
                info!("Epoch: {epoch} Cost: {cost}");
                on_log(epoch, cost);
            }
        }
        Ok(())
    }

    fn should_log(&self, epoch: usize) -> bool {
        match self.epochs_per_log {
            Some(n) => (n != 0 && epoch % n == 0) || epoch + 1 == self.epochs,
            None => false,
        }
    }

    fn finite_diff_once(&self, net: &mut Network) -> Result<()> {
        let cost = net.compute_cost()?;
        let mut grad = Grad::zeros(net)?;

        for l in 0..net.layers.len() {
            for row in 0..net.layers[l].weights.rows() {
                for col in 0..net.layers[l].weights.cols() {
                    grad.weights[l][(row, col)] = self.partial(net, cost, |net| {
                        &mut net.layers[l].weights[(row, col)]
                    })?;
                }
            }
            for col in 0..net.layers[l].biases.cols() {
                grad.biases[l][(0, col)] = self.partial(net, cost, |net| {
                    &mut net.layers[l].biases[(0, col)]
                })?;
            }
        }

        for (layer, (w_grad, b_grad)) in net
            .layers
            .iter_mut()
            .zip(grad.weights.iter().zip(&grad.biases))
        {
            layer.weights.sub_in_place(&(w_grad * self.rate))?;
            layer.biases.sub_in_place(&(b_grad * self.rate))?;
        }
        Ok(())
    }

    /// Estimates d(cost)/d(param) as `(cost(param + eps) - cost) / eps`.
    /// The parameter is restored before returning, even on error.
    fn partial<P>(&self, net: &mut Network, cost: f64, param: P) -> Result<f64>
    where
        P: Fn(&mut Network) -> &mut f64,
    {
        let saved = *param(net);
        *param(net) = saved + self.eps;
        let nudged = net.compute_cost();
        *param(net) = saved;

        Ok((nudged? - cost) / self.eps)
    }
}

fn parameter_count(net: &Network) -> usize {
    net.layers
        .iter()
        .map(|layer| layer.weights.rows() * layer.weights.cols() + layer.biases.cols())
        .sum()
}
