pub trait Activation {
    /// Returns activation function at x
    fn call(&self, x: f64) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activations {
    Identity,
    Sigmoid,
    Arctan,
    ReLU,
}

impl Activation for Activations {
    fn call(&self, x: f64) -> f64 {
        use Activations::*;
        match self {
            Identity => x,
            Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Arctan => x.atan(),
            ReLU => x.max(0.0),
        }
    }
}
