use std::io::stdout;

use log::info;
use numdiff_nn::{matrix::Matrix, neural::Network, prelude::Result};

/// Half a sine period, x scaled to [0, 1]: (x, sin(pi * x)).
fn training_data() -> Result<Matrix> {
    Matrix::from_array([
        [0.0000, 0.0000], // x = 0.0
        [0.1000, 0.3090], // x = PI/10
        [0.1667, 0.5000], // x = PI/6
        [0.2500, 0.7071], // x = PI/4
        [0.3333, 0.8660], // x = PI/3
        [0.5000, 1.0000], // x = PI/2
        [0.6667, 0.8660], // x = 2*PI/3
        [0.7500, 0.7071], // x = 3*PI/4
        [0.8333, 0.5000], // x = 5*PI/6
        [0.9000, 0.3090], // x = 9*PI/10
        [1.0000, 0.0000], // x = PI
    ])
}

fn main() -> Result<()> {
    // RUST_LOG=info shows the epoch costs
    pretty_env_logger::init();

    let mut net = Network::new(&training_data()?, 1, 1)?;
    net.add_layers(&[6, 1])?;
    info!("initial cost: {}", net.compute_cost()?);

    net.train(50_000, 1e-5, 1e-1)?;

    let probe = Matrix::from_array([[0.0], [0.1000], [0.1667], [0.2500]])?;
    net.feed_forward(&probe, &mut stdout().lock())?;
    Ok(())
}
