use std::io::stdout;

use numdiff_nn::{
    matrix::Matrix,
    neural::{optimizer::Optimizer, Network},
    prelude::Result,
    viz::CostPlot,
};

fn main() -> Result<()> {
    pretty_env_logger::init();

    // y = sin(pi * x) on 21 evenly spaced points
    const POINTS: usize = 21;
    let mut data = Matrix::default();
    for i in 0..POINTS {
        let x = i as f64 / (POINTS - 1) as f64;
        data.push_row(vec![x, (std::f64::consts::PI * x).sin()])?;
    }

    let mut net = Network::new(&data, 1, 1)?;
    net.add_layers(&[8, 1])?;

    let optim = Optimizer::new(20_000, 1e-5, 1e-1).with_log(Some(10));
    optim.train_gui::<CostPlot>(&mut net)?;

    println!("------------------");
    println!("Final training cost: {}", net.compute_cost()?);

    let mut probe = Matrix::default();
    for x in [0.05, 0.35, 0.5, 0.65, 0.95] {
        probe.push_row(vec![x])?;
    }
    net.feed_forward(&probe, &mut stdout().lock())?;
    Ok(())
}
