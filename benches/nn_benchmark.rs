use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numdiff_nn::{
    matrix::Matrix,
    neural::{optimizer::Optimizer, Network},
};

fn sine_table(rows: usize) -> Matrix {
    let data = (0..rows)
        .map(|i| {
            let x = i as f64 / (rows - 1) as f64;
            vec![x, (std::f64::consts::PI * x).sin()]
        })
        .collect();
    Matrix::from_vec(data).unwrap()
}

fn network(rows: usize, layers: &[usize]) -> Network {
    let mut net = Network::new(&sine_table(rows), 1, 1).unwrap().with_seed(0);
    net.add_layers(layers).unwrap();
    net
}

fn train(net: &mut Network, epochs: usize) {
    let optim = Optimizer::new(epochs, 1e-5, 1e-1).with_log(None);
    assert!(optim.train(net).is_ok());
}

fn forward(net: &Network, inputs: &Matrix) {
    for i in 0..inputs.rows() {
        assert!(net.predict(&inputs.row(i).unwrap()).is_ok());
    }
}

fn bench_forward(c: &mut Criterion) {
    let small = network(11, &[6, 1]);
    let medium = network(11, &[20, 20, 1]);

    let input_small = Matrix::new(10, 1).unwrap();
    let input_medium = Matrix::new(1_000, 1).unwrap();

    c.bench_function("forward small 10 inputs", |b| {
        b.iter(|| forward(black_box(&small), black_box(&input_small)))
    });
    c.bench_function("forward small 1,000 inputs", |b| {
        b.iter(|| forward(black_box(&small), black_box(&input_medium)))
    });
    c.bench_function("forward medium 10 inputs", |b| {
        b.iter(|| forward(black_box(&medium), black_box(&input_small)))
    });
    c.bench_function("forward medium 1,000 inputs", |b| {
        b.iter(|| forward(black_box(&medium), black_box(&input_medium)))
    });
}

fn bench_cost(c: &mut Criterion) {
    let net = network(100, &[6, 1]);
    c.bench_function("cost 100 examples", |b| {
        b.iter(|| black_box(&net).compute_cost().unwrap())
    });
}

fn bench_train(c: &mut Criterion) {
    c.bench_function("sine 10 epochs", |b| {
        b.iter(|| train(&mut network(11, &[6, 1]), black_box(10)))
    });
    c.bench_function("sine 100 epochs", |b| {
        b.iter(|| train(&mut network(11, &[6, 1]), black_box(100)))
    });
    c.bench_function("wide 10 epochs", |b| {
        b.iter(|| train(&mut network(11, &[20, 20, 1]), black_box(10)))
    });
}

criterion_group!(benches, bench_forward, bench_cost, bench_train);
criterion_main!(benches);
