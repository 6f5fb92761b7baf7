use std::{
    collections::VecDeque,
    sync::{mpsc::Receiver, Arc, Mutex, MutexGuard},
    thread,
};

use eframe::CreationContext;
use egui::plot::{Line, Plot};

/// Sample sent to the GUI on each logged epoch: (epoch, cost)
pub type EpochCost = (usize, f64);

/// Any window that can be fed logged costs while training runs
pub trait Visualizer: eframe::App + 'static {
    const DATA_LIMIT: usize = 20_000;
    fn new(cc: &CreationContext, rx: Receiver<EpochCost>) -> Self;
}

/// Default window: a line plot of cost against epoch
pub struct CostPlot {
    data: Arc<Mutex<VecDeque<EpochCost>>>,
}

impl Visualizer for CostPlot {
    /// Starts a thread that drains `rx` into the plot until training hangs up.
    fn new(cc: &CreationContext, rx: Receiver<EpochCost>) -> Self {
        let data = Arc::new(Mutex::new(VecDeque::new()));
        let data_clone = data.clone();

        let ctx = cc.egui_ctx.clone();
        thread::spawn(move || {
            while let Ok(sample) = rx.recv() {
                let mut data = lock(&data_clone);
                if data.len() == Self::DATA_LIMIT {
                    data.pop_front();
                }
                data.push_back(sample);
                drop(data);
                ctx.request_repaint();
            }
        });

        Self { data }
    }
}

impl eframe::App for CostPlot {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let points: Vec<[f64; 2]> = self
            .get_data()
            .into_iter()
            .map(|(epoch, cost)| [epoch as f64, cost])
            .collect();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical(|ui| {
                match points.last() {
                    Some([epoch, cost]) => ui.heading(format!("Epoch {} cost: {cost}", *epoch as usize)),
                    None => ui.heading("Waiting for the first epoch"),
                };
                Plot::new("Cost").show(ui, |plot_ui| plot_ui.line(Line::new(points)));
            });
        });
    }
}

impl CostPlot {
    /// Returns a copy of the samples received so far
    pub fn get_data(&self) -> Vec<EpochCost> {
        lock(&self.data).iter().copied().collect()
    }
}

fn lock(data: &Mutex<VecDeque<EpochCost>>) -> MutexGuard<'_, VecDeque<EpochCost>> {
    data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
