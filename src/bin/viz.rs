use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use projectile_sim::{integrate, RawParameters, TrajectoryResult};

fn main() -> eframe::Result {
    let app = TrajectoryViz {
        input: RawParameters::new("50", "45", "0", "0,1"),
        ..Default::default()
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Projectile Motion with Air Drag",
        options,
        Box::new(|_| Ok(Box::new(app))),
    )
}

#[derive(Default)]
struct TrajectoryViz {
    input: RawParameters,
    trajectory: Option<TrajectoryResult>,
    error: Option<String>,
}

impl TrajectoryViz {
    fn run(&mut self) {
        match self.input.parse() {
            Ok(params) => {
                self.trajectory = Some(integrate(&params));
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }
}

/// One panel: `ys` against `xs`.
#[allow(clippy::too_many_arguments)]
fn plot_panel(
    ui: &mut egui::Ui,
    id: &str,
    title: &str,
    (x_label, y_label): (&str, &str),
    xs: &[f64],
    ys: &[f64],
    color: egui::Color32,
    size: egui::Vec2,
) {
    ui.vertical(|ui| {
        ui.label(title);
        let points: PlotPoints = xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect();
        Plot::new(id)
            .width(size.x)
            .height(size.y)
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(title, points).color(color));
            });
    });
}

impl eframe::App for TrajectoryViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("inputs").show(ctx, |ui| {
            egui::Grid::new("params").num_columns(2).show(ui, |ui| {
                ui.label("Initial speed (m/s):");
                ui.text_edit_singleline(&mut self.input.speed);
                ui.end_row();
                ui.label("Launch angle (degrees):");
                ui.text_edit_singleline(&mut self.input.angle);
                ui.end_row();
                ui.label("Initial height (m):");
                ui.text_edit_singleline(&mut self.input.height);
                ui.end_row();
                ui.label("Drag coefficient k (1/s):");
                ui.text_edit_singleline(&mut self.input.drag);
                ui.end_row();
            });
            if ui.button("Run simulation").clicked() {
                self.run();
            }
            if let Some(err) = &self.error {
                ui.colored_label(egui::Color32::RED, format!("Input error: {err}"));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(r) = &self.trajectory else {
                ui.label("Enter launch parameters and press Run.");
                return;
            };

            let available = ui.available_size();
            let size = egui::vec2(available.x / 2.0 - 8.0, available.y / 2.0 - 16.0);

            ui.horizontal(|ui| {
                plot_panel(ui, "xy", "Trajectory", ("X (m)", "Y (m)"), &r.x, &r.y, egui::Color32::BLUE, size);
                plot_panel(ui, "tx", "X(t)", ("Time (s)", "X (m)"), &r.t, &r.x, egui::Color32::GREEN, size);
            });
            ui.horizontal(|ui| {
                plot_panel(ui, "ty", "Y(t)", ("Time (s)", "Y (m)"), &r.t, &r.y, egui::Color32::RED, size);
                plot_panel(ui, "tv", "v(t)", ("Time (s)", "Speed (m/s)"), &r.t, &r.v, egui::Color32::from_rgb(255, 0, 255), size);
            });
        });
    }
}
