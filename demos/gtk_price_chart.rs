#[cfg(feature = "gtk4-adapter")]
fn main() {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::{Duration, TimeZone, Utc};
    use gtk4 as gtk;
    use gtk4::prelude::*;

    use price_chart::api::{ChartEngine, ChartEngineConfig};
    use price_chart::core::Sample;
    use price_chart::platform_gtk::GtkChartAdapter;
    use price_chart::render::CairoRenderer;

    let _ = price_chart::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.price-chart.demos.gtk")
        .build();

    app.connect_activate(|app| {
        let renderer = match CairoRenderer::new(960, 540) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("failed to create renderer: {err}");
                return;
            }
        };
        let engine = match ChartEngine::new(renderer, ChartEngineConfig::default()) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("failed to create engine: {err}");
                return;
            }
        };

        let Some(start) = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single() else {
            return;
        };
        let samples: Vec<Sample> = (0..240)
            .map(|i| {
                let t = f64::from(i);
                let price = 64_000.0 + (t * 0.07).sin() * 900.0 + t * 3.5;
                let volume = 120.0 + (t * 0.31).cos().abs() * 80.0;
                Sample::new(start + Duration::hours(i64::from(i)), price, volume)
            })
            .collect();
        let reference_price = samples.first().map_or(0.0, |s| s.price);

        let adapter = Rc::new(GtkChartAdapter::new(engine));
        if let Err(err) = adapter.set_data(samples, reference_price) {
            eprintln!("set_data failed: {err}");
        }

        let fullscreen = Rc::new(Cell::new(false));
        let toggle = gtk::Button::with_label("Toggle fullscreen");
        {
            let adapter = Rc::clone(&adapter);
            let fullscreen = Rc::clone(&fullscreen);
            toggle.connect_clicked(move |_| {
                fullscreen.set(!fullscreen.get());
                if let Err(err) = adapter.set_fullscreen(fullscreen.get()) {
                    eprintln!("set_fullscreen failed: {err}");
                }
            });
        }

        let layout = gtk::Box::new(gtk::Orientation::Vertical, 6);
        layout.append(&toggle);
        layout.append(adapter.drawing_area());

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("price-chart | hover crosshair")
            .default_width(960)
            .default_height(580)
            .build();
        window.set_child(Some(&layout));
        window.present();
    });

    let _ = app.run();
}

#[cfg(not(feature = "gtk4-adapter"))]
fn main() {
    println!("run with: cargo run --features desktop --example gtk_price_chart");
}
