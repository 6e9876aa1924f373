#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use egui_range_slider::{PriceBounds, RangeSlider, RangeSliderOptions};

/// What the host page would put on the track container as `data-minprice` / `data-maxprice`.
const MIN_PRICE_ATTR: &str = "0";
const MAX_PRICE_ATTR: &str = "1000";

struct Product {
    name: &'static str,
    price: i64,
}

const PRODUCTS: &[Product] = &[
    Product { name: "Socks", price: 8 },
    Product { name: "Scarf", price: 35 },
    Product { name: "Sneakers", price: 120 },
    Product { name: "Jacket", price: 240 },
    Product { name: "Boots", price: 310 },
    Product { name: "Watch", price: 650 },
    Product { name: "Bicycle", price: 890 },
    Product { name: "Espresso machine", price: 940 },
];

struct App {
    slider: RangeSlider,
    show_debug_log: bool,
}

impl App {
    fn new() -> Result<Self, egui_range_slider::RangeSliderError> {
        let bounds = PriceBounds::from_attributes(MIN_PRICE_ATTR, MAX_PRICE_ATTR)?;
        let slider = RangeSlider::new(
            bounds,
            RangeSliderOptions {
                initial_min_value: Some(6),
                initial_max_value: Some(900),
                desired_width: 420.0,
                debug_event_log: true,
                ..Default::default()
            },
        )?;
        Ok(Self {
            slider,
            show_debug_log: false,
        })
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let app = App::new().map_err(|err| {
        log::error!("price filter setup failed: {err}");
        eframe::Error::AppCreation(Box::new(err))
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 420.0])
            .with_title("egui_range_slider demo"),
        ..Default::default()
    };

    eframe::run_native(
        "egui_range_slider demo",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("egui_range_slider_demo_help").show(ctx, |ui| {
            ui.add(
                egui::Label::new(concat!(
                    "Drag either thumb. Values move one unit per step; ",
                    "the thumbs stop before they meet.",
                ))
                .selectable(false),
            );
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Price");
            self.slider.ui(ui);

            ui.horizontal(|ui| {
                if ui.button("Clear filter").clicked() {
                    self.slider.reset();
                }
                ui.checkbox(&mut self.show_debug_log, "Show event log");
            });

            ui.separator();

            let selection = self.slider.live_selection();
            for product in PRODUCTS.iter().filter(|p| selection.contains(p.price)) {
                ui.label(format!("{}: ${}", product.name, product.price));
            }

            if self.show_debug_log {
                ui.separator();
                let mut text = self.slider.debug_log_text();
                ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .code_editor()
                        .interactive(false)
                        .desired_width(f32::INFINITY),
                );
            }
        });
    }
}
