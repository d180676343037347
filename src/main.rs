use sweepmark::cli::Args;
use sweepmark::config::HighlighterOptions;
use sweepmark::paths::{self, PathConfig};
use sweepmark::shell;
use sweepmark::widgets::highlighter::{Highlighter, HighlighterState};
use sweepmark::widgets::options_panel::render_options_panel;
use sweepmark::widgets::status::{StatusBar, StatusEntry};

use clap::Parser;
use eframe::egui;
use log::{debug, info, warn};

/// Text of the always-hover-replaying sample
const HOVER_SAMPLE_TEXT: &str = "Hover to replay";

/// Main application state
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
struct SweepmarkApp {
    /// Persisted options of the primary highlighter
    options: HighlighterOptions,
    show_options: bool,
    #[serde(skip)]
    primary: HighlighterState,
    #[serde(skip)]
    hover_sample: HighlighterState,
    #[serde(skip)]
    status_bar: StatusBar,
    #[serde(skip)]
    last_frame_ms: f32,
}

impl Default for SweepmarkApp {
    fn default() -> Self {
        Self {
            options: HighlighterOptions::new(shell::DEFAULT_TEXT),
            show_options: true,
            primary: HighlighterState::new(),
            hover_sample: HighlighterState::new(),
            status_bar: StatusBar::new(),
            last_frame_ms: 0.0,
        }
    }
}

impl SweepmarkApp {
    fn hover_sample_options(&self) -> HighlighterOptions {
        HighlighterOptions {
            text: HOVER_SAMPLE_TEXT.to_string(),
            replay_on_hover: Some(true),
            ..self.options.clone()
        }
    }
}

impl eframe::App for SweepmarkApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if let Some(ms) = frame.info().cpu_usage {
            self.last_frame_ms = ms * 1000.0;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::F2)) {
            self.show_options = !self.show_options;
        }

        if self.show_options {
            egui::SidePanel::right("options_panel")
                .resizable(false)
                .default_width(220.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        let actions = render_options_panel(ui, &mut self.options);
                        if actions.changed {
                            debug!("Options changed: {:?}", self.options);
                        }
                        if actions.remount {
                            info!("Replay requested, remounting highlighters");
                            self.primary.unmount();
                            self.hover_sample.unmount();
                            self.status_bar.set_message("replayed");
                        }
                    });
                });
        }

        let primary_cfg = self.options.resolve();
        let sample_cfg = self.hover_sample_options().resolve();

        self.status_bar.render(
            ctx,
            &[
                StatusEntry {
                    name: "main",
                    phase: self.primary.phase(),
                    layers: self.primary.layers(),
                },
                StatusEntry {
                    name: "hover",
                    phase: self.hover_sample.phase(),
                    layers: self.hover_sample.layers(),
                },
            ],
            self.last_frame_ms,
        );

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.add(Highlighter::new(&mut self.primary, &primary_cfg));
                ui.add_space(48.0);
                ui.add(Highlighter::new(&mut self.hover_sample, &sample_cfg));
            });
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(json) = serde_json::to_string(&*self) {
            storage.set_string(eframe::APP_KEY, json);
            debug!("App state saved: {:?}", self.options);
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Parse command-line arguments first (needed for log setup)
    let args = Args::parse();

    // Create path configuration from CLI args and environment
    let path_config = PathConfig::from_env_and_cli(args.config_dir.clone());

    // Ensure directories exist
    if let Err(e) = paths::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {:#}", e);
    }

    shell::init_logger(&args, &path_config)?;

    info!("Sweepmark starting...");
    debug!("Command-line args: {:?}", args);

    let cli_options = if args.has_options() {
        Some(shell::startup_options(&args)?)
    } else {
        None
    };

    let persistence_path = paths::config_file("sweepmark.json", &path_config);
    info!("Config path: {}", persistence_path.display());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 420.0])
            .with_title(format!("Sweepmark v{} • F2 toggles options", env!("CARGO_PKG_VERSION")))
            .with_resizable(true),
        persist_window: true,
        #[cfg(not(target_arch = "wasm32"))]
        persistence_path: Some(persistence_path),
        ..Default::default()
    };

    eframe::run_native(
        "Sweepmark",
        native_options,
        Box::new(move |cc| {
            // Load persisted app state if available, otherwise create default
            let mut app: SweepmarkApp = cc
                .storage
                .and_then(|storage| storage.get_string(eframe::APP_KEY))
                .and_then(|json| serde_json::from_str(&json).ok())
                .unwrap_or_else(|| {
                    info!("No persisted state found, creating default app");
                    SweepmarkApp::default()
                });

            // CLI arguments have priority over persisted options
            if let Some(options) = cli_options {
                info!("Using highlighter options from command line");
                app.options = options;
            } else if app.options.text.is_empty() {
                warn!("Persisted options had no text, using default");
                app.options.text = shell::DEFAULT_TEXT.to_string();
            }

            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    info!("Sweepmark exiting");
    Ok(())
}
