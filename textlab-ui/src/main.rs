use std::time::Duration;

use eframe::{egui, Frame};
use egui::Context;

use log::warn;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use textlab_core::analysis::{EditDistanceReport, ErrorBody, PerplexityReport};
use textlab_core::morph::MorphAnalysis;
use textlab_core::text::ngram::NGramOrder;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Selected panel.
#[derive(Debug, PartialEq, Clone, Copy)]
enum Tab {
    NGrams,
    Perplexity,
    EditDistance,
    Tokenize,
    Morph,
}

/// Last answer from the server, one variant per endpoint.
enum Output {
    Tokens(String, Vec<String>),
    Perplexity(PerplexityReport),
    EditDistance(EditDistanceReport),
    Morph(MorphAnalysis),
    Error(String),
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
    base_url: String,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new(base_url: String) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Sends a JSON POST request to `path`.
    ///
    /// Non-2xx answers are decoded as `{ "error": ... }` bodies.
    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, String> {
        let response = self.client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .map_err(|e| format!("Error connecting to backend: {e}"))?;

        if response.status().is_success() {
            response.json::<T>().map_err(|e| e.to_string())
        } else {
            let status = response.status();
            match response.json::<ErrorBody>() {
                Ok(body) => Err(body.error),
                Err(_) => Err(format!("Server answered {status}")),
            }
        }
    }

    fn analyze(&self, text: &str, order: NGramOrder) -> Result<Vec<String>, String> {
        self.post("/api/analyze", &json!({ "text": text, "type": order.tag() }))
    }

    fn perplexity(&self, training_text: &str, test_text: &str) -> Result<PerplexityReport, String> {
        self.post("/api/perplexity", &json!({ "training_text": training_text, "test_text": test_text }))
    }

    fn edit_distance(&self, source: &str, target: &str, with_matrix: bool) -> Result<EditDistanceReport, String> {
        self.post(
            "/api/edit-distance",
            &json!({ "source": source, "target": target, "with_matrix": with_matrix }),
        )
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>, String> {
        self.post("/api/tokenize", &json!({ "text": text }))
    }

    fn morph_analysis(&self, word: &str) -> Result<MorphAnalysis, String> {
        self.post("/api/morph-analysis", &json!({ "word": word }))
    }
}

/// Global UI state (MUST persist between frames in egui).
struct TextLabUI {
    rest: RESTContext,
    tab: Tab,
    output: Option<Output>,

    input_text: String,
    test_text: String,
    source: String,
    target: String,
    show_matrix: bool,
    word: String,
}

impl TextLabUI {
    /// Initializes the UI with sane defaults.
    fn new() -> reqwest::Result<Self> {
        let base_url = std::env::var("TEXTLAB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        Ok(Self {
            rest: RESTContext::new(base_url)?,
            tab: Tab::NGrams,
            output: None,

            input_text: "The quick brown fox jumps over the lazy dog.".to_owned(),
            test_text: "The quick brown fox".to_owned(),
            source: "kitten".to_owned(),
            target: "sitting".to_owned(),
            show_matrix: true,
            word: "running".to_owned(),
        })
    }

    /// Stores a request outcome for display.
    fn set_output<T>(&mut self, result: Result<T, String>, wrap: impl FnOnce(T) -> Output) {
        self.output = Some(match result {
            Ok(value) => wrap(value),
            Err(e) => {
                warn!("request failed: {e}");
                Output::Error(e)
            }
        });
    }

    fn ngrams(&mut self, order: NGramOrder) {
        let result = self.rest.analyze(&self.input_text, order);
        self.set_output(result, |grams| Output::Tokens(format!("{order}s"), grams));
    }

    fn show_inputs(&mut self, ui: &mut egui::Ui) {
        match self.tab {
            Tab::NGrams => {
                ui.label("Text");
                ui.text_edit_multiline(&mut self.input_text);
                ui.horizontal(|ui| {
                    for order in [NGramOrder::Unigram, NGramOrder::Bigram, NGramOrder::Trigram] {
                        if ui.button(order.tag()).clicked() {
                            self.ngrams(order);
                        }
                    }
                });
            }
            Tab::Perplexity => {
                ui.label("Training text");
                ui.text_edit_multiline(&mut self.input_text);
                ui.label("Test text");
                ui.text_edit_multiline(&mut self.test_text);
                if ui.button("Calculate perplexity").clicked() {
                    let result = self.rest.perplexity(&self.input_text, &self.test_text);
                    self.set_output(result, Output::Perplexity);
                }
            }
            Tab::EditDistance => {
                egui::Grid::new("edit_distance_grid")
                    .num_columns(2)
                    .spacing([20.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Source");
                        ui.text_edit_singleline(&mut self.source);
                        ui.end_row();
                        ui.label("Target");
                        ui.text_edit_singleline(&mut self.target);
                        ui.end_row();
                    });
                ui.checkbox(&mut self.show_matrix, "Show distance matrix (short words only)");
                if ui.button("Calculate distance").clicked() {
                    let result = self.rest.edit_distance(&self.source, &self.target, self.show_matrix);
                    self.set_output(result, Output::EditDistance);
                }
            }
            Tab::Tokenize => {
                ui.label("Text");
                ui.text_edit_multiline(&mut self.input_text);
                if ui.button("Tokenize").clicked() {
                    let result = self.rest.tokenize(&self.input_text);
                    self.set_output(result, |tokens| Output::Tokens("Characters".to_owned(), tokens));
                }
            }
            Tab::Morph => {
                ui.horizontal(|ui| {
                    ui.label("Word");
                    ui.text_edit_singleline(&mut self.word);
                });
                if ui.button("Analyze").clicked() {
                    let result = self.rest.morph_analysis(&self.word);
                    self.set_output(result, Output::Morph);
                }
            }
        }
    }

    fn show_output(&self, ui: &mut egui::Ui) {
        let Some(output) = &self.output else {
            ui.label("Results will appear here");
            return;
        };

        match output {
            Output::Error(e) => {
                ui.colored_label(egui::Color32::RED, e);
            }
            Output::Tokens(title, tokens) => {
                ui.heading(format!("{title} ({})", tokens.len()));
                ui.horizontal_wrapped(|ui| {
                    for token in tokens {
                        ui.label(format!("[{}]", token));
                    }
                });
            }
            Output::Perplexity(report) => {
                ui.heading(format!("Perplexity: {}", report.perplexity));
                ui.label(&report.details);
            }
            Output::EditDistance(report) => {
                ui.heading(format!("Distance: {}", report.distance));
                ui.label(format!("{:?} → {:?}", report.source, report.target));
                if let Some(matrix) = &report.matrix {
                    show_matrix(ui, &report.source, &report.target, matrix);
                }
            }
            Output::Morph(result) => {
                egui::Grid::new("morph_grid")
                    .num_columns(2)
                    .spacing([20.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for (name, value) in [
                            ("Original", result.original.clone()),
                            ("Root", result.root.clone()),
                            ("Suffix", result.suffix.clone()),
                            ("Tokens", result.tokens.join(" ")),
                            ("Stem", result.stem.clone()),
                            ("Lemma", result.lemma.clone()),
                        ] {
                            ui.label(name);
                            ui.label(value);
                            ui.end_row();
                        }
                    });
            }
        }
    }
}

/// Renders the Levenshtein table with the words along its borders.
fn show_matrix(ui: &mut egui::Ui, source: &str, target: &str, matrix: &[Vec<usize>]) {
    let source: Vec<char> = source.chars().collect();
    egui::Grid::new("matrix_grid").striped(true).show(ui, |ui| {
        ui.label("");
        ui.label("ε");
        for c in target.chars() {
            ui.label(c.to_string());
        }
        ui.end_row();

        for (i, row) in matrix.iter().enumerate() {
            ui.label(if i == 0 { "ε".to_owned() } else { source[i - 1].to_string() });
            for cell in row {
                ui.label(cell.to_string());
            }
            ui.end_row();
        }
    });
}

impl eframe::App for TextLabUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let previous = self.tab;
                ui.selectable_value(&mut self.tab, Tab::NGrams, "N-grams");
                ui.selectable_value(&mut self.tab, Tab::Perplexity, "Perplexity");
                ui.selectable_value(&mut self.tab, Tab::EditDistance, "Edit distance");
                ui.selectable_value(&mut self.tab, Tab::Tokenize, "Tokenize");
                ui.selectable_value(&mut self.tab, Tab::Morph, "Morphology");
                if previous != self.tab {
                    self.output = None;
                }
            });
            ui.separator();

            self.show_inputs(ui);
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_output(ui);
            });
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 520.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "textlab",
        options,
        Box::new(|_| Ok(Box::new(TextLabUI::new()?))),
    )
}
