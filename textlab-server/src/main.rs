mod config;
mod error;
mod routes;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};

use textlab_core::analysis::InputLimits;
use textlab_core::morph::MorphCapability;

use crate::config::ServerConfig;
use crate::routes::AppState;

/// Main entry point for the server.
///
/// Reads the configuration from `TEXTLAB_*` environment variables,
/// loads the morphological analyzer once, and serves the JSON API.
///
/// # Notes
/// - Shared state is read-only, so workers need no lock.
/// - A tokenizer that fails to load only disables `/api/morph-analysis`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

	let config = match ServerConfig::from_env() {
		Ok(c) => c,
		Err(e) => {
			error!("invalid configuration: {e}");
			return Err(std::io::Error::other(e));
		}
	};

	let shared_state = web::Data::new(AppState {
		morph: MorphCapability::new(config.tokenizer_path.clone()),
		limits: InputLimits { max_chars: config.max_input_chars },
	});

	// Load eagerly so the first request does not pay for it
	if let Err(e) = shared_state.morph.get() {
		warn!("morphological analysis unavailable: {e}");
	}

	info!("listening on {}:{} with {} workers", config.host, config.port, config.workers);

	let max_body_bytes = config.max_body_bytes;
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_state.clone())
			.app_data(routes::json_config(max_body_bytes))
			.configure(routes::configure)
	})
		.workers(config.workers)
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
