use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;

use textlab_core::analysis::{self, ErrorBody, HealthReport, InputLimits};
use textlab_core::morph::MorphCapability;
use textlab_core::text::ngram::NGramOrder;

use crate::error::ApiError;

/// Read-only state shared by every worker.
pub struct AppState {
	pub morph: MorphCapability,
	pub limits: InputLimits,
}

/// Body of `POST /api/analyze`
#[derive(Deserialize)]
struct AnalyzeRequest {
	text: Option<String>,
	#[serde(rename = "type")]
	ngram_type: Option<String>,
}

/// Body of `POST /api/perplexity`
#[derive(Deserialize)]
struct PerplexityRequest {
	training_text: Option<String>,
	test_text: Option<String>,
}

/// Body of `POST /api/edit-distance`
#[derive(Deserialize)]
struct EditDistanceRequest {
	source: Option<String>,
	target: Option<String>,
	with_matrix: Option<bool>,
}

/// Body of `POST /api/tokenize`
#[derive(Deserialize)]
struct TokenizeRequest {
	text: Option<String>,
}

/// Body of `POST /api/morph-analysis`
#[derive(Deserialize)]
struct MorphRequest {
	word: Option<String>,
}

impl AnalyzeRequest {
	/// N-gram order from the `type` tag, unigram when absent.
	fn order(&self) -> Result<NGramOrder, ApiError> {
		match &self.ngram_type {
			None => Ok(NGramOrder::default()),
			Some(tag) => Ok(tag.parse()?),
		}
	}
}

/// HTTP GET endpoint `/`
#[get("/")]
async fn get_health() -> impl Responder {
	HttpResponse::Ok().json(HealthReport::healthy())
}

/// HTTP POST endpoint `/api/analyze`
///
/// Returns the word n-grams of `text` as a JSON array.
#[post("/api/analyze")]
async fn post_analyze(data: web::Data<AppState>, body: web::Json<AnalyzeRequest>) -> Result<HttpResponse, ApiError> {
	let order = body.order()?;
	let text = body.text.as_deref().unwrap_or_default();
	data.limits.check("text", text)?;

	Ok(HttpResponse::Ok().json(analysis::analyze(text, order)))
}

/// HTTP POST endpoint `/api/perplexity`
///
/// Trains a bigram model on `training_text` and scores `test_text`.
#[post("/api/perplexity")]
async fn post_perplexity(data: web::Data<AppState>, body: web::Json<PerplexityRequest>) -> Result<HttpResponse, ApiError> {
	let training_text = body.training_text.as_deref().unwrap_or_default();
	let test_text = body.test_text.as_deref().unwrap_or_default();
	data.limits.check("training_text", training_text)?;
	data.limits.check("test_text", test_text)?;

	let report = analysis::perplexity(training_text, test_text)?;
	Ok(HttpResponse::Ok().json(report))
}

/// HTTP POST endpoint `/api/edit-distance`
#[post("/api/edit-distance")]
async fn post_edit_distance(data: web::Data<AppState>, body: web::Json<EditDistanceRequest>) -> Result<HttpResponse, ApiError> {
	let source = body.source.as_deref().unwrap_or_default();
	let target = body.target.as_deref().unwrap_or_default();
	data.limits.check("source", source)?;
	data.limits.check("target", target)?;

	let report = analysis::edit_distance(source, target, body.with_matrix.unwrap_or(false));
	Ok(HttpResponse::Ok().json(report))
}

/// HTTP POST endpoint `/api/tokenize`
///
/// Returns one JSON string per character of `text`.
#[post("/api/tokenize")]
async fn post_tokenize(data: web::Data<AppState>, body: web::Json<TokenizeRequest>) -> Result<HttpResponse, ApiError> {
	let text = body.text.as_deref().unwrap_or_default();
	data.limits.check("text", text)?;

	Ok(HttpResponse::Ok().json(analysis::tokenize(text)))
}

/// HTTP POST endpoint `/api/morph-analysis`
#[post("/api/morph-analysis")]
async fn post_morph_analysis(data: web::Data<AppState>, body: web::Json<MorphRequest>) -> Result<HttpResponse, ApiError> {
	let word = body.word.as_deref().unwrap_or_default();
	data.limits.check("word", word)?;

	let result = analysis::morph_analysis(&data.morph, word)?;
	Ok(HttpResponse::Ok().json(result))
}

/// JSON extractor settings: body size limit and `{ "error" }` bodies
/// for rejected payloads (413 when too large, 400 otherwise).
pub fn json_config(max_body_bytes: usize) -> web::JsonConfig {
	web::JsonConfig::default()
		.limit(max_body_bytes)
		.error_handler(|err, _req| {
			let response = match err {
				JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
					HttpResponse::PayloadTooLarge().json(ErrorBody { error: format!("Request body too large: {err}") })
				}
				_ => HttpResponse::BadRequest().json(ErrorBody { error: format!("Invalid JSON body: {err}") }),
			};
			InternalError::from_response(err, response).into()
		})
}

/// Registers every endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_health)
		.service(post_analyze)
		.service(post_perplexity)
		.service(post_edit_distance)
		.service(post_tokenize)
		.service(post_morph_analysis);
}
