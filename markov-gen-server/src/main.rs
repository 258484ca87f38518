use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use serde::{Deserialize, Serialize};
use markov_gen_core::io::list_files;
use markov_gen_core::model::generator::MarkovGenerator;

/// Struct representing query parameters for the `/v1/text` endpoint
#[derive(Deserialize)]
struct TextParams {
	length: Option<usize>,
}

#[derive(Deserialize)]
struct CorpusQuery {
	name: Option<String>,
}

/// Model statistics returned by `/v1/stats`
#[derive(Serialize)]
struct Stats {
	source: String,
	words: usize,
	keys: usize,
}

struct SharedData {
	generator: MarkovGenerator,
}

/// HTTP GET endpoint `/v1/text`
///
/// Generates a word sequence of the requested length (default 50).
/// Degenerate corpora return a reduced or empty body, never an error.
#[get("/v1/text")]
async fn get_text(data: web::Data<Mutex<SharedData>>, query: web::Query<TextParams>) -> impl Responder {
	let length = query.length.unwrap_or(50);

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	HttpResponse::Ok().body(shared_data.generator.generate_text(length))
}

/// HTTP GET endpoint `/v1/sentence`
///
/// Generates one punctuation-bounded sentence. When the corpus does not
/// allow one, the diagnostic string is returned as a normal 200 body;
/// callers inspect the text rather than the status code.
#[get("/v1/sentence")]
async fn get_sentence(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	HttpResponse::Ok().body(shared_data.generator.generate_sentence())
}

#[get("/v1/stats")]
async fn get_stats(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	let model = shared_data.generator.model();
	HttpResponse::Ok().json(Stats {
		source: shared_data.generator.source().to_owned(),
		words: model.word_count(),
		keys: model.key_count(),
	})
}

#[get("/v1/corpora")]
async fn get_corpora() -> impl Responder {
	match list_files("./data", "txt") {
		Ok(files) => HttpResponse::Ok().body(files.join("\n").replace(".txt", "")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

#[put("/v1/load_corpus")]
async fn put_corpus(data: web::Data<Mutex<SharedData>>, query: web::Query<CorpusQuery>) -> impl Responder {
	let name = match &query.name {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	let corpus_path = format!("./data/{}.txt", name);
	let generator = match MarkovGenerator::new(&corpus_path) {
		Ok(g) => g,
		Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load corpus: {e}")),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	shared_data.generator = generator;

	log::info!("loaded corpus {corpus_path}");
	HttpResponse::Ok().body("Corpus loaded successfully")
}

/// Main entry point for the server.
///
/// Starts with an empty-corpus generator (all generation degenerates to
/// the documented empty/sentinel results) until a corpus is loaded
/// through `PUT /v1/load_corpus`.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Corpora are looked up under `./data` as `.txt` files.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData {
		generator: MarkovGenerator::from_words(Vec::new(), "none"),
	};
	let shared_generator = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_generator.clone())
			.service(get_text)
			.service(get_sentence)
			.service(get_stats)
			.service(get_corpora)
			.service(put_corpus)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
