mod db;
mod handlers;
mod models;
mod routes;
mod schema;
mod tests;

use actix_cors::Cors;
use actix_web::{
	error::InternalError,
	web::{self},
	App, HttpResponse, HttpServer,
};

use dotenv::dotenv;
use env_logger::Env;
use std::env;

use crate::models::ErrorResponse;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	dotenv().ok();
	env_logger::init_from_env(Env::default().default_filter_or("info"));
	let pool = db::get_db_pool();
	let sock_url = env::var("SOCKET_URL").expect("SOCKET_URL can not be found in .env file");
	if let Err(e) = db::init(&pool) {
		panic!("Unable to initialize the db. Err: {:?}", e);
	}
	println!("Listening on: {}..", sock_url);

	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(pool.clone()))
			.app_data(web::JsonConfig::default().error_handler(|err, _req| {
				log::error!("JSON payload error: {:?}", err);
				InternalError::from_response(
					err,
					HttpResponse::InternalServerError()
						.json(ErrorResponse { error: "Invalid JSON format".to_string() }),
				)
				.into()
			}))
			.wrap(
				Cors::default()
					.allow_any_origin()
					.allow_any_method()
					.allow_any_header()
					.max_age(3600),
			)
			.wrap(actix_web::middleware::Logger::default())
			.service(
				web::scope("/api")
					.configure(routes::bank_account::init)
					.configure(routes::category::init)
					.configure(routes::major_category::init)
					.configure(routes::mapping::init)
					.configure(routes::budget::init)
					.configure(routes::income::init)
					.configure(routes::expense::init)
					.configure(routes::payment_method::init)
					.configure(routes::health::init),
			)
	})
	.bind(&sock_url)?
	.run()
	.await
}
