use crate::handlers::category::CategoryHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg
		// category routes
		.route("/category", web::get().to(CategoryHandler::list))
		.route("/category", web::post().to(CategoryHandler::create))
		.route("/category/{id}", web::get().to(CategoryHandler::get))
		.route("/category/{id}", web::put().to(CategoryHandler::update))
		.route("/category/{id}", web::delete().to(CategoryHandler::delete));
}
