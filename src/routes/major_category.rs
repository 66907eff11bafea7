use crate::handlers::major_category::MajorCategoryHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg
		// major category routes
		.route("/major_category", web::get().to(MajorCategoryHandler::list))
		.route("/major_category", web::post().to(MajorCategoryHandler::create))
		.route("/major_category/{id}", web::get().to(MajorCategoryHandler::get))
		.route("/major_category/{id}", web::put().to(MajorCategoryHandler::update))
		.route("/major_category/{id}", web::delete().to(MajorCategoryHandler::delete));
}
