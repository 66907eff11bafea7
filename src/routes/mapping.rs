use crate::handlers::mapping::MappingHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg
		// major-category/category mapping routes
		.route("/mc_c_mapping", web::get().to(MappingHandler::list))
		.route("/mc_c_mapping", web::post().to(MappingHandler::create))
		.route(
			"/mc_c_mapping/{major_category_id}/{category_id}",
			web::get().to(MappingHandler::get),
		)
		.route(
			"/mc_c_mapping/{major_category_id}/{category_id}",
			web::put().to(MappingHandler::update),
		)
		.route(
			"/mc_c_mapping/{major_category_id}/{category_id}",
			web::delete().to(MappingHandler::delete),
		);
}
