use crate::handlers::income::IncomeHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg
		// income routes; /income/bulk must be registered ahead of /income/{id}
		.route("/income", web::get().to(IncomeHandler::list))
		.route("/income", web::post().to(IncomeHandler::create))
		.route("/income/bulk", web::post().to(IncomeHandler::bulk_create))
		.route("/income/{id}", web::get().to(IncomeHandler::get))
		.route("/income/{id}", web::put().to(IncomeHandler::update))
		.route("/income/{id}", web::delete().to(IncomeHandler::delete));
}
