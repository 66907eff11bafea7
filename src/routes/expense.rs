use crate::handlers::expense::ExpenseHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg
		// expense routes; /expense/bulk must be registered ahead of /expense/{id}
		.route("/expense", web::get().to(ExpenseHandler::list))
		.route("/expense", web::post().to(ExpenseHandler::create))
		.route("/expense/bulk", web::post().to(ExpenseHandler::bulk_create))
		.route("/expense/{id}", web::get().to(ExpenseHandler::get))
		.route("/expense/{id}", web::put().to(ExpenseHandler::update))
		.route("/expense/{id}", web::delete().to(ExpenseHandler::delete));
}
