use crate::handlers::budget::BudgetHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg
		// budget routes
		.route("/budget", web::get().to(BudgetHandler::list))
		.route("/budget", web::post().to(BudgetHandler::create))
		.route("/budget/{id}", web::get().to(BudgetHandler::get))
		.route("/budget/{id}", web::put().to(BudgetHandler::update))
		.route("/budget/{id}", web::delete().to(BudgetHandler::delete));
}
