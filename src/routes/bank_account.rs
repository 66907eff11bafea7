use crate::handlers::bank_account::BankAccountHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg
		// bank account routes
		.route("/bank_account", web::get().to(BankAccountHandler::list))
		.route("/bank_account", web::post().to(BankAccountHandler::create))
		.route("/bank_account/{id}", web::get().to(BankAccountHandler::get))
		.route("/bank_account/{id}", web::put().to(BankAccountHandler::update))
		.route("/bank_account/{id}", web::delete().to(BankAccountHandler::delete));
}
