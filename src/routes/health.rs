use crate::handlers::health::HealthHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg.route("/health", web::get().to(HealthHandler::check));
}
