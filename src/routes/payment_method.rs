use crate::handlers::payment_method::PaymentMethodHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg
		// payment method routes
		.route("/payment_method", web::get().to(PaymentMethodHandler::list))
		.route("/payment_method", web::post().to(PaymentMethodHandler::create))
		.route("/payment_method/{id}", web::get().to(PaymentMethodHandler::get))
		.route("/payment_method/{id}", web::put().to(PaymentMethodHandler::update))
		.route("/payment_method/{id}", web::delete().to(PaymentMethodHandler::delete));
}
