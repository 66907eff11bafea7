use actix_web::{web, HttpResponse, Responder};
use diesel::prelude::*;
use validator::Validate;

use crate::{
	db::{self, DbPool},
	handlers::{bad_request, not_found, server_error, write_error},
	models::{PaymentMethod, PaymentMethodPayload},
	schema::payment_method,
};

pub struct PaymentMethodHandler {}

impl PaymentMethodHandler {
	pub async fn list(pool: web::Data<DbPool>) -> impl Responder {
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match payment_method::table
			.select(PaymentMethod::as_select())
			.order(payment_method::payment_method_id.asc())
			.load::<PaymentMethod>(&mut conn)
		{
			Ok(rows) => HttpResponse::Ok().json(rows),
			Err(e) => {
				log::error!("Failed to list payment methods: {:?}", e);
				server_error("Failed to fetch payment methods")
			},
		}
	}

	pub async fn create(
		pool: web::Data<DbPool>,
		req: web::Json<PaymentMethodPayload>,
	) -> impl Responder {
		let payload = req.into_inner();
		if let Err(e) = payload.validate() {
			log::error!("Validation error: {:?}", e);
			return bad_request(&e.to_string());
		}
		let name = match &payload.payment_method_name {
			Some(name) => name.as_str(),
			None => return bad_request("Missing required fields"),
		};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::insert_into(payment_method::table)
			.values(payment_method::payment_method_name.eq(name))
			.get_result::<PaymentMethod>(&mut conn)
		{
			Ok(row) => {
				log::info!("Created payment method {}", row.payment_method_id);
				HttpResponse::Created().json(row)
			},
			Err(e) => {
				log::error!("Payment method creation error: {:?}", e);
				write_error(&e, "Payment method not found", "Failed to add payment method")
			},
		}
	}

	pub async fn get(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
		let id = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match payment_method::table
			.find(id)
			.select(PaymentMethod::as_select())
			.first::<PaymentMethod>(&mut conn)
		{
			Ok(row) => HttpResponse::Ok().json(row),
			Err(diesel::result::Error::NotFound) => not_found("Payment method not found"),
			Err(e) => {
				log::error!("Failed to fetch payment method {}: {:?}", id, e);
				server_error("Failed to fetch payment method")
			},
		}
	}

	pub async fn update(
		pool: web::Data<DbPool>,
		path: web::Path<i32>,
		req: web::Json<PaymentMethodPayload>,
	) -> impl Responder {
		let id = path.into_inner();
		let payload = req.into_inner();
		if let Err(e) = payload.validate() {
			log::error!("Validation error: {:?}", e);
			return bad_request(&e.to_string());
		}
		let name = match &payload.payment_method_name {
			Some(name) => name.as_str(),
			None => return bad_request("Missing required fields"),
		};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::update(payment_method::table.find(id))
			.set(payment_method::payment_method_name.eq(name))
			.get_result::<PaymentMethod>(&mut conn)
		{
			Ok(row) => HttpResponse::Ok().json(row),
			Err(e) => {
				log::error!("Payment method update error: {:?}", e);
				write_error(&e, "Payment method not found", "Failed to update payment method")
			},
		}
	}

	pub async fn delete(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
		let id = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::delete(payment_method::table.find(id)).get_result::<PaymentMethod>(&mut conn)
		{
			Ok(row) => {
				log::info!("Deleted payment method {}", id);
				HttpResponse::Ok().json(row)
			},
			Err(diesel::result::Error::NotFound) => not_found("Payment method not found"),
			Err(e) => {
				log::error!("Failed to delete payment method {}: {:?}", id, e);
				server_error("Failed to delete payment method")
			},
		}
	}
}
