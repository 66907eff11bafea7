use actix_web::{web, HttpResponse, Responder};
use diesel::prelude::*;
use serde_json::json;

use crate::{
	db::{self, DbPool},
	handlers::server_error,
};

pub struct HealthHandler {}

impl HealthHandler {
	pub async fn check(pool: web::Data<DbPool>) -> impl Responder {
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::sql_query("SELECT 1").execute(&mut conn) {
			Ok(_) => HttpResponse::Ok().json(json!({ "status": "ok" })),
			Err(e) => {
				log::error!("Health check query failed: {:?}", e);
				server_error("Database error")
			},
		}
	}
}
