use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use diesel::prelude::*;
use validator::Validate;

use crate::{
	db::{self, DbPool},
	handlers::{
		bad_request, bulk_error_message, date_part, not_found, server_error, write_error,
	},
	models::{BulkFailure, BulkInsertResult, Income, IncomeChanges, IncomeFilter, IncomePayload},
	schema::income,
};

pub struct IncomeHandler {}

impl IncomeHandler {
	pub async fn list(pool: web::Data<DbPool>, query: web::Query<IncomeFilter>) -> impl Responder {
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		let mut q = income::table.select(Income::as_select()).into_boxed();
		if let Some(year) = query.year {
			q = q.filter(date_part("year", income::date).eq(f64::from(year)));
		}
		if let Some(month) = query.month {
			q = q.filter(date_part("month", income::date).eq(f64::from(month)));
		}
		if let Some(date) = query.date {
			q = q.filter(income::date.eq(date));
		}
		if let Some(payment_method_id) = query.payment_method_id {
			q = q.filter(income::payment_method_id.eq(payment_method_id));
		}
		if let Some(category_id) = query.category_id {
			q = q.filter(income::category_id.eq(category_id));
		}

		match q.order(income::date.desc()).load::<Income>(&mut conn) {
			Ok(rows) => HttpResponse::Ok().json(rows),
			Err(e) => {
				log::error!("Failed to list incomes: {:?}", e);
				server_error("Failed to fetch incomes")
			},
		}
	}

	pub async fn create(pool: web::Data<DbPool>, req: web::Json<IncomePayload>) -> impl Responder {
		let payload = req.into_inner();
		let changes = match Self::validated_changes(&payload) {
			Ok(changes) => changes,
			Err(message) => return bad_request(&message),
		};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::insert_into(income::table).values(changes).get_result::<Income>(&mut conn) {
			Ok(row) => {
				log::info!("Created income {} for category {}", row.income_id, row.category_id);
				HttpResponse::Created().json(row)
			},
			Err(e) => {
				log::error!("Income creation error: {:?}", e);
				write_error(&e, "Income not found", "Failed to add income")
			},
		}
	}

	pub async fn bulk_create(
		pool: web::Data<DbPool>,
		req: web::Json<Vec<IncomePayload>>,
	) -> impl Responder {
		let items = req.into_inner();
		if items.is_empty() {
			return bad_request("No incomes provided");
		}

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		let mut successful_inserts = Vec::new();
		let mut failed_inserts = Vec::new();
		for item in items {
			let changes = match Self::validated_changes(&item) {
				Ok(changes) => changes,
				Err(message) => {
					failed_inserts.push(BulkFailure { item, error: message });
					continue;
				},
			};
			let inserted =
				diesel::insert_into(income::table).values(changes).get_result::<Income>(&mut conn);
			match inserted {
				Ok(row) => successful_inserts.push(row),
				Err(e) => {
					log::error!("Failed to insert income {:?}: {:?}", item, e);
					failed_inserts.push(BulkFailure { item, error: bulk_error_message(&e) });
				},
			}
		}

		log::info!(
			"Bulk income insert: {} succeeded, {} failed",
			successful_inserts.len(),
			failed_inserts.len()
		);
		HttpResponse::build(StatusCode::MULTI_STATUS)
			.json(BulkInsertResult { successful_inserts, failed_inserts })
	}

	pub async fn get(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
		let id = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match income::table.find(id).select(Income::as_select()).first::<Income>(&mut conn) {
			Ok(row) => HttpResponse::Ok().json(row),
			Err(diesel::result::Error::NotFound) => not_found("Income not found"),
			Err(e) => {
				log::error!("Failed to fetch income {}: {:?}", id, e);
				server_error("Failed to fetch income")
			},
		}
	}

	pub async fn update(
		pool: web::Data<DbPool>,
		path: web::Path<i32>,
		req: web::Json<IncomePayload>,
	) -> impl Responder {
		let id = path.into_inner();
		let payload = req.into_inner();
		let changes = match Self::validated_changes(&payload) {
			Ok(changes) => changes,
			Err(message) => return bad_request(&message),
		};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::update(income::table.find(id)).set(changes).get_result::<Income>(&mut conn) {
			Ok(row) => HttpResponse::Ok().json(row),
			Err(e) => {
				log::error!("Income update error: {:?}", e);
				write_error(&e, "Income not found", "Failed to update income")
			},
		}
	}

	pub async fn delete(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
		let id = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::delete(income::table.find(id)).get_result::<Income>(&mut conn) {
			Ok(row) => {
				log::info!("Deleted income {}", id);
				HttpResponse::Ok().json(row)
			},
			Err(diesel::result::Error::NotFound) => not_found("Income not found"),
			Err(e) => {
				log::error!("Failed to delete income {}: {:?}", id, e);
				server_error("Failed to delete income")
			},
		}
	}

	fn validated_changes(payload: &IncomePayload) -> Result<IncomeChanges<'_>, String> {
		if let Err(e) = payload.validate() {
			log::error!("Validation error: {:?}", e);
			return Err(e.to_string());
		}
		match (
			payload.amount.clone(),
			payload.date,
			payload.category_id,
			payload.payment_method_id,
		) {
			(Some(amount), Some(date), Some(category_id), Some(payment_method_id)) => {
				Ok(IncomeChanges {
					amount,
					date,
					category_id,
					payment_method_id,
					description: payload.description.as_deref(),
				})
			},
			_ => Err("Missing required fields".to_string()),
		}
	}
}
