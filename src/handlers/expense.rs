use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use diesel::prelude::*;
use validator::Validate;

use crate::{
	db::{self, DbPool},
	handlers::{
		bad_request, bulk_error_message, date_part, not_found, server_error, write_error,
	},
	models::{
		BulkFailure, BulkInsertResult, Expense, ExpenseChanges, ExpenseFilter, ExpensePayload,
	},
	schema::expense,
};

pub struct ExpenseHandler {}

impl ExpenseHandler {
	pub async fn list(pool: web::Data<DbPool>, query: web::Query<ExpenseFilter>) -> impl Responder {
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		let mut q = expense::table.select(Expense::as_select()).into_boxed();
		if let Some(year) = query.year {
			q = q.filter(date_part("year", expense::date).eq(f64::from(year)));
		}
		if let Some(month) = query.month {
			q = q.filter(date_part("month", expense::date).eq(f64::from(month)));
		}
		if let Some(date) = query.date {
			q = q.filter(expense::date.eq(date));
		}
		if let Some(payment_method_id) = query.payment_method_id {
			q = q.filter(expense::payment_method_id.eq(payment_method_id));
		}
		if let Some(category_id) = query.category_id {
			q = q.filter(expense::category_id.eq(category_id));
		}
		if let Some(recurring) = query.recurring {
			q = q.filter(expense::recurring.eq(recurring));
		}

		match q.order(expense::date.desc()).load::<Expense>(&mut conn) {
			Ok(rows) => HttpResponse::Ok().json(rows),
			Err(e) => {
				log::error!("Failed to list expenses: {:?}", e);
				server_error("Failed to fetch expenses")
			},
		}
	}

	pub async fn create(pool: web::Data<DbPool>, req: web::Json<ExpensePayload>) -> impl Responder {
		let payload = req.into_inner();
		let changes = match Self::validated_changes(&payload) {
			Ok(changes) => changes,
			Err(message) => return bad_request(&message),
		};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::insert_into(expense::table).values(changes).get_result::<Expense>(&mut conn)
		{
			Ok(row) => {
				log::info!("Created expense {} for category {}", row.expense_id, row.category_id);
				HttpResponse::Created().json(row)
			},
			Err(e) => {
				log::error!("Expense creation error: {:?}", e);
				write_error(&e, "Expense not found", "Failed to add expense")
			},
		}
	}

	pub async fn bulk_create(
		pool: web::Data<DbPool>,
		req: web::Json<Vec<ExpensePayload>>,
	) -> impl Responder {
		let items = req.into_inner();
		if items.is_empty() {
			return bad_request("No expenses provided");
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
			let inserted = diesel::insert_into(expense::table)
				.values(changes)
				.get_result::<Expense>(&mut conn);
			match inserted {
				Ok(row) => successful_inserts.push(row),
				Err(e) => {
					log::error!("Failed to insert expense {:?}: {:?}", item, e);
					failed_inserts.push(BulkFailure { item, error: bulk_error_message(&e) });
				},
			}
		}

		log::info!(
			"Bulk expense insert: {} succeeded, {} failed",
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

		match expense::table.find(id).select(Expense::as_select()).first::<Expense>(&mut conn) {
			Ok(row) => HttpResponse::Ok().json(row),
			Err(diesel::result::Error::NotFound) => not_found("Expense not found"),
			Err(e) => {
				log::error!("Failed to fetch expense {}: {:?}", id, e);
				server_error("Failed to fetch expense")
			},
		}
	}

	pub async fn update(
		pool: web::Data<DbPool>,
		path: web::Path<i32>,
		req: web::Json<ExpensePayload>,
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

		match diesel::update(expense::table.find(id)).set(changes).get_result::<Expense>(&mut conn)
		{
			Ok(row) => HttpResponse::Ok().json(row),
			Err(e) => {
				log::error!("Expense update error: {:?}", e);
				write_error(&e, "Expense not found", "Failed to update expense")
			},
		}
	}

	pub async fn delete(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
		let id = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::delete(expense::table.find(id)).get_result::<Expense>(&mut conn) {
			Ok(row) => {
				log::info!("Deleted expense {}", id);
				HttpResponse::Ok().json(row)
			},
			Err(diesel::result::Error::NotFound) => not_found("Expense not found"),
			Err(e) => {
				log::error!("Failed to delete expense {}: {:?}", id, e);
				server_error("Failed to delete expense")
			},
		}
	}

	fn validated_changes(payload: &ExpensePayload) -> Result<ExpenseChanges<'_>, String> {
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
				Ok(ExpenseChanges {
					amount,
					date,
					category_id,
					payment_method_id,
					description: payload.description.as_deref(),
					recurring: payload.recurring.unwrap_or(false),
				})
			},
			_ => Err("Missing required fields".to_string()),
		}
	}
}
