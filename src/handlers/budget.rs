use actix_web::{web, HttpResponse, Responder};
use diesel::prelude::*;
use validator::Validate;

use crate::{
	db::{self, DbPool},
	handlers::{bad_request, not_found, server_error, write_error},
	models::{Budget, BudgetChanges, BudgetFilter, BudgetPayload},
	schema::budget,
};

pub struct BudgetHandler {}

impl BudgetHandler {
	pub async fn list(pool: web::Data<DbPool>, query: web::Query<BudgetFilter>) -> impl Responder {
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		let mut q = budget::table.select(Budget::as_select()).into_boxed();
		if let Some(category_id) = query.category_id {
			q = q.filter(budget::category_id.eq(category_id));
		}
		if let Some(start_date) = query.start_date {
			q = q.filter(budget::start_date.eq(start_date));
		}
		if let Some(end_date) = query.end_date {
			q = q.filter(budget::end_date.eq(end_date));
		}

		match q
			.order((budget::category_id.asc(), budget::start_date.asc(), budget::end_date.asc()))
			.load::<Budget>(&mut conn)
		{
			Ok(rows) => HttpResponse::Ok().json(rows),
			Err(e) => {
				log::error!("Failed to list budgets: {:?}", e);
				server_error("Failed to fetch budgets")
			},
		}
	}

	pub async fn create(pool: web::Data<DbPool>, req: web::Json<BudgetPayload>) -> impl Responder {
		let payload = req.into_inner();
		let changes = match Self::validated_changes(&payload) {
			Ok(changes) => changes,
			Err(resp) => return resp,
		};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::insert_into(budget::table).values(changes).get_result::<Budget>(&mut conn)
		{
			Ok(row) => {
				log::info!("Created budget {} for category {}", row.budget_id, row.category_id);
				HttpResponse::Created().json(row)
			},
			Err(e) => {
				log::error!("Budget creation error: {:?}", e);
				write_error(&e, "Budget not found", "Failed to add budget")
			},
		}
	}

	pub async fn get(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
		let id = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match budget::table.find(id).select(Budget::as_select()).first::<Budget>(&mut conn) {
			Ok(row) => HttpResponse::Ok().json(row),
			Err(diesel::result::Error::NotFound) => not_found("Budget not found"),
			Err(e) => {
				log::error!("Failed to fetch budget {}: {:?}", id, e);
				server_error("Failed to fetch budget")
			},
		}
	}

	pub async fn update(
		pool: web::Data<DbPool>,
		path: web::Path<i32>,
		req: web::Json<BudgetPayload>,
	) -> impl Responder {
		let id = path.into_inner();
		let payload = req.into_inner();
		let changes = match Self::validated_changes(&payload) {
			Ok(changes) => changes,
			Err(resp) => return resp,
		};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::update(budget::table.find(id)).set(changes).get_result::<Budget>(&mut conn)
		{
			Ok(row) => HttpResponse::Ok().json(row),
			Err(e) => {
				log::error!("Budget update error: {:?}", e);
				write_error(&e, "Budget not found", "Failed to update budget")
			},
		}
	}

	pub async fn delete(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
		let id = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::delete(budget::table.find(id)).get_result::<Budget>(&mut conn) {
			Ok(row) => {
				log::info!("Deleted budget {}", id);
				HttpResponse::Ok().json(row)
			},
			Err(diesel::result::Error::NotFound) => not_found("Budget not found"),
			Err(e) => {
				log::error!("Failed to delete budget {}: {:?}", id, e);
				server_error("Failed to delete budget")
			},
		}
	}

	fn validated_changes(payload: &BudgetPayload) -> Result<BudgetChanges<'_>, HttpResponse> {
		if let Err(e) = payload.validate() {
			log::error!("Validation error: {:?}", e);
			return Err(bad_request(&e.to_string()));
		}
		let (category_id, allocated_amount, start_date, end_date) = match (
			payload.category_id,
			payload.allocated_amount.clone(),
			payload.start_date,
			payload.end_date,
		) {
			(Some(category_id), Some(allocated_amount), Some(start_date), Some(end_date)) => {
				(category_id, allocated_amount, start_date, end_date)
			},
			_ => return Err(bad_request("Missing required fields")),
		};
		if start_date >= end_date {
			return Err(bad_request("Start date must be before end date"));
		}
		Ok(BudgetChanges {
			category_id,
			allocated_amount,
			start_date,
			end_date,
			description: payload.description.as_deref(),
			recurring: payload.recurring.unwrap_or(false),
			expense_id: payload.expense_id,
		})
	}
}
