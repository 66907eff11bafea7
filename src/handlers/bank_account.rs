use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use diesel::prelude::*;
use validator::Validate;

use crate::{
	db::{self, DbPool},
	handlers::{bad_request, not_found, server_error, write_error},
	models::{BankAccount, BankAccountPayload, NewBankAccount},
	schema::bank_account,
};

pub struct BankAccountHandler {}

impl BankAccountHandler {
	pub async fn list(pool: web::Data<DbPool>) -> impl Responder {
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match bank_account::table
			.select(BankAccount::as_select())
			.order(bank_account::bank_account_id.asc())
			.load::<BankAccount>(&mut conn)
		{
			Ok(rows) => HttpResponse::Ok().json(rows),
			Err(e) => {
				log::error!("Failed to list bank accounts: {:?}", e);
				server_error("Failed to fetch bank accounts")
			},
		}
	}

	pub async fn create(
		pool: web::Data<DbPool>,
		req: web::Json<BankAccountPayload>,
	) -> impl Responder {
		let payload = req.into_inner();
		if let Err(e) = payload.validate() {
			log::error!("Validation error: {:?}", e);
			return bad_request(&e.to_string());
		}
		let (account_name, balance) = match (&payload.account_name, payload.balance.clone()) {
			(Some(name), Some(balance)) => (name.as_str(), balance),
			_ => return bad_request("Missing required fields"),
		};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		let new_account = NewBankAccount { account_name, balance, updated_at: Some(Utc::now()) };

		match diesel::insert_into(bank_account::table)
			.values(&new_account)
			.get_result::<BankAccount>(&mut conn)
		{
			Ok(row) => {
				log::info!("Created bank account {}", row.bank_account_id);
				HttpResponse::Created().json(row)
			},
			Err(e) => {
				log::error!("Bank account creation error: {:?}", e);
				write_error(&e, "Bank account not found", "Failed to add bank account")
			},
		}
	}

	pub async fn get(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
		let id = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match bank_account::table
			.find(id)
			.select(BankAccount::as_select())
			.first::<BankAccount>(&mut conn)
		{
			Ok(row) => HttpResponse::Ok().json(row),
			Err(diesel::result::Error::NotFound) => not_found("Bank account not found"),
			Err(e) => {
				log::error!("Failed to fetch bank account {}: {:?}", id, e);
				server_error("Failed to fetch bank account")
			},
		}
	}

	pub async fn update(
		pool: web::Data<DbPool>,
		path: web::Path<i32>,
		req: web::Json<BankAccountPayload>,
	) -> impl Responder {
		let id = path.into_inner();
		let payload = req.into_inner();
		if let Err(e) = payload.validate() {
			log::error!("Validation error: {:?}", e);
			return bad_request(&e.to_string());
		}
		let (account_name, balance) = match (&payload.account_name, payload.balance.clone()) {
			(Some(name), Some(balance)) => (name.as_str(), balance),
			_ => return bad_request("Missing required fields"),
		};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::update(bank_account::table.find(id))
			.set((
				bank_account::account_name.eq(account_name),
				bank_account::balance.eq(balance),
				bank_account::updated_at.eq(Utc::now()),
			))
			.get_result::<BankAccount>(&mut conn)
		{
			Ok(row) => HttpResponse::Ok().json(row),
			Err(e) => {
				log::error!("Bank account update error: {:?}", e);
				write_error(&e, "Bank account not found", "Failed to update bank account")
			},
		}
	}

	pub async fn delete(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
		let id = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::delete(bank_account::table.find(id)).get_result::<BankAccount>(&mut conn) {
			Ok(row) => {
				log::info!("Deleted bank account {}", id);
				HttpResponse::Ok().json(row)
			},
			Err(diesel::result::Error::NotFound) => not_found("Bank account not found"),
			Err(e) => {
				log::error!("Failed to delete bank account {}: {:?}", id, e);
				server_error("Failed to delete bank account")
			},
		}
	}
}
