use actix_web::{web, HttpResponse, Responder};
use diesel::prelude::*;
use validator::Validate;

use crate::{
	db::{self, DbPool},
	handlers::{bad_request, not_found, server_error, write_error},
	models::{MajorCategory, MajorCategoryPayload},
	schema::major_category,
};

pub struct MajorCategoryHandler {}

impl MajorCategoryHandler {
	pub async fn list(pool: web::Data<DbPool>) -> impl Responder {
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match major_category::table
			.select(MajorCategory::as_select())
			.order(major_category::major_category_id.asc())
			.load::<MajorCategory>(&mut conn)
		{
			Ok(rows) => HttpResponse::Ok().json(rows),
			Err(e) => {
				log::error!("Failed to list major categories: {:?}", e);
				server_error("Failed to fetch major categories")
			},
		}
	}

	pub async fn create(
		pool: web::Data<DbPool>,
		req: web::Json<MajorCategoryPayload>,
	) -> impl Responder {
		let payload = req.into_inner();
		if let Err(e) = payload.validate() {
			log::error!("Validation error: {:?}", e);
			return bad_request(&e.to_string());
		}
		let name = match &payload.major_category_name {
			Some(name) => name.as_str(),
			None => return bad_request("Missing required fields"),
		};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::insert_into(major_category::table)
			.values(major_category::major_category_name.eq(name))
			.get_result::<MajorCategory>(&mut conn)
		{
			Ok(row) => {
				log::info!("Created major category {}", row.major_category_id);
				HttpResponse::Created().json(row)
			},
			Err(e) => {
				log::error!("Major category creation error: {:?}", e);
				write_error(&e, "Major category not found", "Failed to add major category")
			},
		}
	}

	pub async fn get(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
		let id = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match major_category::table
			.find(id)
			.select(MajorCategory::as_select())
			.first::<MajorCategory>(&mut conn)
		{
			Ok(row) => HttpResponse::Ok().json(row),
			Err(diesel::result::Error::NotFound) => not_found("Major category not found"),
			Err(e) => {
				log::error!("Failed to fetch major category {}: {:?}", id, e);
				server_error("Failed to fetch major category")
			},
		}
	}

	pub async fn update(
		pool: web::Data<DbPool>,
		path: web::Path<i32>,
		req: web::Json<MajorCategoryPayload>,
	) -> impl Responder {
		let id = path.into_inner();
		let payload = req.into_inner();
		if let Err(e) = payload.validate() {
			log::error!("Validation error: {:?}", e);
			return bad_request(&e.to_string());
		}
		let name = match &payload.major_category_name {
			Some(name) => name.as_str(),
			None => return bad_request("Missing required fields"),
		};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::update(major_category::table.find(id))
			.set(major_category::major_category_name.eq(name))
			.get_result::<MajorCategory>(&mut conn)
		{
			Ok(row) => HttpResponse::Ok().json(row),
			Err(e) => {
				log::error!("Major category update error: {:?}", e);
				write_error(&e, "Major category not found", "Failed to update major category")
			},
		}
	}

	pub async fn delete(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
		let id = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::delete(major_category::table.find(id)).get_result::<MajorCategory>(&mut conn)
		{
			Ok(row) => {
				log::info!("Deleted major category {}", id);
				HttpResponse::Ok().json(row)
			},
			Err(diesel::result::Error::NotFound) => not_found("Major category not found"),
			Err(e) => {
				log::error!("Failed to delete major category {}: {:?}", id, e);
				server_error("Failed to delete major category")
			},
		}
	}
}
