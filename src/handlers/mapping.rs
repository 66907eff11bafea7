use actix_web::{web, HttpResponse, Responder};
use diesel::prelude::*;

use crate::{
	db::{self, DbPool},
	handlers::{bad_request, not_found, server_error, write_error},
	models::{MappingFilter, MappingPayload, McCMapping},
	schema::mc_c_mapping,
};

pub struct MappingHandler {}

impl MappingHandler {
	pub async fn list(pool: web::Data<DbPool>, query: web::Query<MappingFilter>) -> impl Responder {
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		let mut q = mc_c_mapping::table.select(McCMapping::as_select()).into_boxed();
		if let Some(major_category_id) = query.major_category_id {
			q = q.filter(mc_c_mapping::major_category_id.eq(major_category_id));
		}
		if let Some(category_id) = query.category_id {
			q = q.filter(mc_c_mapping::category_id.eq(category_id));
		}

		match q
			.order((mc_c_mapping::major_category_id.asc(), mc_c_mapping::category_id.asc()))
			.load::<McCMapping>(&mut conn)
		{
			Ok(rows) => HttpResponse::Ok().json(rows),
			Err(e) => {
				log::error!("Failed to list mappings: {:?}", e);
				server_error("Failed to fetch mappings")
			},
		}
	}

	pub async fn create(pool: web::Data<DbPool>, req: web::Json<MappingPayload>) -> impl Responder {
		let payload = req.into_inner();
		let (major_category_id, category_id) =
			match (payload.major_category_id, payload.category_id) {
				(Some(major_category_id), Some(category_id)) => (major_category_id, category_id),
				_ => return bad_request("Missing required fields"),
			};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		// The composite primary key doubles as the duplicate-pair check.
		let new_mapping = McCMapping { major_category_id, category_id };
		match diesel::insert_into(mc_c_mapping::table)
			.values(&new_mapping)
			.get_result::<McCMapping>(&mut conn)
		{
			Ok(row) => {
				log::info!("Mapped major category {} to category {}", row.major_category_id, row.category_id);
				HttpResponse::Created().json(row)
			},
			Err(e) => {
				log::error!("Mapping creation error: {:?}", e);
				write_error(&e, "Mapping not found", "Failed to add mapping")
			},
		}
	}

	pub async fn get(pool: web::Data<DbPool>, path: web::Path<(i32, i32)>) -> impl Responder {
		let (major_category_id, category_id) = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match mc_c_mapping::table
			.find((major_category_id, category_id))
			.select(McCMapping::as_select())
			.first::<McCMapping>(&mut conn)
		{
			Ok(row) => HttpResponse::Ok().json(row),
			Err(diesel::result::Error::NotFound) => not_found("Mapping not found"),
			Err(e) => {
				log::error!(
					"Failed to fetch mapping ({}, {}): {:?}",
					major_category_id,
					category_id,
					e
				);
				server_error("Failed to fetch mapping")
			},
		}
	}

	pub async fn update(
		pool: web::Data<DbPool>,
		path: web::Path<(i32, i32)>,
		req: web::Json<MappingPayload>,
	) -> impl Responder {
		let (old_major_category_id, old_category_id) = path.into_inner();
		let payload = req.into_inner();
		let (major_category_id, category_id) =
			match (payload.major_category_id, payload.category_id) {
				(Some(major_category_id), Some(category_id)) => (major_category_id, category_id),
				_ => return bad_request("Missing required fields"),
			};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::update(mc_c_mapping::table.find((old_major_category_id, old_category_id)))
			.set((
				mc_c_mapping::major_category_id.eq(major_category_id),
				mc_c_mapping::category_id.eq(category_id),
			))
			.get_result::<McCMapping>(&mut conn)
		{
			Ok(row) => HttpResponse::Ok().json(row),
			Err(e) => {
				log::error!("Mapping update error: {:?}", e);
				write_error(&e, "Mapping not found", "Failed to update mapping")
			},
		}
	}

	pub async fn delete(pool: web::Data<DbPool>, path: web::Path<(i32, i32)>) -> impl Responder {
		let (major_category_id, category_id) = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::delete(mc_c_mapping::table.find((major_category_id, category_id)))
			.get_result::<McCMapping>(&mut conn)
		{
			Ok(row) => {
				log::info!("Deleted mapping ({}, {})", major_category_id, category_id);
				HttpResponse::Ok().json(row)
			},
			Err(diesel::result::Error::NotFound) => not_found("Mapping not found"),
			Err(e) => {
				log::error!(
					"Failed to delete mapping ({}, {}): {:?}",
					major_category_id,
					category_id,
					e
				);
				server_error("Failed to delete mapping")
			},
		}
	}
}
