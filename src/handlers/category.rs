use actix_web::{web, HttpResponse, Responder};
use diesel::prelude::*;
use validator::Validate;

use crate::{
	db::{self, DbPool},
	handlers::{bad_request, not_found, server_error, write_error},
	models::{AssociatedWith, Category, CategoryFilter, CategoryPayload, NewCategory},
	schema::category,
};

pub struct CategoryHandler {}

impl CategoryHandler {
	pub async fn list(pool: web::Data<DbPool>, query: web::Query<CategoryFilter>) -> impl Responder {
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		let mut q = category::table.select(Category::as_select()).into_boxed();
		if let Some(ref associated_with) = query.associated_with {
			q = q.filter(category::associated_with.eq(associated_with.clone()));
		}

		match q.order(category::category_id.asc()).load::<Category>(&mut conn) {
			Ok(rows) => HttpResponse::Ok().json(rows),
			Err(e) => {
				log::error!("Failed to list categories: {:?}", e);
				server_error("Failed to fetch categories")
			},
		}
	}

	pub async fn create(pool: web::Data<DbPool>, req: web::Json<CategoryPayload>) -> impl Responder {
		let payload = req.into_inner();
		let (category_name, associated_with) = match Self::validated_fields(&payload) {
			Ok(fields) => fields,
			Err(resp) => return resp,
		};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		let new_category = NewCategory { category_name, associated_with: associated_with.as_str() };

		match diesel::insert_into(category::table)
			.values(&new_category)
			.get_result::<Category>(&mut conn)
		{
			Ok(row) => {
				log::info!("Created category {} ({})", row.category_id, row.associated_with);
				HttpResponse::Created().json(row)
			},
			Err(e) => {
				log::error!("Category creation error: {:?}", e);
				write_error(&e, "Category not found", "Failed to add category")
			},
		}
	}

	pub async fn get(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
		let id = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match category::table.find(id).select(Category::as_select()).first::<Category>(&mut conn) {
			Ok(row) => HttpResponse::Ok().json(row),
			Err(diesel::result::Error::NotFound) => not_found("Category not found"),
			Err(e) => {
				log::error!("Failed to fetch category {}: {:?}", id, e);
				server_error("Failed to fetch category")
			},
		}
	}

	pub async fn update(
		pool: web::Data<DbPool>,
		path: web::Path<i32>,
		req: web::Json<CategoryPayload>,
	) -> impl Responder {
		let id = path.into_inner();
		let payload = req.into_inner();
		let (category_name, associated_with) = match Self::validated_fields(&payload) {
			Ok(fields) => fields,
			Err(resp) => return resp,
		};

		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::update(category::table.find(id))
			.set((
				category::category_name.eq(category_name),
				category::associated_with.eq(associated_with.as_str()),
			))
			.get_result::<Category>(&mut conn)
		{
			Ok(row) => HttpResponse::Ok().json(row),
			Err(e) => {
				log::error!("Category update error: {:?}", e);
				write_error(&e, "Category not found", "Failed to update category")
			},
		}
	}

	pub async fn delete(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
		let id = path.into_inner();
		let mut conn = match db::get_conn(&pool) {
			Ok(conn) => conn,
			Err(resp) => return resp,
		};

		match diesel::delete(category::table.find(id)).get_result::<Category>(&mut conn) {
			Ok(row) => {
				log::info!("Deleted category {}", id);
				HttpResponse::Ok().json(row)
			},
			Err(diesel::result::Error::NotFound) => not_found("Category not found"),
			Err(e) => {
				// Referenced categories are protected by the FK constraints.
				log::error!("Failed to delete category {}: {:?}", id, e);
				server_error("Failed to delete category")
			},
		}
	}

	fn validated_fields(payload: &CategoryPayload) -> Result<(&str, AssociatedWith), HttpResponse> {
		if let Err(e) = payload.validate() {
			log::error!("Validation error: {:?}", e);
			return Err(bad_request(&e.to_string()));
		}
		let (category_name, associated_with) =
			match (&payload.category_name, &payload.associated_with) {
				(Some(name), Some(associated_with)) => (name.as_str(), associated_with),
				_ => return Err(bad_request("Missing required fields")),
			};
		match AssociatedWith::parse(associated_with) {
			Some(parsed) => Ok((category_name, parsed)),
			None => Err(bad_request("associated_with must be either 'income' or 'expense'")),
		}
	}
}
