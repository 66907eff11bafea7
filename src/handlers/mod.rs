pub mod bank_account;
pub mod budget;
pub mod category;
pub mod expense;
pub mod health;
pub mod income;
pub mod major_category;
pub mod mapping;
pub mod payment_method;

use actix_web::HttpResponse;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::{Date, Double, Text};

use crate::models::ErrorResponse;

diesel::define_sql_function! {
	/// Postgres `date_part`, backing the month/year list filters.
	fn date_part(part: Text, d: Date) -> Double;
}

pub fn bad_request(message: &str) -> HttpResponse {
	HttpResponse::BadRequest().json(ErrorResponse { error: message.to_string() })
}

pub fn not_found(message: &str) -> HttpResponse {
	HttpResponse::NotFound().json(ErrorResponse { error: message.to_string() })
}

pub fn server_error(message: &str) -> HttpResponse {
	HttpResponse::InternalServerError().json(ErrorResponse { error: message.to_string() })
}

/// Maps a write-side database error onto the API contract. Referential checks
/// are the foreign-key constraints themselves, so a violation surfaces here
/// instead of from a separate pre-insert lookup.
pub fn write_error(e: &DieselError, missing: &str, fallback: &str) -> HttpResponse {
	match e {
		DieselError::NotFound => not_found(missing),
		DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
			bad_request(&invalid_reference_message(info.constraint_name()))
		},
		DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
			if info.constraint_name() == Some("mc_c_mapping_pkey") {
				bad_request("Mapping already exists")
			} else {
				server_error("Duplicate entry")
			}
		},
		_ => server_error(fallback),
	}
}

/// Per-item error text for the bulk endpoints.
pub fn bulk_error_message(e: &DieselError) -> String {
	match e {
		DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
			invalid_reference_message(info.constraint_name())
		},
		other => other.to_string(),
	}
}

// The default Postgres constraint names embed the referencing column, e.g.
// `income_category_id_fkey`. Longest match first: `major_category_id`
// contains `category_id`.
pub fn invalid_reference_message(constraint: Option<&str>) -> String {
	let column = match constraint {
		Some(name) if name.contains("major_category_id") => "major_category_id",
		Some(name) if name.contains("payment_method_id") => "payment_method_id",
		Some(name) if name.contains("category_id") => "category_id",
		Some(name) if name.contains("expense_id") => "expense_id",
		_ => return "Invalid reference".to_string(),
	};
	format!("Invalid {}", column)
}
