use actix_web::HttpResponse;
use anyhow::{anyhow, Context};
use diesel::{
	prelude::*,
	r2d2::{self, ConnectionManager},
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use dotenv::dotenv;
use std::env;

use crate::models::ErrorResponse;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type DbConn = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub fn get_db_pool() -> DbPool {
	dotenv().ok();
	let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
	let manager = ConnectionManager::<PgConnection>::new(database_url);
	r2d2::Pool::builder().build(manager).expect("Failed to create pool.")
}

pub fn init(pool: &DbPool) -> anyhow::Result<()> {
	let mut conn = pool.get().context("can not get a connection from the pool")?;
	conn.run_pending_migrations(MIGRATIONS)
		.map_err(|e| anyhow!("failed to run pending migrations: {e}"))?;
	Ok(())
}

// Every handler starts the same way; a pool failure is always the same 500.
pub fn get_conn(pool: &DbPool) -> Result<DbConn, HttpResponse> {
	pool.get().map_err(|e| {
		log::error!("DB connection error: {:?}", e);
		HttpResponse::InternalServerError()
			.json(ErrorResponse { error: "Database error".to_string() })
	})
}
