use actix_web::{http::StatusCode, test, web, App};
use serde_json::json;

use crate::{
	handlers::income::IncomeHandler,
	models::{BulkInsertResult, ErrorResponse, Income, IncomePayload},
	tests::{fixtures::TestFixtures, test_utils::{migrated_test_pool, test_pool}},
};

#[actix_web::test]
async fn create_income_with_missing_fields_is_rejected() {
	let app = test::init_service(
		App::new()
			.app_data(web::Data::new(test_pool()))
			.service(web::resource("/income").route(web::post().to(IncomeHandler::create))),
	)
	.await;

	let resp = test::TestRequest::post()
		.uri("/income")
		.set_json(json!({ "amount": 1000, "date": "2023-10-01" }))
		.send_request(&app)
		.await;

	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: ErrorResponse = test::read_body_json(resp).await;
	assert_eq!(body.error, "Missing required fields");
}

#[actix_web::test]
async fn bulk_create_with_an_empty_list_is_rejected() {
	let app = test::init_service(
		App::new().app_data(web::Data::new(test_pool())).service(
			web::resource("/income/bulk").route(web::post().to(IncomeHandler::bulk_create)),
		),
	)
	.await;

	let resp = test::TestRequest::post()
		.uri("/income/bulk")
		.set_json(json!([]))
		.send_request(&app)
		.await;

	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: ErrorResponse = test::read_body_json(resp).await;
	assert_eq!(body.error, "No incomes provided");
}

#[actix_web::test]
#[ignore = "needs a running Postgres pointed at by DATABASE_URL"]
async fn create_income_with_unknown_category_is_rejected() {
	let pool = migrated_test_pool();
	let app = test::init_service(
		App::new().app_data(web::Data::new(pool)).configure(crate::routes::income::init),
	)
	.await;

	let resp = test::TestRequest::post()
		.uri("/income")
		.set_json(&TestFixtures::income(99999, 99999))
		.send_request(&app)
		.await;

	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: ErrorResponse = test::read_body_json(resp).await;
	assert!(body.error.starts_with("Invalid "));
}

#[actix_web::test]
#[ignore = "needs a running Postgres pointed at by DATABASE_URL"]
async fn bulk_create_reports_mixed_results() {
	let pool = migrated_test_pool();
	let app = test::init_service(
		App::new()
			.app_data(web::Data::new(pool))
			.configure(crate::routes::category::init)
			.configure(crate::routes::payment_method::init)
			.configure(crate::routes::income::init),
	)
	.await;

	let resp = test::TestRequest::post()
		.uri("/category")
		.set_json(&TestFixtures::income_category())
		.send_request(&app)
		.await;
	let category: crate::models::Category = test::read_body_json(resp).await;

	let resp = test::TestRequest::post()
		.uri("/payment_method")
		.set_json(json!({ "payment_method_name": "Bank transfer" }))
		.send_request(&app)
		.await;
	let method: crate::models::PaymentMethod = test::read_body_json(resp).await;

	let valid = TestFixtures::income(category.category_id, method.payment_method_id);
	let missing_fields = IncomePayload {
		amount: None,
		date: Some(TestFixtures::date(2023, 10, 3)),
		category_id: Some(category.category_id),
		payment_method_id: Some(method.payment_method_id),
		description: None,
	};
	let bad_reference = TestFixtures::income(99999, method.payment_method_id);

	let resp = test::TestRequest::post()
		.uri("/income/bulk")
		.set_json(json!([valid.clone(), valid, missing_fields, bad_reference]))
		.send_request(&app)
		.await;

	assert_eq!(resp.status().as_u16(), 207);
	let body: BulkInsertResult<Income, IncomePayload> = test::read_body_json(resp).await;
	assert_eq!(body.successful_inserts.len(), 2);
	assert_eq!(body.failed_inserts.len(), 2);
	assert_eq!(body.failed_inserts[0].error, "Missing required fields");
	assert_eq!(body.failed_inserts[1].error, "Invalid category_id");
}

#[actix_web::test]
#[ignore = "needs a running Postgres pointed at by DATABASE_URL"]
async fn income_list_honors_month_and_year_filters() {
	let pool = migrated_test_pool();
	let app = test::init_service(
		App::new()
			.app_data(web::Data::new(pool))
			.configure(crate::routes::category::init)
			.configure(crate::routes::payment_method::init)
			.configure(crate::routes::income::init),
	)
	.await;

	let resp = test::TestRequest::post()
		.uri("/category")
		.set_json(&TestFixtures::income_category())
		.send_request(&app)
		.await;
	let category: crate::models::Category = test::read_body_json(resp).await;

	let resp = test::TestRequest::post()
		.uri("/payment_method")
		.set_json(json!({ "payment_method_name": "Cash" }))
		.send_request(&app)
		.await;
	let method: crate::models::PaymentMethod = test::read_body_json(resp).await;

	let mut march = TestFixtures::income(category.category_id, method.payment_method_id);
	march.date = Some(TestFixtures::date(2021, 3, 15));
	let resp =
		test::TestRequest::post().uri("/income").set_json(&march).send_request(&app).await;
	assert_eq!(resp.status(), StatusCode::CREATED);
	let created: Income = test::read_body_json(resp).await;

	let resp = test::TestRequest::get()
		.uri(&format!("/income?year=2021&month=3&category_id={}", category.category_id))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::OK);
	let rows: Vec<Income> = test::read_body_json(resp).await;
	assert!(rows.iter().any(|r| r.income_id == created.income_id));

	let resp = test::TestRequest::get()
		.uri(&format!("/income?year=2022&category_id={}", category.category_id))
		.send_request(&app)
		.await;
	let rows: Vec<Income> = test::read_body_json(resp).await;
	assert!(rows.iter().all(|r| r.income_id != created.income_id));
}
