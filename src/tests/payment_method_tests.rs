use actix_web::{http::StatusCode, test, web, App};
use serde_json::json;

use crate::{
	handlers::payment_method::PaymentMethodHandler,
	models::{ErrorResponse, PaymentMethod},
	tests::test_utils::{migrated_test_pool, test_pool},
};

#[actix_web::test]
async fn create_payment_method_with_missing_fields_is_rejected() {
	let app = test::init_service(
		App::new().app_data(web::Data::new(test_pool())).service(
			web::resource("/payment_method").route(web::post().to(PaymentMethodHandler::create)),
		),
	)
	.await;

	let resp = test::TestRequest::post()
		.uri("/payment_method")
		.set_json(json!({}))
		.send_request(&app)
		.await;

	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: ErrorResponse = test::read_body_json(resp).await;
	assert_eq!(body.error, "Missing required fields");
}

#[actix_web::test]
async fn fetching_with_a_non_numeric_id_is_a_client_error() {
	let app = test::init_service(
		App::new().app_data(web::Data::new(test_pool())).service(
			web::resource("/payment_method/{id}").route(web::get().to(PaymentMethodHandler::get)),
		),
	)
	.await;

	let resp = test::TestRequest::get().uri("/payment_method/abc").send_request(&app).await;
	assert!(resp.status().is_client_error());
}

#[actix_web::test]
#[ignore = "needs a running Postgres pointed at by DATABASE_URL"]
async fn payment_method_crud_cycle() {
	let pool = migrated_test_pool();
	let app = test::init_service(
		App::new().app_data(web::Data::new(pool)).configure(crate::routes::payment_method::init),
	)
	.await;

	let resp = test::TestRequest::post()
		.uri("/payment_method")
		.set_json(json!({ "payment_method_name": "Debit card" }))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::CREATED);
	let created: PaymentMethod = test::read_body_json(resp).await;
	assert_eq!(created.payment_method_name, "Debit card");

	let resp = test::TestRequest::delete()
		.uri(&format!("/payment_method/{}", created.payment_method_id))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::OK);

	let resp = test::TestRequest::get()
		.uri(&format!("/payment_method/{}", created.payment_method_id))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
