use actix_web::{http::StatusCode, test, web, App};
use serde_json::json;

use crate::{
	handlers::major_category::MajorCategoryHandler,
	models::{ErrorResponse, MajorCategory},
	tests::test_utils::{migrated_test_pool, test_pool},
};

#[actix_web::test]
async fn create_major_category_with_missing_fields_is_rejected() {
	let app = test::init_service(
		App::new().app_data(web::Data::new(test_pool())).service(
			web::resource("/major_category").route(web::post().to(MajorCategoryHandler::create)),
		),
	)
	.await;

	let resp = test::TestRequest::post()
		.uri("/major_category")
		.set_json(json!({}))
		.send_request(&app)
		.await;

	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: ErrorResponse = test::read_body_json(resp).await;
	assert_eq!(body.error, "Missing required fields");
}

#[actix_web::test]
#[ignore = "needs a running Postgres pointed at by DATABASE_URL"]
async fn major_category_crud_cycle() {
	let pool = migrated_test_pool();
	let app = test::init_service(
		App::new().app_data(web::Data::new(pool)).configure(crate::routes::major_category::init),
	)
	.await;

	let resp = test::TestRequest::post()
		.uri("/major_category")
		.set_json(json!({ "major_category_name": "Household" }))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::CREATED);
	let created: MajorCategory = test::read_body_json(resp).await;

	let resp = test::TestRequest::put()
		.uri(&format!("/major_category/{}", created.major_category_id))
		.set_json(json!({ "major_category_name": "Home" }))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::OK);

	let resp = test::TestRequest::delete()
		.uri(&format!("/major_category/{}", created.major_category_id))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::OK);
	let deleted: MajorCategory = test::read_body_json(resp).await;
	assert_eq!(deleted.major_category_name, "Home");

	let resp = test::TestRequest::get()
		.uri(&format!("/major_category/{}", created.major_category_id))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
