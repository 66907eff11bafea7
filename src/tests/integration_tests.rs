use actix_web::{http::StatusCode, test, web, App};
use serde_json::json;

use crate::{
	models::{Budget, Category, Expense, Income, PaymentMethod},
	tests::{fixtures::TestFixtures, test_utils::migrated_test_pool},
};

// End-to-end pass over the whole route surface, the way a client session
// would drive it: set up the catalog rows, record money movements against
// them, then read everything back.
#[actix_web::test]
#[ignore = "needs a running Postgres pointed at by DATABASE_URL"]
async fn test_complete_tracker_flow() {
	let pool = migrated_test_pool();
	let app = test::init_service(
		App::new().app_data(web::Data::new(pool)).service(
			web::scope("/api")
				.configure(crate::routes::bank_account::init)
				.configure(crate::routes::category::init)
				.configure(crate::routes::major_category::init)
				.configure(crate::routes::mapping::init)
				.configure(crate::routes::budget::init)
				.configure(crate::routes::income::init)
				.configure(crate::routes::expense::init)
				.configure(crate::routes::payment_method::init)
				.configure(crate::routes::health::init),
		),
	)
	.await;

	// Step 0: the database is reachable
	let resp = test::TestRequest::get().uri("/api/health").send_request(&app).await;
	assert_eq!(resp.status(), StatusCode::OK);

	// Step 1: catalog rows
	let resp = test::TestRequest::post()
		.uri("/api/category")
		.set_json(&TestFixtures::income_category())
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::CREATED);
	let income_category: Category = test::read_body_json(resp).await;

	let resp = test::TestRequest::post()
		.uri("/api/category")
		.set_json(&TestFixtures::expense_category())
		.send_request(&app)
		.await;
	let expense_category: Category = test::read_body_json(resp).await;

	let resp = test::TestRequest::post()
		.uri("/api/payment_method")
		.set_json(json!({ "payment_method_name": "Bank transfer" }))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::CREATED);
	let method: PaymentMethod = test::read_body_json(resp).await;

	let resp = test::TestRequest::post()
		.uri("/api/major_category")
		.set_json(json!({ "major_category_name": "Living costs" }))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::CREATED);
	let major: crate::models::MajorCategory = test::read_body_json(resp).await;

	let resp = test::TestRequest::post()
		.uri("/api/mc_c_mapping")
		.set_json(json!({
			"major_category_id": major.major_category_id,
			"category_id": expense_category.category_id
		}))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::CREATED);

	// Step 2: money movements against the catalog
	let resp = test::TestRequest::post()
		.uri("/api/income")
		.set_json(&TestFixtures::income(income_category.category_id, method.payment_method_id))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::CREATED);
	let income: Income = test::read_body_json(resp).await;
	assert!(income.income_id > 0);

	let resp = test::TestRequest::post()
		.uri("/api/expense")
		.set_json(&TestFixtures::expense(expense_category.category_id, method.payment_method_id))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::CREATED);
	let expense: Expense = test::read_body_json(resp).await;

	let mut budget_payload = TestFixtures::budget(expense_category.category_id);
	budget_payload.expense_id = Some(expense.expense_id);
	let resp = test::TestRequest::post()
		.uri("/api/budget")
		.set_json(&budget_payload)
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::CREATED);
	let budget: Budget = test::read_body_json(resp).await;
	assert_eq!(budget.expense_id, Some(expense.expense_id));

	// Step 3: read the movements back through the list filters
	let resp = test::TestRequest::get()
		.uri(&format!("/api/income?category_id={}", income_category.category_id))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::OK);
	let incomes: Vec<Income> = test::read_body_json(resp).await;
	assert!(incomes.iter().any(|r| r.income_id == income.income_id));

	let resp = test::TestRequest::get()
		.uri(&format!("/api/budget?category_id={}", expense_category.category_id))
		.send_request(&app)
		.await;
	let budgets: Vec<Budget> = test::read_body_json(resp).await;
	assert!(budgets.iter().any(|b| b.budget_id == budget.budget_id));
}
