use crate::schema::*;
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug)]
#[diesel(table_name = bank_account)]
#[diesel(check_for_backend(Pg))]
pub struct BankAccount {
	pub bank_account_id: i32,
	pub account_name: String,
	pub balance: BigDecimal,
	pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Insertable, Serialize, Deserialize)]
#[diesel(table_name = bank_account)]
pub struct NewBankAccount<'a> {
	pub account_name: &'a str,
	pub balance: BigDecimal,
	pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug)]
#[diesel(table_name = category)]
#[diesel(check_for_backend(Pg))]
pub struct Category {
	pub category_id: i32,
	pub category_name: String,
	pub associated_with: String,
}

#[derive(Insertable, Serialize, Deserialize)]
#[diesel(table_name = category)]
pub struct NewCategory<'a> {
	pub category_name: &'a str,
	pub associated_with: &'a str,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug)]
#[diesel(table_name = major_category)]
#[diesel(check_for_backend(Pg))]
pub struct MajorCategory {
	pub major_category_id: i32,
	pub major_category_name: String,
}

#[derive(Queryable, Insertable, Selectable, Serialize, Deserialize, Debug)]
#[diesel(table_name = mc_c_mapping)]
#[diesel(check_for_backend(Pg))]
pub struct McCMapping {
	pub major_category_id: i32,
	pub category_id: i32,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug)]
#[diesel(table_name = payment_method)]
#[diesel(check_for_backend(Pg))]
pub struct PaymentMethod {
	pub payment_method_id: i32,
	pub payment_method_name: String,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug)]
#[diesel(table_name = budget)]
#[diesel(check_for_backend(Pg))]
pub struct Budget {
	pub budget_id: i32,
	pub category_id: i32,
	pub allocated_amount: BigDecimal,
	pub start_date: NaiveDate,
	pub end_date: NaiveDate,
	pub description: Option<String>,
	pub recurring: bool,
	pub expense_id: Option<i32>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = budget)]
#[diesel(treat_none_as_null = true)]
pub struct BudgetChanges<'a> {
	pub category_id: i32,
	pub allocated_amount: BigDecimal,
	pub start_date: NaiveDate,
	pub end_date: NaiveDate,
	pub description: Option<&'a str>,
	pub recurring: bool,
	pub expense_id: Option<i32>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug)]
#[diesel(table_name = income)]
#[diesel(check_for_backend(Pg))]
pub struct Income {
	pub income_id: i32,
	pub amount: BigDecimal,
	pub date: NaiveDate,
	pub category_id: i32,
	pub payment_method_id: i32,
	pub description: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = income)]
#[diesel(treat_none_as_null = true)]
pub struct IncomeChanges<'a> {
	pub amount: BigDecimal,
	pub date: NaiveDate,
	pub category_id: i32,
	pub payment_method_id: i32,
	pub description: Option<&'a str>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug)]
#[diesel(table_name = expense)]
#[diesel(check_for_backend(Pg))]
pub struct Expense {
	pub expense_id: i32,
	pub amount: BigDecimal,
	pub date: NaiveDate,
	pub category_id: i32,
	pub payment_method_id: i32,
	pub description: Option<String>,
	pub recurring: bool,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = expense)]
#[diesel(treat_none_as_null = true)]
pub struct ExpenseChanges<'a> {
	pub amount: BigDecimal,
	pub date: NaiveDate,
	pub category_id: i32,
	pub payment_method_id: i32,
	pub description: Option<&'a str>,
	pub recurring: bool,
}

// Request payloads. Required fields are Option so that absence maps onto the
// "Missing required fields" response instead of a deserialization failure.

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BankAccountPayload {
	#[validate(length(min = 1, max = 255))]
	pub account_name: Option<String>,
	pub balance: Option<BigDecimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryPayload {
	#[validate(length(min = 1, max = 255))]
	pub category_name: Option<String>,
	pub associated_with: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MajorCategoryPayload {
	#[validate(length(min = 1, max = 255))]
	pub major_category_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingPayload {
	pub major_category_id: Option<i32>,
	pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaymentMethodPayload {
	#[validate(length(min = 1, max = 255))]
	pub payment_method_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BudgetPayload {
	pub category_id: Option<i32>,
	pub allocated_amount: Option<BigDecimal>,
	pub start_date: Option<NaiveDate>,
	pub end_date: Option<NaiveDate>,
	#[validate(length(max = 255))]
	pub description: Option<String>,
	pub recurring: Option<bool>,
	pub expense_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IncomePayload {
	pub amount: Option<BigDecimal>,
	pub date: Option<NaiveDate>,
	pub category_id: Option<i32>,
	pub payment_method_id: Option<i32>,
	#[validate(length(max = 255))]
	pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExpensePayload {
	pub amount: Option<BigDecimal>,
	pub date: Option<NaiveDate>,
	pub category_id: Option<i32>,
	pub payment_method_id: Option<i32>,
	#[validate(length(max = 255))]
	pub description: Option<String>,
	pub recurring: Option<bool>,
}

// Optional equality/range filters for the list endpoints.

#[derive(Debug, Deserialize)]
pub struct CategoryFilter {
	pub associated_with: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MappingFilter {
	pub major_category_id: Option<i32>,
	pub category_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct BudgetFilter {
	pub category_id: Option<i32>,
	pub start_date: Option<NaiveDate>,
	pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct IncomeFilter {
	pub category_id: Option<i32>,
	pub payment_method_id: Option<i32>,
	pub date: Option<NaiveDate>,
	pub month: Option<i32>,
	pub year: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ExpenseFilter {
	pub category_id: Option<i32>,
	pub payment_method_id: Option<i32>,
	pub date: Option<NaiveDate>,
	pub month: Option<i32>,
	pub year: Option<i32>,
	pub recurring: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
	pub error: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BulkFailure<T> {
	pub item: T,
	pub error: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BulkInsertResult<R, T> {
	pub successful_inserts: Vec<R>,
	pub failed_inserts: Vec<BulkFailure<T>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociatedWith {
	Income,
	Expense,
}

impl AssociatedWith {
	pub fn as_str(&self) -> &str {
		match self {
			AssociatedWith::Income => "income",
			AssociatedWith::Expense => "expense",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"income" => Some(AssociatedWith::Income),
			"expense" => Some(AssociatedWith::Expense),
			_ => None,
		}
	}
}
