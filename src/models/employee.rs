use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// One employee record as served by the upstream API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Employee {
    pub id: String,
    #[serde(rename = "employee_name")]
    pub name: Option<String>,
    #[serde(rename = "employee_salary")]
    pub salary: Option<i32>,
    #[serde(rename = "employee_age")]
    pub age: Option<i32>,
    #[serde(rename = "employee_title")]
    pub title: Option<String>,
    #[serde(rename = "employee_email")]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone, Default)]
pub struct CreateEmployeeInput {
    #[validate(required(message = "must not be blank"), custom = "validate_not_blank")]
    pub name: Option<String>,
    #[validate(
        required(message = "must not be null"),
        range(min = 1, message = "must be greater than 0")
    )]
    pub salary: Option<i32>,
    #[validate(
        required(message = "must not be null"),
        range(min = 16, max = 75, message = "must be between 16 and 75")
    )]
    pub age: Option<i32>,
    #[validate(required(message = "must not be blank"), custom = "validate_not_blank")]
    pub title: Option<String>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::from("must not be blank"));
        return Err(err);
    }
    Ok(())
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeleteEmployeeRequest {
    pub name: String,
}

/// Envelope wrapping every upstream payload.
#[derive(Serialize, Deserialize, Debug)]
pub struct UpstreamResponse<T> {
    pub data: Option<T>,
    pub status: Option<String>,
}
