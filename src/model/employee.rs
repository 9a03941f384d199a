use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored employee. Built once by the service with every default applied,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "uuid": "3f1c2a9e-8d4b-4e8a-9c51-0d6f2b7a1e44",
        "firstName": "John",
        "lastName": "Doe",
        "fullName": "John Doe",
        "salary": 75000,
        "age": 30,
        "jobTitle": "Software Engineer",
        "email": "john.doe@company.com",
        "contractHireDate": "2024-01-15T12:34:56Z"
    })
)]
pub struct Employee {
    #[schema(example = "3f1c2a9e-8d4b-4e8a-9c51-0d6f2b7a1e44", format = "uuid", value_type = String)]
    pub uuid: Uuid,

    #[schema(example = "John")]
    pub first_name: String,

    #[schema(example = "Doe")]
    pub last_name: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = 75000)]
    pub salary: i32,

    #[schema(example = 30)]
    pub age: i32,

    #[schema(example = "Software Engineer", nullable = true)]
    pub job_title: Option<String>,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "2024-01-15T12:34:56Z", format = "date-time", value_type = String)]
    pub contract_hire_date: DateTime<Utc>,
}

/// Candidate for creation. Anything left as `None` is either rejected or
/// defaulted when the service turns it into an [`Employee`].
#[derive(Debug, Clone, Default)]
pub struct NewEmployee {
    pub uuid: Option<Uuid>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub salary: Option<i32>,
    pub age: Option<i32>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub contract_hire_date: Option<DateTime<Utc>>,
}
