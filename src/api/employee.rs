use crate::{
    error::{AppError, AppResult},
    model::employee::NewEmployee,
    service::EmployeeService,
};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[schema(example = "Ada", value_type = String)]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace", value_type = String)]
    pub last_name: Option<String>,
    #[schema(example = 100000, value_type = i32)]
    pub salary: Option<i32>,
    #[schema(example = 36, value_type = i32)]
    pub age: Option<i32>,
    #[schema(example = "Engineer", nullable = true)]
    pub job_title: Option<String>,
    #[schema(example = "ada@x.com", format = "email", value_type = String)]
    pub email: Option<String>,
}

/// Length of the hyphenated 8-4-4-4-12 form.
const CANONICAL_UUID_LEN: usize = 36;

// uuid, full name and hire date are never taken from the client
impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        NewEmployee {
            first_name: req.first_name,
            last_name: req.last_name,
            salary: req.salary,
            age: req.age,
            job_title: req.job_title,
            email: req.email,
            ..NewEmployee::default()
        }
    }
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/v1/employee",
    responses(
        (status = 200, description = "All employees", body = [crate::model::employee::Employee])
    ),
    tag = "Employee"
)]
#[instrument(name = "list_employees", skip(service))]
pub async fn list_employees(service: web::Data<EmployeeService>) -> HttpResponse {
    HttpResponse::Ok().json(service.get_all_employees())
}

/// Get Employee by UUID
#[utoipa::path(
    get,
    path = "/api/v1/employee/{uuid}",
    params(
        ("uuid", Path, description = "Employee UUID")
    ),
    responses(
        (status = 200, description = "Employee found", body = crate::model::employee::Employee),
        (status = 400, description = "Path segment is not a UUID", body = crate::error::ErrorResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse, example = json!({
            "message": "Employee not found with UUID: 00000000-0000-0000-0000-000000000000"
        }))
    ),
    tag = "Employee"
)]
#[instrument(name = "get_employee", skip(service, path), fields(uuid = %path))]
pub async fn get_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let uuid = parse_canonical_uuid(&path)?;

    service
        .get_employee_by_uuid(&uuid)
        .map(|employee| HttpResponse::Ok().json(employee))
        .ok_or_else(|| AppError::NotFound(format!("Employee not found with UUID: {uuid}")))
}

/// Only the hyphenated form is accepted; simple, braced and urn forms are rejected.
fn parse_canonical_uuid(raw: &str) -> AppResult<Uuid> {
    if raw.len() != CANONICAL_UUID_LEN {
        return Err(AppError::malformed(format!("Invalid UUID: {raw}")));
    }
    Uuid::try_parse(raw).map_err(|e| AppError::malformed(format!("Invalid UUID: {raw} ({e})")))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/v1/employee",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = crate::model::employee::Employee),
        (status = 400, description = "Validation failed or malformed body", body = crate::error::ErrorResponse, example = json!({
            "message": "Valid age is required (18-120)"
        }))
    ),
    tag = "Employee"
)]
#[instrument(name = "create_employee", skip(service, payload))]
pub async fn create_employee(
    service: web::Data<EmployeeService>,
    payload: web::Json<CreateEmployeeRequest>,
) -> AppResult<HttpResponse> {
    let employee = service.create_employee(payload.into_inner().into())?;
    Ok(HttpResponse::Created().json(employee))
}
