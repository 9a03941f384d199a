use crate::api::employee::CreateEmployeeRequest;
use crate::error::ErrorResponse;
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee API",
        version = "1.0.0",
        description = r#"
## Employee Records

Small HTTP/JSON façade used by the SaaS integration to read and register employees.

### Endpoints
- **List** every employee
- **Fetch** one employee by UUID
- **Create** an employee; the server assigns the UUID, the hire date and the full name

### Errors
Every failure answers with `{"message": "..."}`:
- `400` validation failure, malformed JSON body, or a path segment that is not a UUID
- `404` no employee with that UUID
- `429` rate limit exhausted

Records are held in memory and reseeded with sample data on every start.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,

        crate::api::health::health
    ),
    components(
        schemas(
            Employee,
            CreateEmployeeRequest,
            ErrorResponse
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Health", description = "Liveness probe"),
    )
)]
pub struct ApiDoc;
