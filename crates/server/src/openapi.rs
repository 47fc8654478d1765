use utoipa::OpenApi;

use crate::errors::ErrorBody;
use crate::mapper::{CompanyRequest, CompanyResponse, EmployeeRequest, EmployeeResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::get,
        crate::routes::companies::employees,
        crate::routes::companies::create,
        crate::routes::companies::replace,
        crate::routes::companies::delete,
        crate::routes::employees::list,
        crate::routes::employees::get,
        crate::routes::employees::create,
        crate::routes::employees::replace,
        crate::routes::employees::delete,
    ),
    components(
        schemas(
            CompanyRequest,
            CompanyResponse,
            EmployeeRequest,
            EmployeeResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
        (name = "employees")
    )
)]
pub struct ApiDoc;
