pub mod employee;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

// Malformed bodies get the same 400 shape as failed field rules.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation { details: vec![err.to_string()] }.into()
}

/// Mounts the employee endpoints under `/v1/employees`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/v1/employees")
                .service(
                    web::resource("")
                        .route(web::get().to(employee::get_all_employees))
                        .route(web::post().to(employee::create_employee)),
                )
                .service(
                    web::resource("/search/{search}")
                        .route(web::get().to(employee::search_employees_by_name)),
                )
                .service(
                    web::resource("/highestSalary")
                        .route(web::get().to(employee::get_highest_salary)),
                )
                .service(
                    web::resource("/topTenHighestEarningEmployeeNames")
                        .route(web::get().to(employee::get_top_ten_highest_earning_names)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(employee::get_employee_by_id))
                        .route(web::delete().to(employee::delete_employee)),
                ),
        );
}
