use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::errors::AppError;
use crate::models::CreateEmployeeInput;
use crate::services::{EmployeeService, TOP_EARNERS_COUNT};
use crate::utils::validation::validate_payload;

pub async fn get_all_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    info!("Received request to get all employees");
    let employees = service.find_all().await?;
    debug!("Returning {} employees", employees.len());
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn search_employees_by_name(
    service: web::Data<EmployeeService>,
    search: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let search = search.into_inner();
    info!("Received request to search employees by name: {}", search);
    let employees = service.search_by_name(&search).await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee_by_id(
    service: web::Data<EmployeeService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    info!("Received request to get employee by id: {}", id);
    let employee = service.find_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn get_highest_salary(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    info!("Received request to get highest salary of employees");
    let highest = service.highest_salary().await?;
    Ok(HttpResponse::Ok().json(highest))
}

pub async fn get_top_ten_highest_earning_names(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    info!("Received request to get top {} highest earning employee names", TOP_EARNERS_COUNT);
    let names = service.top_earning_names(TOP_EARNERS_COUNT).await?;
    debug!("Returning {} top earning employee names", names.len());
    Ok(HttpResponse::Ok().json(names))
}

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    new_employee: web::Json<CreateEmployeeInput>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_employee)?;

    info!("Received request to create employee: {}", new_employee.name.as_deref().unwrap_or_default());
    let created = service.create(&new_employee).await?;
    debug!("Employee created: {}", created.id);
    Ok(HttpResponse::Created().json(created))
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    info!("Received request to delete employee by id: {}", id);
    let message = service.delete_by_id(&id).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(message))
}
