use std::sync::Arc;

use log::{debug, info, warn};

use crate::client::EmployeeSource;
use crate::directory::EmployeeDirectory;
use crate::errors::AppError;
use crate::models::{CreateEmployeeInput, Employee};

pub const TOP_EARNERS_COUNT: usize = 10;

/// Fetches from the source on every call and derives views with [`EmployeeDirectory`].
#[derive(Clone)]
pub struct EmployeeService {
    source: Arc<dyn EmployeeSource>,
}

impl EmployeeService {
    pub fn new(source: Arc<dyn EmployeeSource>) -> Self {
        Self { source }
    }

    pub async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        info!("Fetching all employees");
        let employees = self.source.fetch_all().await?;
        debug!("Found {} employees", employees.len());
        Ok(employees)
    }

    pub async fn search_by_name(&self, needle: &str) -> Result<Vec<Employee>, AppError> {
        info!("Searching employees by name containing '{}'", needle);
        let employees = self.source.fetch_all().await?;
        let matched: Vec<Employee> = EmployeeDirectory::new(&employees)
            .filter_by_name_contains(needle)
            .into_iter()
            .cloned()
            .collect();
        debug!("Filtered list size: {}", matched.len());
        Ok(matched)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Employee, AppError> {
        info!("Looking up employee with id: {}", id);
        match self.source.fetch_by_id(id).await? {
            Some(employee) => Ok(employee),
            None => {
                debug!("Employee with id {} not found", id);
                Err(AppError::EmployeeNotFound(id.to_string()))
            }
        }
    }

    pub async fn highest_salary(&self) -> Result<i32, AppError> {
        info!("Fetching all employees to determine highest salary");
        let employees = self.source.fetch_all().await?;
        let highest = EmployeeDirectory::new(&employees).max_salary();
        debug!("Highest salary determined as: {}", highest);
        Ok(highest)
    }

    pub async fn top_earning_names(&self, count: usize) -> Result<Vec<Option<String>>, AppError> {
        info!("Fetching all employees to determine top {} earners", count);
        let employees = self.source.fetch_all().await?;
        let names = EmployeeDirectory::new(&employees).top_earning_names(count);
        debug!("Top earners found: {:?}", names);
        Ok(names)
    }

    /// Expects input that already passed validation.
    pub async fn create(&self, input: &CreateEmployeeInput) -> Result<Employee, AppError> {
        info!("Creating employee: {}", input.name.as_deref().unwrap_or_default());
        let created = self.source.create(input).await?;
        debug!("Created employee: {:?}", created);
        Ok(created)
    }

    /// The upstream deletes by name, so the record is resolved by id first.
    pub async fn delete_by_id(&self, id: &str) -> Result<String, AppError> {
        let name = match self.source.fetch_by_id(id).await? {
            Some(Employee { name: Some(name), .. }) => name,
            _ => {
                warn!("Employee with id {} not found or has no name to delete by", id);
                return Err(AppError::EmployeeNotFound(id.to_string()));
            }
        };

        self.source.delete_by_name(&name).await?;
        let message = format!("Employee with ID {} and name {} deleted successfully.", id, name);
        info!("{}", message);
        Ok(message)
    }
}
