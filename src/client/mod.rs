pub mod upstream;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{CreateEmployeeInput, Employee};

pub use upstream::UpstreamClient;

/// The employee store this service fronts.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    /// Every record; an upstream reply without data is an empty list.
    async fn fetch_all(&self) -> Result<Vec<Employee>, AppError>;

    /// `Ok(None)` when the upstream has no record with this id.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Employee>, AppError>;

    async fn create(&self, input: &CreateEmployeeInput) -> Result<Employee, AppError>;

    async fn delete_by_name(&self, name: &str) -> Result<(), AppError>;
}
