use crate::core::errors::Result;
use crate::core::models::employee::Employee;

/// The service-layer boundary.
///
/// Implemented by `EmployeeService` (the real thing) and by
/// `LoggedEmployeeApi` (the logging decorator), so callers compose
/// interception without changing how they call the service.
pub trait EmployeeApi {
    fn get_all_employees(&self) -> Result<Vec<Employee>>;

    fn get_employee(&self, id: u32) -> Result<Option<Employee>>;

    /// Store a new employee and return it with its assigned id.
    fn save_employee(&self, employee: Employee) -> Result<Employee>;

    /// Replace an existing employee. Fails when the id is unknown.
    fn update_employee(&self, employee: Employee) -> Result<Employee>;

    fn delete_employee(&self, id: u32) -> Result<()>;
}
