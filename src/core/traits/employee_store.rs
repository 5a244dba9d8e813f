use crate::core::errors::Result;
use crate::core::models::employee::Employee;

/// Port for the roster storage gateway.
///
/// Plain create/read/update/delete/list-all keyed by integer id.
/// No custom queries and no transactions; implementations live in
/// `adapters::store`.
pub trait EmployeeStore: Send + Sync {
    /// Insert a new record, assigning a fresh identifier.
    /// The incoming `id` field is ignored.
    fn insert(&self, employee: Employee) -> Result<Employee>;

    /// Replace the record with the same id.
    fn update(&self, employee: Employee) -> Result<Employee>;

    /// Look up a record, returning `None` when absent.
    fn find_by_id(&self, id: u32) -> Result<Option<Employee>>;

    /// All records, ordered by id.
    fn find_all(&self) -> Result<Vec<Employee>>;

    /// Remove a record by id.
    fn delete(&self, id: u32) -> Result<()>;
}
