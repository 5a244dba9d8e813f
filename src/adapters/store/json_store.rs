use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, RosterlyError};
use crate::core::models::employee::Employee;
use crate::core::traits::employee_store::EmployeeStore;

/// Roster store that persists employees as a JSON array in a file.
///
/// Every operation is a read-modify-write of the whole file. That is
/// deliberate: the roster is small and this store is not a database.
/// A missing file reads as an empty roster.
pub struct JsonEmployeeStore {
    path: PathBuf,
}

impl JsonEmployeeStore {
    /// Create a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Return the file path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Employee>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| RosterlyError::StorageError {
                detail: format!("Cannot read roster at {}: {e}", self.path.display()),
            })?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| RosterlyError::StorageError {
            detail: format!("Malformed roster file {}: {e}", self.path.display()),
        })
    }

    fn persist(&self, records: &[Employee]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let json =
            serde_json::to_string_pretty(records).map_err(|e| RosterlyError::StorageError {
                detail: format!("Failed to serialize roster: {e}"),
            })?;

        fs::write(&self.path, json + "\n").map_err(|e| RosterlyError::StorageError {
            detail: format!("Cannot write roster at {}: {e}", self.path.display()),
        })
    }
}

impl EmployeeStore for JsonEmployeeStore {
    fn insert(&self, mut employee: Employee) -> Result<Employee> {
        let mut records = self.load()?;
        employee.id = records.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        records.push(employee.clone());
        self.persist(&records)?;
        Ok(employee)
    }

    fn update(&self, employee: Employee) -> Result<Employee> {
        let mut records = self.load()?;
        let slot = records
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or(RosterlyError::EmployeeNotFound { id: employee.id })?;
        *slot = employee.clone();
        self.persist(&records)?;
        Ok(employee)
    }

    fn find_by_id(&self, id: u32) -> Result<Option<Employee>> {
        Ok(self.load()?.into_iter().find(|e| e.id == id))
    }

    fn find_all(&self) -> Result<Vec<Employee>> {
        let mut records = self.load()?;
        records.sort_by_key(|e| e.id);
        Ok(records)
    }

    fn delete(&self, id: u32) -> Result<()> {
        let mut records = self.load()?;
        if !records.iter().any(|e| e.id == id) {
            return Err(RosterlyError::EmployeeNotFound { id });
        }
        records.retain(|e| e.id != id);
        self.persist(&records)
    }
}
