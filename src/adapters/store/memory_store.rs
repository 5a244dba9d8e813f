use std::sync::{Mutex, MutexGuard};

use crate::core::errors::{Result, RosterlyError};
use crate::core::models::employee::Employee;
use crate::core::traits::employee_store::EmployeeStore;

/// In-memory roster store.
///
/// Same id-assignment and missing-id semantics as the file-backed
/// store; used wherever a roster without a filesystem footprint is
/// wanted, mostly in tests.
pub struct MemoryEmployeeStore {
    records: Mutex<Vec<Employee>>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Start with a pre-filled roster. Ids are taken as-is.
    pub fn with_records(records: Vec<Employee>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    fn records(&self) -> Result<MutexGuard<'_, Vec<Employee>>> {
        self.records.lock().map_err(|_| RosterlyError::StorageError {
            detail: "roster mutex poisoned".to_string(),
        })
    }
}

impl Default for MemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore for MemoryEmployeeStore {
    fn insert(&self, mut employee: Employee) -> Result<Employee> {
        let mut records = self.records()?;
        employee.id = records.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        records.push(employee.clone());
        Ok(employee)
    }

    fn update(&self, employee: Employee) -> Result<Employee> {
        let mut records = self.records()?;
        let slot = records
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or(RosterlyError::EmployeeNotFound { id: employee.id })?;
        *slot = employee.clone();
        Ok(employee)
    }

    fn find_by_id(&self, id: u32) -> Result<Option<Employee>> {
        Ok(self.records()?.iter().find(|e| e.id == id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Employee>> {
        let mut records = self.records()?.clone();
        records.sort_by_key(|e| e.id);
        Ok(records)
    }

    fn delete(&self, id: u32) -> Result<()> {
        let mut records = self.records()?;
        if !records.iter().any(|e| e.id == id) {
            return Err(RosterlyError::EmployeeNotFound { id });
        }
        records.retain(|e| e.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn employee(first: &str) -> Employee {
        Employee::draft(
            first,
            "Tester",
            NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
        )
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let store = MemoryEmployeeStore::new();
        let a = store.insert(employee("A")).unwrap();
        let b = store.insert(employee("B")).unwrap();

        assert_eq!((a.id, b.id), (1, 2));
    }

    #[test]
    fn insert_ignores_incoming_id() {
        let store = MemoryEmployeeStore::new();
        let mut draft = employee("A");
        draft.id = 99;

        assert_eq!(store.insert(draft).unwrap().id, 1);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = MemoryEmployeeStore::new();
        store.insert(employee("A")).unwrap();
        let b = store.insert(employee("B")).unwrap();
        store.delete(1).unwrap();

        // Highest surviving id still anchors the sequence.
        assert_eq!(store.insert(employee("C")).unwrap().id, b.id + 1);
    }

    #[test]
    fn update_unknown_id_fails() {
        let store = MemoryEmployeeStore::new();
        let mut ghost = employee("A");
        ghost.id = 5;

        let error = store.update(ghost).unwrap_err();
        assert!(matches!(error, RosterlyError::EmployeeNotFound { id: 5 }));
    }

    #[test]
    fn delete_unknown_id_fails() {
        let store = MemoryEmployeeStore::new();
        let error = store.delete(5).unwrap_err();
        assert!(matches!(error, RosterlyError::EmployeeNotFound { id: 5 }));
    }

    #[test]
    fn find_all_orders_by_id() {
        let store = MemoryEmployeeStore::with_records(vec![
            Employee {
                id: 3,
                ..employee("C")
            },
            Employee {
                id: 1,
                ..employee("A")
            },
        ]);

        let ids: Vec<u32> = store.find_all().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
