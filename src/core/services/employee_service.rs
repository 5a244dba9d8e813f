use crate::core::errors::Result;
use crate::core::models::employee::Employee;
use crate::core::traits::employee_api::EmployeeApi;
use crate::core::traits::employee_store::EmployeeStore;

/// Business façade over an `EmployeeStore` backend.
///
/// Every method is a passthrough; rules like id assignment and
/// missing-id faults belong to the store.
pub struct EmployeeService<S: EmployeeStore> {
    pub store: S,
}

impl<S: EmployeeStore> EmployeeApi for EmployeeService<S> {
    fn get_all_employees(&self) -> Result<Vec<Employee>> {
        self.store.find_all()
    }

    fn get_employee(&self, id: u32) -> Result<Option<Employee>> {
        self.store.find_by_id(id)
    }

    fn save_employee(&self, employee: Employee) -> Result<Employee> {
        self.store.insert(employee)
    }

    fn update_employee(&self, employee: Employee) -> Result<Employee> {
        self.store.update(employee)
    }

    fn delete_employee(&self, id: u32) -> Result<()> {
        self.store.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::memory_store::MemoryEmployeeStore;
    use chrono::NaiveDate;

    fn service() -> EmployeeService<MemoryEmployeeStore> {
        EmployeeService {
            store: MemoryEmployeeStore::new(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn save_assigns_id_and_get_all_sees_it() {
        let service = service();
        let saved = service
            .save_employee(Employee::draft("Ada", "Lovelace", date(2019, 5, 14)))
            .unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(service.get_all_employees().unwrap(), vec![saved]);
    }

    #[test]
    fn update_replaces_existing_record() {
        let service = service();
        let mut saved = service
            .save_employee(Employee::draft("Ada", "Lovelace", date(2019, 5, 14)))
            .unwrap();

        saved.last_name = "King".to_string();
        let updated = service.update_employee(saved.clone()).unwrap();

        assert_eq!(updated, saved);
        assert_eq!(
            service.get_employee(saved.id).unwrap().unwrap().last_name,
            "King"
        );
    }

    #[test]
    fn get_missing_employee_is_none() {
        assert_eq!(service().get_employee(42).unwrap(), None);
    }

    #[test]
    fn delete_removes_record() {
        let service = service();
        let saved = service
            .save_employee(Employee::draft("Ada", "Lovelace", date(2019, 5, 14)))
            .unwrap();

        service.delete_employee(saved.id).unwrap();
        assert!(service.get_all_employees().unwrap().is_empty());
    }
}
