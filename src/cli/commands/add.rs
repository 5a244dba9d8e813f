use crate::cli::commands::service_helpers;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::employee::Employee;
use crate::core::observe::wrappers::around;
use crate::core::traits::employee_api::EmployeeApi;

/// Execute the `rosterly add` command.
pub fn execute(first_name: &str, last_name: &str, joined_on: &str, verbose: bool) -> Result<()> {
    let (service, sink) = service_helpers::open_service(verbose)?;

    around(sink.as_ref(), "commands::add", || {
        let joined_on = service_helpers::parse_joined_on(joined_on)?;
        let saved = service.save_employee(Employee::draft(first_name, last_name, joined_on))?;

        output::success(&format!(
            "Added {} as employee #{}",
            saved.full_name(),
            saved.id
        ));
        Ok(())
    })
}
