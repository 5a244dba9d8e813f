use crate::cli::commands::service_helpers;
use crate::cli::output;
use crate::core::errors::{Result, RosterlyError};
use crate::core::models::employee::Employee;
use crate::core::observe::wrappers::around;
use crate::core::traits::employee_api::EmployeeApi;

/// Execute the `rosterly update <id>` command.
///
/// Partial update: flags that were not given keep the current value.
pub fn execute(
    id: u32,
    first_name: Option<&str>,
    last_name: Option<&str>,
    joined_on: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let (service, sink) = service_helpers::open_service(verbose)?;

    around(sink.as_ref(), "commands::update", || {
        if first_name.is_none() && last_name.is_none() && joined_on.is_none() {
            output::warning("Nothing to update");
            output::hint("Pass at least one of --first-name, --last-name, --joined-on.");
            return Ok(());
        }

        let current = service
            .get_employee(id)?
            .ok_or(RosterlyError::EmployeeNotFound { id })?;

        let employee = Employee {
            id,
            first_name: first_name.map(str::to_string).unwrap_or(current.first_name),
            last_name: last_name.map(str::to_string).unwrap_or(current.last_name),
            joined_on: match joined_on {
                Some(raw) => service_helpers::parse_joined_on(raw)?,
                None => current.joined_on,
            },
        };

        let updated = service.update_employee(employee)?;
        output::success(&format!(
            "Updated employee #{} ({})",
            updated.id,
            updated.full_name()
        ));
        Ok(())
    })
}
