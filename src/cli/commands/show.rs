use colored::Colorize;

use crate::cli::commands::service_helpers;
use crate::cli::output;
use crate::core::errors::{Result, RosterlyError};
use crate::core::observe::wrappers::around;
use crate::core::traits::employee_api::EmployeeApi;

/// Execute the `rosterly show <id>` command.
pub fn execute(id: u32, verbose: bool) -> Result<()> {
    let (service, sink) = service_helpers::open_service(verbose)?;

    around(sink.as_ref(), "commands::show", || {
        let employee = service
            .get_employee(id)?
            .ok_or(RosterlyError::EmployeeNotFound { id })?;

        output::header(&format!("Employee #{}", employee.id));
        println!();
        println!("  {:<12} {}", "First name".dimmed(), employee.first_name);
        println!("  {:<12} {}", "Last name".dimmed(), employee.last_name);
        println!(
            "  {:<12} {}",
            "Joined on".dimmed(),
            employee.joined_on.format("%Y-%m-%d")
        );
        Ok(())
    })
}
