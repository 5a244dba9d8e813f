use colored::Colorize;

use crate::cli::commands::service_helpers;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::employee::Employee;
use crate::core::observe::wrappers::{around, with_timing};
use crate::core::traits::employee_api::EmployeeApi;

/// Execute the `rosterly list` command.
///
/// The one explicitly timed call in the tool: the service fetch runs
/// under `with_timing`, so the log carries its elapsed milliseconds.
pub fn execute(verbose: bool) -> Result<()> {
    let (service, sink) = service_helpers::open_service(verbose)?;

    around(sink.as_ref(), "commands::list", || {
        let employees = with_timing(
            sink.as_ref(),
            "EmployeeService::get_all_employees",
            || service.get_all_employees(),
        )?;

        if employees.is_empty() {
            output::warning("The roster is empty");
            output::hint(
                "Add someone: rosterly add --first-name Ada --last-name Lovelace --joined-on 2019-05-14",
            );
            return Ok(());
        }

        output::header(&format!("Roster ({} employees)", employees.len()));
        println!();
        for employee in &employees {
            print_row(employee);
        }
        Ok(())
    })
}

fn print_row(employee: &Employee) {
    println!(
        "  {:>5} {} {:<24} joined {}",
        format!("#{}", employee.id).dimmed(),
        "│".dimmed(),
        employee.full_name(),
        employee.joined_on.format("%Y-%m-%d"),
    );
}
