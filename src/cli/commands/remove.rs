use crate::cli::commands::service_helpers;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::observe::wrappers::around;
use crate::core::traits::employee_api::EmployeeApi;

/// Execute the `rosterly remove <id>` command.
pub fn execute(id: u32, verbose: bool) -> Result<()> {
    let (service, sink) = service_helpers::open_service(verbose)?;

    around(sink.as_ref(), "commands::remove", || {
        service.delete_employee(id)?;
        output::success(&format!("Removed employee #{id}"));
        Ok(())
    })
}
