use std::fmt;
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::core::errors::{Result, RosterlyError};
use crate::core::models::employee::Employee;
use crate::core::observe::emit;
use crate::core::traits::employee_api::EmployeeApi;
use crate::core::traits::log_sink::{LogLevel, LogSink};

/// Logging decorator around the service layer.
///
/// Wraps any `EmployeeApi` implementation and attaches observational
/// behavior without changing the business outcome:
///
/// - every method gets an info line on entry (with a rendering of its
///   arguments) and another after a normal return;
/// - `save_employee` and `update_employee` additionally get a
///   celebratory line when the returned record's joining month/day
///   match today's, and an error-level line when they fail;
/// - faults always propagate to the caller unchanged.
///
/// Holds no state across invocations; each wrap is independent.
pub struct LoggedEmployeeApi<A: EmployeeApi> {
    inner: A,
    sink: Arc<dyn LogSink>,
    clock: fn() -> NaiveDate,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl<A: EmployeeApi> LoggedEmployeeApi<A> {
    pub fn new(inner: A, sink: Arc<dyn LogSink>) -> Self {
        Self {
            inner,
            sink,
            clock: today,
        }
    }

    /// Replace the date source used by the anniversary check.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    fn entry(&self, method: &str, args: &[&dyn fmt::Debug]) {
        emit(
            self.sink.as_ref(),
            LogLevel::Info,
            &format!(
                "Executing method: {method} with arguments: {}",
                render_args(args)
            ),
        );
    }

    fn exit(&self, method: &str) {
        emit(
            self.sink.as_ref(),
            LogLevel::Info,
            &format!("Method executed: {method}"),
        );
    }

    fn celebrate(&self, employee: &Employee) {
        if employee.is_anniversary((self.clock)()) {
            emit(
                self.sink.as_ref(),
                LogLevel::Info,
                &format!("HAPPY COMPANY ANNIVERSARY {}!!!", employee.full_name()),
            );
        }
    }

    fn fail(&self, method: &str, error: &RosterlyError) {
        // Multi-line error messages carry CLI guidance; the log keeps
        // the first line only.
        let message = error.to_string();
        let summary = message.lines().next().unwrap_or_default().to_string();
        emit(
            self.sink.as_ref(),
            LogLevel::Error,
            &format!("Method failed: {method}: {summary}"),
        );
    }
}

/// Debug-render an argument list as `[a, b, ...]`.
fn render_args(args: &[&dyn fmt::Debug]) -> String {
    let rendered: Vec<String> = args.iter().map(|arg| format!("{arg:?}")).collect();
    format!("[{}]", rendered.join(", "))
}

impl<A: EmployeeApi> EmployeeApi for LoggedEmployeeApi<A> {
    fn get_all_employees(&self) -> Result<Vec<Employee>> {
        let method = "EmployeeService::get_all_employees";
        self.entry(method, &[]);
        let result = self.inner.get_all_employees();
        if result.is_ok() {
            self.exit(method);
        }
        result
    }

    fn get_employee(&self, id: u32) -> Result<Option<Employee>> {
        let method = "EmployeeService::get_employee";
        self.entry(method, &[&id]);
        let result = self.inner.get_employee(id);
        if result.is_ok() {
            self.exit(method);
        }
        result
    }

    fn save_employee(&self, employee: Employee) -> Result<Employee> {
        let method = "EmployeeService::save_employee";
        self.entry(method, &[&employee]);
        let result = self.inner.save_employee(employee);
        match &result {
            Ok(saved) => {
                self.exit(method);
                self.celebrate(saved);
            }
            Err(error) => self.fail(method, error),
        }
        result
    }

    fn update_employee(&self, employee: Employee) -> Result<Employee> {
        let method = "EmployeeService::update_employee";
        self.entry(method, &[&employee]);
        let result = self.inner.update_employee(employee);
        match &result {
            Ok(updated) => {
                self.exit(method);
                self.celebrate(updated);
            }
            Err(error) => self.fail(method, error),
        }
        result
    }

    fn delete_employee(&self, id: u32) -> Result<()> {
        let method = "EmployeeService::delete_employee";
        self.entry(method, &[&id]);
        let result = self.inner.delete_employee(id);
        if result.is_ok() {
            self.exit(method);
        }
        result
    }
}
