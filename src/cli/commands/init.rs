use std::fs;

use chrono::NaiveDate;

use crate::adapters::sink::file_sink::FileSink;
use crate::adapters::store::json_store::JsonEmployeeStore;
use crate::cli::{context, output};
use crate::config::app_config::{DEFAULT_LOG_FILE, DEFAULT_ROSTER_FILE};
use crate::core::errors::Result;
use crate::core::models::employee::Employee;
use crate::core::observe::wrappers::around;
use crate::core::traits::employee_store::EmployeeStore;

/// Execute the `rosterly init` command.
///
/// Creates the data directory with a default config and an empty
/// roster. `--sample` seeds the 20-employee demo roster instead.
/// Runs before a config exists, so the handler wrapper uses a sink at
/// the default log path.
pub fn execute(sample: bool) -> Result<()> {
    let dir = context::rosterly_dir();

    if dir.join("config.toml").exists() {
        output::warning("Rosterly is already initialized here");
        output::hint("Delete the data directory to start over.");
        return Ok(());
    }

    let sink = FileSink::new(dir, DEFAULT_LOG_FILE);
    around(&sink, "commands::init", || {
        fs::create_dir_all(dir)?;
        fs::write(dir.join("config.toml"), default_config())?;

        let roster_path = dir.join(DEFAULT_ROSTER_FILE);
        if sample {
            let store = JsonEmployeeStore::new(roster_path);
            for employee in sample_roster() {
                store.insert(employee)?;
            }
        } else {
            fs::write(roster_path, "[]\n")?;
        }

        Ok(())
    })?;

    output::success(&format!("Initialized Rosterly in {}", dir.display()));
    if sample {
        output::success("Seeded the sample roster (20 employees)");
    }
    output::hint("Try: rosterly list");
    Ok(())
}

fn default_config() -> String {
    format!(
        "[rosterly]\n\
         version = \"{}\"\n\
         roster_file = \"{DEFAULT_ROSTER_FILE}\"\n\
         \n\
         [log]\n\
         enabled = true\n\
         file = \"{DEFAULT_LOG_FILE}\"\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// The demo roster: 20 employees with joining dates spread across the
/// calendar, so anniversary lines actually show up in demos.
fn sample_roster() -> Vec<Employee> {
    let entries: [(&str, &str, i32, u32, u32); 20] = [
        ("Maya", "Okafor", 2016, 1, 9),
        ("Jonas", "Lindqvist", 2017, 1, 28),
        ("Priya", "Raghavan", 2019, 2, 14),
        ("Tomás", "Ferreira", 2015, 2, 27),
        ("Hana", "Sato", 2020, 3, 3),
        ("Derek", "Boateng", 2018, 3, 21),
        ("Ines", "Kovač", 2021, 4, 6),
        ("Liam", "Gallagher", 2016, 4, 25),
        ("Noor", "Haddad", 2022, 5, 12),
        ("Sofia", "Marchetti", 2017, 5, 30),
        ("Elias", "Virtanen", 2019, 6, 8),
        ("Amara", "Diallo", 2020, 6, 19),
        ("Ruben", "Castillo", 2015, 7, 2),
        ("Wei", "Zhang", 2018, 7, 23),
        ("Clara", "Novak", 2021, 8, 15),
        ("Owen", "Whitfield", 2016, 9, 4),
        ("Leila", "Benali", 2022, 10, 11),
        ("Mateo", "Silva", 2019, 11, 7),
        ("Astrid", "Holm", 2017, 12, 1),
        ("Kofi", "Mensah", 2020, 12, 29),
    ];

    entries
        .into_iter()
        .map(|(first, last, year, month, day)| {
            Employee::draft(first, last, seed_date(year, month, day))
        })
        .collect()
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}
