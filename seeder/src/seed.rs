use async_trait::async_trait;
use colored::*;
use futures::FutureExt;
use sea_orm::{DatabaseConnection, DbErr};
use std::io::{self, Write};
use std::time::Instant;

use crate::seeds::{
    code_issue::CodeIssueSeeder, log::LogSeeder, metric::MetricSeeder,
    service_status::ServiceStatusSeeder,
};

const STATUS_COLUMN: usize = 80;

/// A sample-data seeder for one table. Implementations insert rows only when
/// their table is empty, so re-running a seeder is a no-op.
#[async_trait]
pub trait Seeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr>;
}

/// The table seeders in insertion order, paired with display names.
pub fn all_seeders() -> Vec<(Box<dyn Seeder + Send + Sync>, &'static str)> {
    vec![
        (Box::new(LogSeeder) as Box<dyn Seeder + Send + Sync>, "Log"),
        (Box::new(CodeIssueSeeder), "CodeIssue"),
        (Box::new(ServiceStatusSeeder), "ServiceStatus"),
        (Box::new(MetricSeeder), "Metric"),
    ]
}

/// Seeds every table that is still empty.
///
/// Tables are independent: a failure in one is logged and the remaining
/// tables are still attempted. The first error is returned so the caller can
/// tell the pass was incomplete; partially seeded data stays in place.
pub async fn seed_all(db: &DatabaseConnection) -> Result<(), DbErr> {
    let mut first_err: Option<DbErr> = None;

    for (seeder, name) in all_seeders() {
        if let Err(e) = seeder.seed(db).await {
            tracing::warn!("seeding {name} failed: {e}");
            if first_err.is_none() {
                first_err = Some(e);
            }
        }
    }

    match first_err {
        None => Ok(()),
        Some(e) => Err(e),
    }
}

pub async fn run_seeder<S: Seeder + ?Sized>(seeder: &S, name: &str, db: &DatabaseConnection) {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().unwrap();

    let start = Instant::now();
    let result = std::panic::AssertUnwindSafe(seeder.seed(db))
        .catch_unwind()
        .await;

    match result {
        Ok(Ok(())) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
        }
        Ok(Err(e)) => {
            println!("{}", "failed".red());
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(_) => {
            println!("{}", "failed".red());
            std::process::exit(1);
        }
    }
}
