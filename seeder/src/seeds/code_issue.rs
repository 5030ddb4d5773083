use crate::seed::Seeder;
use db::models::code_issue::{Entity as CodeIssue, Model};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

/// The sample issues shown on a fresh dashboard. (title, file, line,
/// severity, description)
const ISSUES: [(&str, &str, i64, &str, &str); 4] = [
    (
        "N+1 query detected",
        "api/handlers.js",
        124,
        "error",
        "Optimize database queries",
    ),
    (
        "Memory leak in event listener",
        "utils/cache.js",
        87,
        "warning",
        "Clean up event listeners properly",
    ),
    (
        "Unhandled promise rejection",
        "services/auth.js",
        203,
        "warning",
        "Add .catch() handler",
    ),
    (
        "Performance: 450ms response time",
        "middleware/logger.js",
        56,
        "info",
        "Consider optimization",
    ),
];

pub struct CodeIssueSeeder;

#[async_trait::async_trait]
impl Seeder for CodeIssueSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        if CodeIssue::find().count(db).await? > 0 {
            return Ok(());
        }

        for (title, file, line, severity, description) in ISSUES {
            Model::create(db, title, file, line, severity, description).await?;
        }

        Ok(())
    }
}
