use crate::seed::Seeder;
use db::models::log_entry::{Entity as LogEntry, Model};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

const LEVELS: [&str; 4] = ["info", "warning", "error", "debug"];

const MESSAGES: [&str; 10] = [
    "Database connection established",
    "API request processed: /api/users",
    "Cache invalidation triggered",
    "WebSocket connection opened",
    "Authentication token validated",
    "Memory threshold warning: 75%",
    "Failed to resolve dependency",
    "Network timeout on external service",
    "Deployment pipeline initiated",
    "Background job completed successfully",
];

const SOURCES: [&str; 5] = [
    "api/handlers.js",
    "utils/cache.js",
    "services/auth.js",
    "middleware/logger.js",
    "worker/queue.js",
];

pub struct LogSeeder;

#[async_trait::async_trait]
impl Seeder for LogSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        if LogEntry::find().count(db).await? > 0 {
            return Ok(());
        }

        for _ in 0..20 {
            let level = LEVELS[fastrand::usize(..LEVELS.len())];
            let message = MESSAGES[fastrand::usize(..MESSAGES.len())];
            let source = SOURCES[fastrand::usize(..SOURCES.len())];
            let response_time = fastrand::i64(50..550);

            Model::create(db, level, message, source, response_time).await?;
        }

        Ok(())
    }
}
