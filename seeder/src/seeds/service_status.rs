use crate::seed::Seeder;
use db::models::service_status::{Entity as ServiceStatus, Model};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

/// One entry per monitored service: (service, status, uptime %). Service
/// names must stay distinct; the column carries a unique constraint.
const SERVICES: [(&str, &str, f64); 4] = [
    ("API Server", "online", 99.9),
    ("Database", "online", 99.8),
    ("Cache Layer", "online", 100.0),
    ("Message Queue", "online", 99.5),
];

pub struct ServiceStatusSeeder;

#[async_trait::async_trait]
impl Seeder for ServiceStatusSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        if ServiceStatus::find().count(db).await? > 0 {
            return Ok(());
        }

        for (service, status, uptime) in SERVICES {
            Model::create(db, service, status, uptime).await?;
        }

        Ok(())
    }
}
