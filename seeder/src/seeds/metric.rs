use crate::seed::Seeder;
use db::models::metric::{Entity as Metric, Model};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

pub struct MetricSeeder;

#[async_trait::async_trait]
impl Seeder for MetricSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        if Metric::find().count(db).await? > 0 {
            return Ok(());
        }

        for _ in 0..10 {
            let cpu = 20.0 + fastrand::f64() * 70.0;
            let memory = 40.0 + fastrand::f64() * 50.0;
            let requests = fastrand::i64(0..2000);
            let errors = fastrand::i64(0..15);

            Model::create(db, cpu, memory, requests, errors).await?;
        }

        Ok(())
    }
}
