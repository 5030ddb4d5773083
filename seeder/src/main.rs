use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use seeder::seed::{all_seeders, run_seeder};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await;

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    for (seeder, name) in all_seeders() {
        run_seeder(&*seeder, name, &db).await;
    }
}
