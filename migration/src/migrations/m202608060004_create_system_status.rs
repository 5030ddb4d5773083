// migrations/m202608060004_create_system_status.rs
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum SystemStatus {
    Table,
    Id,
    Service,
    Status,
    Uptime,
    LastChecked,
}

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608060004_create_system_status"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SystemStatus::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SystemStatus::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // One row per monitored service.
                    .col(
                        ColumnDef::new(SystemStatus::Service)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SystemStatus::Status).text().not_null())
                    .col(ColumnDef::new(SystemStatus::Uptime).double().not_null())
                    .col(
                        ColumnDef::new(SystemStatus::LastChecked)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SystemStatus::Table).to_owned())
            .await
    }
}
