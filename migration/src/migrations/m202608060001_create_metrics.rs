// migrations/m202608060001_create_metrics.rs
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Metrics {
    Table,
    Id,
    Timestamp,
    Cpu,
    Memory,
    Requests,
    Errors,
}

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608060001_create_metrics"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Metrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Metrics::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Metrics::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Metrics::Cpu).double().not_null())
                    .col(ColumnDef::new(Metrics::Memory).double().not_null())
                    .col(ColumnDef::new(Metrics::Requests).big_integer().not_null())
                    .col(ColumnDef::new(Metrics::Errors).big_integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Metrics::Table).to_owned())
            .await
    }
}
