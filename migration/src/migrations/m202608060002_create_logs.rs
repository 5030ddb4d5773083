// migrations/m202608060002_create_logs.rs
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Logs {
    Table,
    Id,
    Timestamp,
    Level,
    Message,
    Source,
    ResponseTime,
}

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608060002_create_logs"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Logs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Logs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Logs::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Level is deliberately free text: the producer decides the
                    // vocabulary (info/warning/error/debug by convention).
                    .col(ColumnDef::new(Logs::Level).text().not_null())
                    .col(ColumnDef::new(Logs::Message).text().not_null())
                    .col(ColumnDef::new(Logs::Source).text().not_null())
                    .col(ColumnDef::new(Logs::ResponseTime).big_integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Logs::Table).to_owned())
            .await
    }
}
