// migrations/m202608060003_create_code_issues.rs
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum CodeIssues {
    Table,
    Id,
    Title,
    File,
    Line,
    Severity,
    Description,
    Resolved,
}

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608060003_create_code_issues"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CodeIssues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CodeIssues::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CodeIssues::Title).text().not_null())
                    .col(ColumnDef::new(CodeIssues::File).text().not_null())
                    .col(ColumnDef::new(CodeIssues::Line).big_integer().not_null())
                    .col(ColumnDef::new(CodeIssues::Severity).text().not_null())
                    .col(ColumnDef::new(CodeIssues::Description).text().not_null())
                    .col(
                        ColumnDef::new(CodeIssues::Resolved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CodeIssues::Table).to_owned())
            .await
    }
}
