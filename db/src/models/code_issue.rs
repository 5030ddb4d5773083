use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::Serialize;

/// One row in the `code_issues` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "code_issues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub file: String,
    pub line: i64,
    pub severity: String,
    pub description: String,
    pub resolved: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        title: &str,
        file: &str,
        line: i64,
        severity: &str,
        description: &str,
    ) -> Result<Model, DbErr> {
        let issue = ActiveModel {
            id: NotSet,
            title: Set(title.to_owned()),
            file: Set(file.to_owned()),
            line: Set(line),
            severity: Set(severity.to_owned()),
            description: Set(description.to_owned()),
            resolved: Set(false),
        };
        issue.insert(db).await
    }

    /// All issues still open, oldest first.
    pub async fn unresolved(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Resolved.eq(false))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::{ActiveModel, Model};
    use crate::test_utils::setup_test_db;
    use sea_orm::{ActiveModelTrait, ActiveValue::Set};

    #[tokio::test]
    async fn unresolved_excludes_resolved_rows() {
        let db = setup_test_db().await;

        let open = Model::create(&db, "N+1 query detected", "api/handlers.rs", 124, "error", "Optimize database queries")
            .await
            .unwrap();
        let closed = Model::create(&db, "Memory leak", "utils/cache.rs", 87, "warning", "Clean up listeners")
            .await
            .unwrap();

        let mut fixed: ActiveModel = closed.into();
        fixed.resolved = Set(true);
        fixed.update(&db).await.unwrap();

        let rows = Model::unresolved(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, open.id);
        assert!(rows.iter().all(|i| !i.resolved));
    }
}
