use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, QueryOrder, QuerySelect, Set};
use serde::Serialize;

/// One row in the `logs` table.
///
/// `level` is free text by design; producers use info/warning/error/debug by
/// convention but the store does not enforce a vocabulary.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub message: String,
    pub source: String,
    #[serde(rename = "responseTime")]
    pub response_time: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a log entry stamped with the current time and returns the
    /// stored row, including its generated id.
    pub async fn create(
        db: &DatabaseConnection,
        level: &str,
        message: &str,
        source: &str,
        response_time: i64,
    ) -> Result<Model, DbErr> {
        let entry = ActiveModel {
            id: NotSet,
            timestamp: Set(Utc::now()),
            level: Set(level.to_owned()),
            message: Set(message.to_owned()),
            source: Set(source.to_owned()),
            response_time: Set(response_time),
        };
        entry.insert(db).await
    }

    /// The `limit` most recent entries, newest first.
    pub async fn recent(db: &DatabaseConnection, limit: u64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::Model;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn recent_orders_newest_first_and_limits() {
        let db = setup_test_db().await;

        Model::create(&db, "info", "first", "api/handlers.rs", 120)
            .await
            .unwrap();
        Model::create(&db, "error", "second", "worker/queue.rs", 340)
            .await
            .unwrap();
        Model::create(&db, "debug", "third", "utils/cache.rs", 90)
            .await
            .unwrap();

        let rows = Model::recent(&db, 2).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].message, "third");
        assert_eq!(rows[1].message, "second");
    }
}
