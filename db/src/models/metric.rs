use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::Serialize;

/// One sample in the `metrics` table.
///
/// The table is append-only: every drifted reading is stored as a new row and
/// prior rows are never updated or deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "metrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub cpu: f64,
    pub memory: f64,
    pub requests: i64,
    pub errors: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Most recent sample, or `None` for a fresh store.
    ///
    /// `id` is the tiebreaker for rows sharing a timestamp so that readers
    /// always see the last-inserted sample.
    pub async fn latest(db: &DatabaseConnection) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .one(db)
            .await
    }

    /// Appends a sample stamped with the current time.
    pub async fn create(
        db: &DatabaseConnection,
        cpu: f64,
        memory: f64,
        requests: i64,
        errors: i64,
    ) -> Result<Model, DbErr> {
        let sample = ActiveModel {
            id: NotSet,
            timestamp: Set(Utc::now()),
            cpu: Set(cpu),
            memory: Set(memory),
            requests: Set(requests),
            errors: Set(errors),
        };
        sample.insert(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::Model;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn latest_returns_last_inserted_sample() {
        let db = setup_test_db().await;

        assert_eq!(Model::latest(&db).await.unwrap(), None);

        Model::create(&db, 40.0, 50.0, 100, 2).await.unwrap();
        Model::create(&db, 45.0, 55.0, 150, 3).await.unwrap();

        let latest = Model::latest(&db).await.unwrap().unwrap();
        assert_eq!(latest.requests, 150);
        assert_eq!(latest.errors, 3);
    }
}
