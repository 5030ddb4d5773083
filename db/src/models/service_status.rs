use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::Serialize;

/// One row per monitored service in the `system_status` table.
///
/// `service` is unique. The stored `uptime` is the seeded value; reads drift
/// it on the way out without writing back.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "system_status")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub service: String,
    pub status: String,
    pub uptime: f64,
    #[serde(rename = "lastChecked")]
    pub last_checked: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        service: &str,
        status: &str,
        uptime: f64,
    ) -> Result<Model, DbErr> {
        let row = ActiveModel {
            id: NotSet,
            service: Set(service.to_owned()),
            status: Set(status.to_owned()),
            uptime: Set(uptime),
            last_checked: Set(Utc::now()),
        };
        row.insert(db).await
    }

    pub async fn all(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }
}
