//! 培训批次实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "batches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub batch_num: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub start_date: i64,
    pub end_date: i64,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::batch_classes::Entity")]
    BatchClasses,
    #[sea_orm(has_many = "super::lessons::Entity")]
    Lessons,
    #[sea_orm(has_many = "super::challenges::Entity")]
    Challenges,
}

impl Related<super::batch_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BatchClasses.def()
    }
}

impl Related<super::lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lessons.def()
    }
}

impl Related<super::challenges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Challenges.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_batch(self) -> crate::models::batches::entities::Batch {
        use chrono::{DateTime, Utc};

        crate::models::batches::entities::Batch {
            id: self.id,
            batch_num: self.batch_num,
            title: self.title,
            description: self.description,
            start_date: DateTime::<Utc>::from_timestamp(self.start_date, 0).unwrap_or_default(),
            end_date: DateTime::<Utc>::from_timestamp(self.end_date, 0).unwrap_or_default(),
            status: self.status,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
