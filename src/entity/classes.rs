//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_name: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::batch_classes::Entity")]
    BatchClasses,
    #[sea_orm(has_many = "super::class_mentors::Entity")]
    ClassMentors,
    #[sea_orm(has_many = "super::class_users::Entity")]
    ClassUsers,
    #[sea_orm(has_many = "super::lessons::Entity")]
    Lessons,
    #[sea_orm(has_many = "super::challenges::Entity")]
    Challenges,
    #[sea_orm(has_many = "super::certificates::Entity")]
    Certificates,
}

impl Related<super::batch_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BatchClasses.def()
    }
}

impl Related<super::class_mentors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassMentors.def()
    }
}

impl Related<super::class_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassUsers.def()
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

impl Related<super::certificates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Certificates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    /// participant_count 为读取时重新统计的冗余字段，由调用方传入
    pub fn into_class(self, participant_count: i64) -> crate::models::classes::entities::Class {
        use chrono::{DateTime, Utc};

        crate::models::classes::entities::Class {
            id: self.id,
            class_name: self.class_name,
            status: self.status,
            participant_count,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
