//! 点评实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub grader_id: i64,
    pub trainee_id: i64,
    pub lesson_completion_id: Option<i64>,
    pub challenge_completion_id: Option<i64>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub visibility: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::GraderId",
        to = "super::users::Column::Id"
    )]
    Grader,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TraineeId",
        to = "super::users::Column::Id"
    )]
    Trainee,
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_note(self) -> crate::models::notes::entities::Note {
        use crate::models::notes::entities::{Note, NoteVisibility};
        use chrono::{DateTime, Utc};

        Note {
            id: self.id,
            grader_id: self.grader_id,
            trainee_id: self.trainee_id,
            lesson_completion_id: self.lesson_completion_id,
            challenge_completion_id: self.challenge_completion_id,
            content: self.content,
            visibility: self
                .visibility
                .parse::<NoteVisibility>()
                .unwrap_or(NoteVisibility::GradersOnly),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
