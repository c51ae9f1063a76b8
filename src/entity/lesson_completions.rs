//! 课程完成记录实体
//!
//! (user_id, lesson_id) 复合唯一约束保证每个用户对每个课程
//! 至多一条记录；并发提交由该约束兜底。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lesson_completions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub lesson_id: i64,
    pub completed: bool,
    pub completed_at: Option<i64>,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::lessons::Entity",
        from = "Column::LessonId",
        to = "super::lessons::Column::Id"
    )]
    Lesson,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_completion(self) -> crate::models::completions::entities::Completion {
        use crate::models::assignments::entities::AssignmentKind;
        use crate::models::completions::entities::{Completion, CompletionStatus};
        use chrono::{DateTime, Utc};

        Completion {
            id: self.id,
            kind: AssignmentKind::Lesson,
            user_id: self.user_id,
            assignment_id: self.lesson_id,
            completed: self.completed,
            completed_at: self
                .completed_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            status: self
                .status
                .parse::<CompletionStatus>()
                .unwrap_or(CompletionStatus::NotSubmitted),
        }
    }
}
