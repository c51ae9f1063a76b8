//! 完成记录存储操作
//!
//! 写入走复合唯一键上的 upsert（ON CONFLICT DO UPDATE），
//! 重复提交与并发提交都收敛到同一条记录。

use super::SeaOrmStorage;
use crate::entity::prelude::{ChallengeCompletions, LessonCompletions};
use crate::entity::{challenge_completions, lesson_completions};
use crate::errors::{Result, TrainSystemError};
use crate::models::{
    assignments::entities::AssignmentKind,
    completions::entities::{Completion, CompletionStatus},
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 获取 (用户, 任务) 的完成记录
    pub async fn get_completion_impl(
        &self,
        kind: AssignmentKind,
        user_id: i64,
        assignment_id: i64,
    ) -> Result<Option<Completion>> {
        let result = match kind {
            AssignmentKind::Lesson => LessonCompletions::find()
                .filter(lesson_completions::Column::UserId.eq(user_id))
                .filter(lesson_completions::Column::LessonId.eq(assignment_id))
                .one(&self.db)
                .await
                .map(|opt| opt.map(|m| m.into_completion())),
            AssignmentKind::Challenge => ChallengeCompletions::find()
                .filter(challenge_completions::Column::UserId.eq(user_id))
                .filter(challenge_completions::Column::ChallengeId.eq(assignment_id))
                .one(&self.db)
                .await
                .map(|opt| opt.map(|m| m.into_completion())),
        };

        result.map_err(|e| TrainSystemError::database_operation(format!("查询完成记录失败: {e}")))
    }

    /// 通过 ID 获取完成记录
    pub async fn get_completion_by_id_impl(
        &self,
        kind: AssignmentKind,
        completion_id: i64,
    ) -> Result<Option<Completion>> {
        let result = match kind {
            AssignmentKind::Lesson => LessonCompletions::find_by_id(completion_id)
                .one(&self.db)
                .await
                .map(|opt| opt.map(|m| m.into_completion())),
            AssignmentKind::Challenge => ChallengeCompletions::find_by_id(completion_id)
                .one(&self.db)
                .await
                .map(|opt| opt.map(|m| m.into_completion())),
        };

        result.map_err(|e| TrainSystemError::database_operation(format!("查询完成记录失败: {e}")))
    }

    /// 按复合唯一键 upsert 完成记录
    ///
    /// 已存在的记录被更新为 completed=true 并刷新 completed_at，
    /// 不存在则插入。两次调用收敛到同一条记录（存储层幂等）。
    pub async fn upsert_completion_impl(
        &self,
        kind: AssignmentKind,
        user_id: i64,
        assignment_id: i64,
        status: CompletionStatus,
    ) -> Result<Completion> {
        let now = chrono::Utc::now().timestamp();

        match kind {
            AssignmentKind::Lesson => {
                let model = lesson_completions::ActiveModel {
                    user_id: Set(user_id),
                    lesson_id: Set(assignment_id),
                    completed: Set(true),
                    completed_at: Set(Some(now)),
                    status: Set(status.to_string()),
                    ..Default::default()
                };

                LessonCompletions::insert(model)
                    .on_conflict(
                        OnConflict::columns([
                            lesson_completions::Column::UserId,
                            lesson_completions::Column::LessonId,
                        ])
                        .update_columns([
                            lesson_completions::Column::Completed,
                            lesson_completions::Column::CompletedAt,
                            lesson_completions::Column::Status,
                        ])
                        .to_owned(),
                    )
                    .exec(&self.db)
                    .await
                    .map_err(|e| {
                        TrainSystemError::database_operation(format!("写入完成记录失败: {e}"))
                    })?;
            }
            AssignmentKind::Challenge => {
                let model = challenge_completions::ActiveModel {
                    user_id: Set(user_id),
                    challenge_id: Set(assignment_id),
                    completed: Set(true),
                    completed_at: Set(Some(now)),
                    status: Set(status.to_string()),
                    ..Default::default()
                };

                ChallengeCompletions::insert(model)
                    .on_conflict(
                        OnConflict::columns([
                            challenge_completions::Column::UserId,
                            challenge_completions::Column::ChallengeId,
                        ])
                        .update_columns([
                            challenge_completions::Column::Completed,
                            challenge_completions::Column::CompletedAt,
                            challenge_completions::Column::Status,
                        ])
                        .to_owned(),
                    )
                    .exec(&self.db)
                    .await
                    .map_err(|e| {
                        TrainSystemError::database_operation(format!("写入完成记录失败: {e}"))
                    })?;
            }
        }

        // upsert 后重新读取，拿到最终落库的记录
        self.get_completion_impl(kind, user_id, assignment_id)
            .await?
            .ok_or_else(|| {
                TrainSystemError::database_operation("完成记录写入后查询为空".to_string())
            })
    }

    /// 点评后把完成记录推进为 graded
    pub async fn mark_completion_graded_impl(
        &self,
        kind: AssignmentKind,
        completion_id: i64,
    ) -> Result<bool> {
        let graded = CompletionStatus::Graded.to_string();

        let result = match kind {
            AssignmentKind::Lesson => {
                LessonCompletions::update_many()
                    .col_expr(
                        lesson_completions::Column::Status,
                        sea_orm::sea_query::Expr::value(graded),
                    )
                    .filter(lesson_completions::Column::Id.eq(completion_id))
                    .exec(&self.db)
                    .await
            }
            AssignmentKind::Challenge => {
                ChallengeCompletions::update_many()
                    .col_expr(
                        challenge_completions::Column::Status,
                        sea_orm::sea_query::Expr::value(graded),
                    )
                    .filter(challenge_completions::Column::Id.eq(completion_id))
                    .exec(&self.db)
                    .await
            }
        };

        let result = result
            .map_err(|e| TrainSystemError::database_operation(format!("更新点评状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
