//! 进度统计存储操作
//!
//! 每次调用从头统计，不做缓存；管理后台的低频流量下这是可接受的。
//! 不存在的用户 ID 统计结果为全零，不报错。

use super::SeaOrmStorage;
use crate::entity::prelude::{ChallengeCompletions, Challenges, LessonCompletions, Lessons};
use crate::entity::{challenge_completions, challenges, lesson_completions, lessons};
use crate::errors::{Result, TrainSystemError};
use crate::models::completions::entities::{Progress, ProgressScope};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};

impl SeaOrmStorage {
    /// 统计用户完成进度
    ///
    /// scope 决定总数口径：全局统计所有任务，
    /// 班级口径只统计该班级下的任务。
    pub async fn get_progress_impl(&self, user_id: i64, scope: ProgressScope) -> Result<Progress> {
        let (completed_lessons, total_lessons) = self.lesson_progress(user_id, scope).await?;
        let (completed_challenges, total_challenges) =
            self.challenge_progress(user_id, scope).await?;

        Ok(Progress {
            completed_lessons,
            total_lessons,
            completed_challenges,
            total_challenges,
        })
    }

    async fn lesson_progress(&self, user_id: i64, scope: ProgressScope) -> Result<(u64, u64)> {
        match scope {
            ProgressScope::Global => {
                let total = Lessons::find().count(&self.db).await.map_err(|e| {
                    TrainSystemError::database_operation(format!("统计课程总数失败: {e}"))
                })?;

                let completed = LessonCompletions::find()
                    .filter(lesson_completions::Column::UserId.eq(user_id))
                    .filter(lesson_completions::Column::Completed.eq(true))
                    .count(&self.db)
                    .await
                    .map_err(|e| {
                        TrainSystemError::database_operation(format!("统计课程完成数失败: {e}"))
                    })?;

                Ok((completed, total))
            }
            ProgressScope::Class(class_id) => {
                let lesson_ids: Vec<i64> = Lessons::find()
                    .select_only()
                    .column(lessons::Column::Id)
                    .filter(lessons::Column::ClassId.eq(class_id))
                    .into_tuple::<i64>()
                    .all(&self.db)
                    .await
                    .map_err(|e| {
                        TrainSystemError::database_operation(format!("查询班级课程失败: {e}"))
                    })?;

                let total = lesson_ids.len() as u64;
                if lesson_ids.is_empty() {
                    return Ok((0, 0));
                }

                let completed = LessonCompletions::find()
                    .filter(lesson_completions::Column::UserId.eq(user_id))
                    .filter(lesson_completions::Column::Completed.eq(true))
                    .filter(lesson_completions::Column::LessonId.is_in(lesson_ids))
                    .count(&self.db)
                    .await
                    .map_err(|e| {
                        TrainSystemError::database_operation(format!("统计课程完成数失败: {e}"))
                    })?;

                Ok((completed, total))
            }
        }
    }

    async fn challenge_progress(&self, user_id: i64, scope: ProgressScope) -> Result<(u64, u64)> {
        match scope {
            ProgressScope::Global => {
                let total = Challenges::find().count(&self.db).await.map_err(|e| {
                    TrainSystemError::database_operation(format!("统计挑战总数失败: {e}"))
                })?;

                let completed = ChallengeCompletions::find()
                    .filter(challenge_completions::Column::UserId.eq(user_id))
                    .filter(challenge_completions::Column::Completed.eq(true))
                    .count(&self.db)
                    .await
                    .map_err(|e| {
                        TrainSystemError::database_operation(format!("统计挑战完成数失败: {e}"))
                    })?;

                Ok((completed, total))
            }
            ProgressScope::Class(class_id) => {
                let challenge_ids: Vec<i64> = Challenges::find()
                    .select_only()
                    .column(challenges::Column::Id)
                    .filter(challenges::Column::ClassId.eq(class_id))
                    .into_tuple::<i64>()
                    .all(&self.db)
                    .await
                    .map_err(|e| {
                        TrainSystemError::database_operation(format!("查询班级挑战失败: {e}"))
                    })?;

                let total = challenge_ids.len() as u64;
                if challenge_ids.is_empty() {
                    return Ok((0, 0));
                }

                let completed = ChallengeCompletions::find()
                    .filter(challenge_completions::Column::UserId.eq(user_id))
                    .filter(challenge_completions::Column::Completed.eq(true))
                    .filter(challenge_completions::Column::ChallengeId.is_in(challenge_ids))
                    .count(&self.db)
                    .await
                    .map_err(|e| {
                        TrainSystemError::database_operation(format!("统计挑战完成数失败: {e}"))
                    })?;

                Ok((completed, total))
            }
        }
    }
}
