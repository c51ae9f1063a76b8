//! 点评存储操作

use super::SeaOrmStorage;
use crate::entity::notes::{ActiveModel, Column, Entity as Notes};
use crate::entity::prelude::Users;
use crate::errors::{Result, TrainSystemError};
use crate::models::notes::{
    entities::{Note, NoteVisibility},
    requests::CreateNoteRequest,
    responses::{NoteDetailResponse, NotePersonInfo},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 创建点评
    pub async fn create_note_impl(&self, grader_id: i64, req: CreateNoteRequest) -> Result<Note> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            grader_id: Set(grader_id),
            trainee_id: Set(req.trainee_id),
            lesson_completion_id: Set(req.lesson_completion_id),
            challenge_completion_id: Set(req.challenge_completion_id),
            content: Set(req.content),
            visibility: Set(req.visibility.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("创建点评失败: {e}")))?;

        Ok(result.into_note())
    }

    /// 通过 ID 获取点评
    pub async fn get_note_by_id_impl(&self, note_id: i64) -> Result<Option<Note>> {
        let result = Notes::find_by_id(note_id)
            .one(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询点评失败: {e}")))?;

        Ok(result.map(|m| m.into_note()))
    }

    /// 批量加载点评相关人员的展示信息
    async fn load_person_infos(&self, user_ids: Vec<i64>) -> Result<HashMap<i64, NotePersonInfo>> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = Users::find()
            .filter(crate::entity::users::Column::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询点评人员失败: {e}")))?;

        Ok(users
            .into_iter()
            .map(|m| {
                (
                    m.id,
                    NotePersonInfo {
                        id: m.id,
                        full_name: m.full_name,
                        nickname: m.nickname,
                        role: m.role,
                    },
                )
            })
            .collect())
    }

    /// 把点评模型组装为带人员信息的详情
    async fn build_note_details(
        &self,
        models: Vec<crate::entity::notes::Model>,
    ) -> Result<Vec<NoteDetailResponse>> {
        let mut ids: Vec<i64> = Vec::new();
        for model in &models {
            ids.push(model.grader_id);
            ids.push(model.trainee_id);
        }
        ids.sort_unstable();
        ids.dedup();

        let persons = self.load_person_infos(ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let grader = persons.get(&m.grader_id).cloned();
                let trainee = persons.get(&m.trainee_id).cloned();
                NoteDetailResponse {
                    note: m.into_note(),
                    grader,
                    trainee,
                }
            })
            .collect())
    }

    /// 列出某学员的点评
    ///
    /// only_for_trainee 时只返回 for_trainee 可见性的条目
    /// （学员本人视角）；点评角色视角返回全部。
    pub async fn list_notes_for_trainee_impl(
        &self,
        trainee_id: i64,
        only_for_trainee: bool,
    ) -> Result<Vec<NoteDetailResponse>> {
        let mut select = Notes::find().filter(Column::TraineeId.eq(trainee_id));

        if only_for_trainee {
            select = select.filter(Column::Visibility.eq(NoteVisibility::ForTrainee.to_string()));
        }

        let models = select
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询点评列表失败: {e}")))?;

        self.build_note_details(models).await
    }

    /// 列出某点评人的点评，可按可见性过滤
    pub async fn list_notes_by_grader_impl(
        &self,
        grader_id: i64,
        visibility: Option<NoteVisibility>,
    ) -> Result<Vec<NoteDetailResponse>> {
        let mut select = Notes::find().filter(Column::GraderId.eq(grader_id));

        if let Some(visibility) = visibility {
            select = select.filter(Column::Visibility.eq(visibility.to_string()));
        }

        let models = select
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询点评列表失败: {e}")))?;

        self.build_note_details(models).await
    }

    /// 删除点评
    pub async fn delete_note_impl(&self, note_id: i64) -> Result<bool> {
        let result = Notes::delete_by_id(note_id)
            .exec(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("删除点评失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
