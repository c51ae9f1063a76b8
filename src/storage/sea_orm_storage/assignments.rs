//! 任务存储操作
//!
//! 课程任务与实战挑战各自独立建表，这里按 kind 分派到对应实体，
//! 转换后对上层统一呈现为 Assignment。

use super::SeaOrmStorage;
use crate::entity::prelude::{Challenges, Lessons, Users};
use crate::entity::{challenges, class_users, lessons};
use crate::errors::{Result, TrainSystemError};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::{Assignment, AssignmentKind, MentorInfo},
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建任务
    pub async fn create_assignment_impl(
        &self,
        kind: AssignmentKind,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();
        let mentor_id = req.mentor_id.ok_or_else(|| {
            TrainSystemError::database_operation(
                "mentor_id must be set before calling create_assignment",
            )
        })?;

        let result = match kind {
            AssignmentKind::Lesson => {
                let model = lessons::ActiveModel {
                    class_id: Set(req.class_id),
                    batch_id: Set(req.batch_id),
                    mentor_id: Set(mentor_id),
                    title: Set(req.title),
                    description: Set(req.description),
                    deadline: Set(req.deadline.map(|d| d.timestamp())),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model.insert(&self.db).await.map(|m| m.into_assignment())
            }
            AssignmentKind::Challenge => {
                let model = challenges::ActiveModel {
                    class_id: Set(req.class_id),
                    batch_id: Set(req.batch_id),
                    mentor_id: Set(mentor_id),
                    title: Set(req.title),
                    description: Set(req.description),
                    deadline: Set(req.deadline.map(|d| d.timestamp())),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model.insert(&self.db).await.map(|m| m.into_assignment())
            }
        };

        result.map_err(|e| {
            TrainSystemError::database_operation(format!("创建{}失败: {e}", kind.noun()))
        })
    }

    /// 通过 ID 获取任务
    pub async fn get_assignment_by_id_impl(
        &self,
        kind: AssignmentKind,
        id: i64,
    ) -> Result<Option<Assignment>> {
        let result = match kind {
            AssignmentKind::Lesson => Lessons::find_by_id(id)
                .one(&self.db)
                .await
                .map(|opt| opt.map(|m| m.into_assignment())),
            AssignmentKind::Challenge => Challenges::find_by_id(id)
                .one(&self.db)
                .await
                .map(|opt| opt.map(|m| m.into_assignment())),
        };

        result.map_err(|e| TrainSystemError::database_operation(format!("查询任务失败: {e}")))
    }

    /// 分页列出任务
    pub async fn list_assignments_with_pagination_impl(
        &self,
        kind: AssignmentKind,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let (items, total, pages) = match kind {
            AssignmentKind::Lesson => {
                let mut select = Lessons::find();
                if let Some(class_id) = query.class_id {
                    select = select.filter(lessons::Column::ClassId.eq(class_id));
                }
                if let Some(batch_id) = query.batch_id {
                    select = select.filter(lessons::Column::BatchId.eq(batch_id));
                }
                select = select.order_by_desc(lessons::Column::CreatedAt);

                let paginator = select.paginate(&self.db, size);
                let total = paginator.num_items().await.map_err(|e| {
                    TrainSystemError::database_operation(format!("查询任务总数失败: {e}"))
                })?;
                let pages = paginator.num_pages().await.map_err(|e| {
                    TrainSystemError::database_operation(format!("查询任务页数失败: {e}"))
                })?;
                let rows = paginator.fetch_page(page - 1).await.map_err(|e| {
                    TrainSystemError::database_operation(format!("查询任务列表失败: {e}"))
                })?;
                (
                    rows.into_iter()
                        .map(|m| m.into_assignment())
                        .collect::<Vec<_>>(),
                    total,
                    pages,
                )
            }
            AssignmentKind::Challenge => {
                let mut select = Challenges::find();
                if let Some(class_id) = query.class_id {
                    select = select.filter(challenges::Column::ClassId.eq(class_id));
                }
                if let Some(batch_id) = query.batch_id {
                    select = select.filter(challenges::Column::BatchId.eq(batch_id));
                }
                select = select.order_by_desc(challenges::Column::CreatedAt);

                let paginator = select.paginate(&self.db, size);
                let total = paginator.num_items().await.map_err(|e| {
                    TrainSystemError::database_operation(format!("查询任务总数失败: {e}"))
                })?;
                let pages = paginator.num_pages().await.map_err(|e| {
                    TrainSystemError::database_operation(format!("查询任务页数失败: {e}"))
                })?;
                let rows = paginator.fetch_page(page - 1).await.map_err(|e| {
                    TrainSystemError::database_operation(format!("查询任务列表失败: {e}"))
                })?;
                (
                    rows.into_iter()
                        .map(|m| m.into_assignment())
                        .collect::<Vec<_>>(),
                    total,
                    pages,
                )
            }
        };

        Ok(AssignmentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                size: size as i64,
                total: total as i64,
                pages: pages as i64,
            },
        })
    }

    /// 列出某用户所在班级的全部任务
    pub async fn list_assignments_for_user_impl(
        &self,
        kind: AssignmentKind,
        user_id: i64,
    ) -> Result<Vec<Assignment>> {
        // 先取用户所在的班级
        let class_ids: Vec<i64> = crate::entity::prelude::ClassUsers::find()
            .select_only()
            .column(class_users::Column::ClassId)
            .filter(class_users::Column::UserId.eq(user_id))
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询用户班级失败: {e}")))?;

        if class_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = match kind {
            AssignmentKind::Lesson => Lessons::find()
                .filter(lessons::Column::ClassId.is_in(class_ids))
                .order_by_desc(lessons::Column::CreatedAt)
                .all(&self.db)
                .await
                .map(|rows| {
                    rows.into_iter()
                        .map(|m| m.into_assignment())
                        .collect::<Vec<_>>()
                }),
            AssignmentKind::Challenge => Challenges::find()
                .filter(challenges::Column::ClassId.is_in(class_ids))
                .order_by_desc(challenges::Column::CreatedAt)
                .all(&self.db)
                .await
                .map(|rows| {
                    rows.into_iter()
                        .map(|m| m.into_assignment())
                        .collect::<Vec<_>>()
                }),
        };

        result.map_err(|e| TrainSystemError::database_operation(format!("查询任务列表失败: {e}")))
    }

    /// 任务归属导师的展示信息
    pub async fn get_mentor_info_impl(&self, mentor_id: i64) -> Result<Option<MentorInfo>> {
        let result = Users::find_by_id(mentor_id)
            .one(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询导师失败: {e}")))?;

        Ok(result.map(|m| MentorInfo {
            id: m.id,
            full_name: m.full_name,
            nickname: m.nickname,
        }))
    }

    /// 更新任务
    pub async fn update_assignment_impl(
        &self,
        kind: AssignmentKind,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        // 先检查任务是否存在
        let existing = self.get_assignment_by_id_impl(kind, id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let result = match kind {
            AssignmentKind::Lesson => {
                let mut model = lessons::ActiveModel {
                    id: Set(id),
                    updated_at: Set(now),
                    ..Default::default()
                };
                if let Some(title) = update.title {
                    model.title = Set(title);
                }
                if let Some(description) = update.description {
                    model.description = Set(Some(description));
                }
                if let Some(deadline) = update.deadline {
                    model.deadline = Set(Some(deadline.timestamp()));
                }
                model.update(&self.db).await.map(|_| ())
            }
            AssignmentKind::Challenge => {
                let mut model = challenges::ActiveModel {
                    id: Set(id),
                    updated_at: Set(now),
                    ..Default::default()
                };
                if let Some(title) = update.title {
                    model.title = Set(title);
                }
                if let Some(description) = update.description {
                    model.description = Set(Some(description));
                }
                if let Some(deadline) = update.deadline {
                    model.deadline = Set(Some(deadline.timestamp()));
                }
                model.update(&self.db).await.map(|_| ())
            }
        };

        result.map_err(|e| TrainSystemError::database_operation(format!("更新任务失败: {e}")))?;

        self.get_assignment_by_id_impl(kind, id).await
    }

    /// 删除任务
    pub async fn delete_assignment_impl(&self, kind: AssignmentKind, id: i64) -> Result<bool> {
        let result = match kind {
            AssignmentKind::Lesson => Lessons::delete_by_id(id).exec(&self.db).await,
            AssignmentKind::Challenge => Challenges::delete_by_id(id).exec(&self.db).await,
        };

        let result = result
            .map_err(|e| TrainSystemError::database_operation(format!("删除任务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
