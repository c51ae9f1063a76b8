//! 培训批次存储操作

use super::SeaOrmStorage;
use crate::entity::batches::{ActiveModel, Column, Entity as Batches};
use crate::errors::{Result, TrainSystemError};
use crate::models::{
    PaginationInfo,
    batches::{
        entities::Batch,
        requests::{BatchListQuery, CreateBatchRequest, UpdateBatchRequest},
        responses::BatchListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, SqlErr, Set,
};

impl SeaOrmStorage {
    /// 创建批次
    ///
    /// batch_num 唯一约束冲突转为 Conflict 错误，插入失败时不会留下
    /// 半成品记录（单条 INSERT，由数据库保证原子性）。
    pub async fn create_batch_impl(&self, req: CreateBatchRequest) -> Result<Batch> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            batch_num: Set(req.batch_num),
            title: Set(req.title),
            description: Set(req.description),
            start_date: Set(req.start_date.timestamp()),
            end_date: Set(req.end_date.timestamp()),
            status: Set(req.status),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(result) => Ok(result.into_batch()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(TrainSystemError::conflict("Batch number already taken"))
                }
                _ => Err(TrainSystemError::database_operation(format!(
                    "创建批次失败: {e}"
                ))),
            },
        }
    }

    /// 通过 ID 获取批次
    pub async fn get_batch_by_id_impl(&self, batch_id: i64) -> Result<Option<Batch>> {
        let result = Batches::find_by_id(batch_id)
            .one(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询批次失败: {e}")))?;

        Ok(result.map(|m| m.into_batch()))
    }

    /// 分页列出批次
    pub async fn list_batches_with_pagination_impl(
        &self,
        query: BatchListQuery,
    ) -> Result<BatchListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Batches::find();

        // 学员筛选：经由 class_users -> batch_classes 两层关联
        if let Some(user_id) = query.user_id {
            let class_ids: Vec<i64> = crate::entity::prelude::ClassUsers::find()
                .select_only()
                .column(crate::entity::class_users::Column::ClassId)
                .filter(crate::entity::class_users::Column::UserId.eq(user_id))
                .into_tuple::<i64>()
                .all(&self.db)
                .await
                .map_err(|e| {
                    TrainSystemError::database_operation(format!("查询学员班级失败: {e}"))
                })?;

            let batch_ids: Vec<i64> = crate::entity::prelude::BatchClasses::find()
                .select_only()
                .column(crate::entity::batch_classes::Column::BatchId)
                .filter(crate::entity::batch_classes::Column::ClassId.is_in(class_ids))
                .into_tuple::<i64>()
                .all(&self.db)
                .await
                .map_err(|e| {
                    TrainSystemError::database_operation(format!("查询班级批次失败: {e}"))
                })?;

            select = select.filter(Column::Id.is_in(batch_ids));
        }

        // 状态筛选
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        // 排序：批次号倒序
        select = select.order_by_desc(Column::BatchNum);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询批次总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询批次页数失败: {e}")))?;

        let batches = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询批次列表失败: {e}")))?;

        Ok(BatchListResponse {
            items: batches.into_iter().map(|m| m.into_batch()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                size: size as i64,
                total: total as i64,
                pages: pages as i64,
            },
        })
    }

    /// 更新批次
    pub async fn update_batch_impl(
        &self,
        batch_id: i64,
        update: UpdateBatchRequest,
    ) -> Result<Option<Batch>> {
        // 先检查批次是否存在
        let existing = self.get_batch_by_id_impl(batch_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(batch_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date.timestamp());
        }
        if let Some(end_date) = update.end_date {
            model.end_date = Set(end_date.timestamp());
        }
        if let Some(status) = update.status {
            model.status = Set(status);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("更新批次失败: {e}")))?;

        self.get_batch_by_id_impl(batch_id).await
    }

    /// 删除批次
    pub async fn delete_batch_impl(&self, batch_id: i64) -> Result<bool> {
        let result = Batches::delete_by_id(batch_id)
            .exec(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("删除批次失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
