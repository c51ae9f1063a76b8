//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::batch_classes;
use crate::entity::class_mentors;
use crate::entity::class_users;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::entity::prelude::{BatchClasses, Batches, ClassMentors, ClassUsers, Users};
use crate::errors::{Result, TrainSystemError};
use crate::models::{
    PaginationInfo,
    classes::{
        entities::{Class, ClassMember},
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::{ClassDetailResponse, ClassListResponse},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 统计班级参与人数（每次读取重新计算的冗余字段）
    async fn count_participants(&self, class_id: i64) -> Result<i64> {
        let count = ClassUsers::find()
            .filter(class_users::Column::ClassId.eq(class_id))
            .count(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("统计班级人数失败: {e}")))?;

        Ok(count as i64)
    }

    /// 创建班级，可同时挂批次与指派导师
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_name: Set(req.class_name),
            status: Set(req.status.unwrap_or_else(|| "Ongoing".to_string())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("创建班级失败: {e}")))?;

        // 挂载批次
        for batch_id in &req.batch_ids {
            let link = batch_classes::ActiveModel {
                batch_id: Set(*batch_id),
                class_id: Set(result.id),
                ..Default::default()
            };
            link.insert(&self.db).await.map_err(|e| {
                TrainSystemError::database_operation(format!("挂载批次失败: {e}"))
            })?;
        }

        // 指派导师
        if !req.mentor_ids.is_empty() {
            self.assign_class_mentors_impl(result.id, &req.mentor_ids)
                .await?;
        }

        Ok(result.into_class(0))
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询班级失败: {e}")))?;

        match result {
            Some(model) => {
                let participant_count = self.count_participants(class_id).await?;
                Ok(Some(model.into_class(participant_count)))
            }
            None => Ok(None),
        }
    }

    /// 班级详情：批次、导师、学员
    pub async fn get_class_detail_impl(
        &self,
        class_id: i64,
    ) -> Result<Option<ClassDetailResponse>> {
        let Some(class) = self.get_class_by_id_impl(class_id).await? else {
            return Ok(None);
        };

        // 关联批次
        let batch_ids: Vec<i64> = BatchClasses::find()
            .filter(batch_classes::Column::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询班级批次失败: {e}")))?
            .into_iter()
            .map(|m| m.batch_id)
            .collect();

        let batches = if batch_ids.is_empty() {
            Vec::new()
        } else {
            Batches::find()
                .filter(crate::entity::batches::Column::Id.is_in(batch_ids))
                .all(&self.db)
                .await
                .map_err(|e| TrainSystemError::database_operation(format!("查询批次失败: {e}")))?
                .into_iter()
                .map(|m| m.into_batch())
                .collect()
        };

        // 导师
        let mentor_ids: Vec<i64> = ClassMentors::find()
            .filter(class_mentors::Column::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询班级导师失败: {e}")))?
            .into_iter()
            .map(|m| m.mentor_id)
            .collect();

        let mentors = self.load_class_members(&mentor_ids).await?;

        // 学员
        let user_ids: Vec<i64> = ClassUsers::find()
            .filter(class_users::Column::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询班级学员失败: {e}")))?
            .into_iter()
            .map(|m| m.user_id)
            .collect();

        let participants = self.load_class_members(&user_ids).await?;

        Ok(Some(ClassDetailResponse {
            class,
            batches,
            mentors,
            participants,
        }))
    }

    async fn load_class_members(&self, user_ids: &[i64]) -> Result<Vec<ClassMember>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = Users::find()
            .filter(crate::entity::users::Column::Id.is_in(user_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询成员失败: {e}")))?;

        Ok(users
            .into_iter()
            .map(|m| ClassMember {
                id: m.id,
                full_name: m.full_name,
                nickname: m.nickname,
                email: m.email,
            })
            .collect())
    }

    /// 分页列出班级（支持按批次/导师/学员过滤）
    pub async fn list_classes_with_pagination_impl(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Classes::find();

        // 批次筛选
        if let Some(batch_id) = query.batch_id {
            let ids = BatchClasses::find()
                .select_only()
                .column(batch_classes::Column::ClassId)
                .filter(batch_classes::Column::BatchId.eq(batch_id))
                .into_tuple::<i64>()
                .all(&self.db)
                .await
                .map_err(|e| {
                    TrainSystemError::database_operation(format!("查询批次班级失败: {e}"))
                })?;
            select = select.filter(Column::Id.is_in(ids));
        }

        // 导师筛选
        if let Some(mentor_id) = query.mentor_id {
            let ids = ClassMentors::find()
                .select_only()
                .column(class_mentors::Column::ClassId)
                .filter(class_mentors::Column::MentorId.eq(mentor_id))
                .into_tuple::<i64>()
                .all(&self.db)
                .await
                .map_err(|e| {
                    TrainSystemError::database_operation(format!("查询导师班级失败: {e}"))
                })?;
            select = select.filter(Column::Id.is_in(ids));
        }

        // 学员筛选
        if let Some(user_id) = query.user_id {
            let ids = ClassUsers::find()
                .select_only()
                .column(class_users::Column::ClassId)
                .filter(class_users::Column::UserId.eq(user_id))
                .into_tuple::<i64>()
                .all(&self.db)
                .await
                .map_err(|e| {
                    TrainSystemError::database_operation(format!("查询学员班级失败: {e}"))
                })?;
            select = select.filter(Column::Id.is_in(ids));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::ClassName.contains(&escaped));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询班级总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询班级页数失败: {e}")))?;

        let classes = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询班级列表失败: {e}")))?;

        let mut items = Vec::with_capacity(classes.len());
        for model in classes {
            let participant_count = self.count_participants(model.id).await?;
            items.push(model.into_class(participant_count));
        }

        Ok(ClassListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                size: size as i64,
                total: total as i64,
                pages: pages as i64,
            },
        })
    }

    /// 更新班级信息
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        // 先检查班级是否存在
        let existing = self.get_class_by_id_impl(class_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(class_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(class_name) = update.class_name {
            model.class_name = Set(class_name);
        }
        if let Some(status) = update.status {
            model.status = Set(status);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_class_by_id_impl(class_id).await
    }

    /// 删除班级
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 添加班级学员，重复成员静默跳过
    pub async fn add_class_users_impl(&self, class_id: i64, user_ids: &[i64]) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();
        let mut added = 0u64;

        for user_id in user_ids {
            let exists = ClassUsers::find()
                .filter(class_users::Column::ClassId.eq(class_id))
                .filter(class_users::Column::UserId.eq(*user_id))
                .one(&self.db)
                .await
                .map_err(|e| {
                    TrainSystemError::database_operation(format!("查询班级成员失败: {e}"))
                })?;

            if exists.is_some() {
                continue;
            }

            let link = class_users::ActiveModel {
                class_id: Set(class_id),
                user_id: Set(*user_id),
                joined_at: Set(now),
                ..Default::default()
            };
            link.insert(&self.db).await.map_err(|e| {
                TrainSystemError::database_operation(format!("添加班级学员失败: {e}"))
            })?;
            added += 1;
        }

        Ok(added)
    }

    /// 指派班级导师，重复指派静默跳过
    pub async fn assign_class_mentors_impl(
        &self,
        class_id: i64,
        mentor_ids: &[i64],
    ) -> Result<u64> {
        let mut assigned = 0u64;

        for mentor_id in mentor_ids {
            let exists = ClassMentors::find()
                .filter(class_mentors::Column::ClassId.eq(class_id))
                .filter(class_mentors::Column::MentorId.eq(*mentor_id))
                .one(&self.db)
                .await
                .map_err(|e| {
                    TrainSystemError::database_operation(format!("查询班级导师失败: {e}"))
                })?;

            if exists.is_some() {
                continue;
            }

            let link = class_mentors::ActiveModel {
                class_id: Set(class_id),
                mentor_id: Set(*mentor_id),
                ..Default::default()
            };
            link.insert(&self.db).await.map_err(|e| {
                TrainSystemError::database_operation(format!("指派班级导师失败: {e}"))
            })?;
            assigned += 1;
        }

        Ok(assigned)
    }

    /// 判断用户是否为班级学员
    pub async fn is_class_member_impl(&self, class_id: i64, user_id: i64) -> Result<bool> {
        let exists = ClassUsers::find()
            .filter(class_users::Column::ClassId.eq(class_id))
            .filter(class_users::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询班级成员失败: {e}")))?;

        Ok(exists.is_some())
    }
}
