//! 证书存储操作
//!
//! "至多一张"不靠先查后插，而是直接插入并依赖
//! (trainee_id, class_id) 唯一约束；冲突即"已签发"。

use super::SeaOrmStorage;
use crate::entity::certificates::{ActiveModel, Column, Entity as Certificates};
use crate::entity::prelude::{Classes, Users};
use crate::errors::{Result, TrainSystemError};
use crate::models::certificates::{
    entities::{Certificate, CertificateIssue},
    responses::CertificateDetailResponse,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, SqlErr, Set};

impl SeaOrmStorage {
    /// 尝试签发证书
    ///
    /// 唯一约束冲突被当作"已签发"信号：并发的两次合格提交
    /// 最多落库一张证书，输掉的一方拿到 AlreadyIssued。
    pub async fn insert_certificate_impl(
        &self,
        trainee_id: i64,
        class_id: i64,
    ) -> Result<CertificateIssue> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            trainee_id: Set(trainee_id),
            class_id: Set(class_id),
            status: Set(Certificate::STATUS_ISSUED.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(result) => Ok(CertificateIssue::Created(result.into_certificate())),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    let existing = self
                        .get_certificate_by_pair(trainee_id, class_id)
                        .await?
                        .ok_or_else(|| {
                            TrainSystemError::database_operation(
                                "唯一约束冲突但证书查询为空".to_string(),
                            )
                        })?;
                    Ok(CertificateIssue::AlreadyIssued(existing))
                }
                _ => Err(TrainSystemError::database_operation(format!(
                    "签发证书失败: {e}"
                ))),
            },
        }
    }

    /// 按 (学员, 班级) 获取证书
    async fn get_certificate_by_pair(
        &self,
        trainee_id: i64,
        class_id: i64,
    ) -> Result<Option<Certificate>> {
        let result = Certificates::find()
            .filter(Column::TraineeId.eq(trainee_id))
            .filter(Column::ClassId.eq(class_id))
            .one(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询证书失败: {e}")))?;

        Ok(result.map(|m| m.into_certificate()))
    }

    /// 组装证书详情（学员/班级/批次展示字段）
    async fn build_certificate_detail(
        &self,
        certificate: Certificate,
    ) -> Result<CertificateDetailResponse> {
        let trainee = Users::find_by_id(certificate.trainee_id)
            .one(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询学员失败: {e}")))?;

        let class = Classes::find_by_id(certificate.class_id)
            .one(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询班级失败: {e}")))?;

        // 班级挂载的第一个批次作为证书展示的批次
        let batch = match &class {
            Some(class_model) => {
                let link = crate::entity::prelude::BatchClasses::find()
                    .filter(crate::entity::batch_classes::Column::ClassId.eq(class_model.id))
                    .one(&self.db)
                    .await
                    .map_err(|e| {
                        TrainSystemError::database_operation(format!("查询班级批次失败: {e}"))
                    })?;
                match link {
                    Some(link) => crate::entity::prelude::Batches::find_by_id(link.batch_id)
                        .one(&self.db)
                        .await
                        .map_err(|e| {
                            TrainSystemError::database_operation(format!("查询批次失败: {e}"))
                        })?,
                    None => None,
                }
            }
            None => None,
        };

        Ok(CertificateDetailResponse {
            certificate,
            trainee_name: trainee.and_then(|t| t.full_name),
            class_name: class.map(|c| c.class_name),
            batch_num: batch.as_ref().map(|b| b.batch_num),
            batch_title: batch.map(|b| b.title),
        })
    }

    /// 通过 ID 获取证书详情
    pub async fn get_certificate_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<CertificateDetailResponse>> {
        let result = Certificates::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询证书失败: {e}")))?;

        match result {
            Some(model) => {
                let detail = self
                    .build_certificate_detail(model.into_certificate())
                    .await?;
                Ok(Some(detail))
            }
            None => Ok(None),
        }
    }

    /// 列出全部证书详情
    pub async fn list_certificates_impl(&self) -> Result<Vec<CertificateDetailResponse>> {
        let models = Certificates::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询证书列表失败: {e}")))?;

        let mut details = Vec::with_capacity(models.len());
        for model in models {
            details.push(
                self.build_certificate_detail(model.into_certificate())
                    .await?,
            );
        }

        Ok(details)
    }

    /// 列出某学员的证书
    pub async fn list_certificates_for_user_impl(
        &self,
        trainee_id: i64,
    ) -> Result<Vec<Certificate>> {
        let models = Certificates::find()
            .filter(Column::TraineeId.eq(trainee_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询学员证书失败: {e}")))?;

        Ok(models.into_iter().map(|m| m.into_certificate()).collect())
    }
}
