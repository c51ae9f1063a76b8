//! 文件存储操作

use super::SeaOrmStorage;
use crate::entity::files::{ActiveModel, Column, Entity as Files};
use crate::errors::{Result, TrainSystemError};
use crate::models::files::entities::{File, FileOwnerKind};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 登记上传文件
    pub async fn create_file_impl(&self, file: File) -> Result<File> {
        let model = ActiveModel {
            download_token: Set(file.download_token),
            original_name: Set(file.original_name),
            stored_name: Set(file.stored_name),
            file_size: Set(file.file_size),
            file_type: Set(file.file_type),
            owner_kind: Set(file.owner_kind.to_string()),
            owner_id: Set(file.owner_id),
            user_id: Set(file.user_id),
            uploaded_at: Set(file.uploaded_at.timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("登记文件失败: {e}")))?;

        Ok(result.into_file())
    }

    /// 通过下载 token 获取文件
    pub async fn get_file_by_token_impl(&self, download_token: &str) -> Result<Option<File>> {
        let result = Files::find_by_id(download_token.to_string())
            .one(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询文件失败: {e}")))?;

        Ok(result.map(|m| m.into_file()))
    }

    /// 把一批已上传文件挂载到归属对象
    ///
    /// 仅限上传者本人且类别匹配的文件，挂错类别的 token 被忽略。
    pub async fn attach_files_to_owner_impl(
        &self,
        tokens: &[String],
        owner_kind: FileOwnerKind,
        owner_id: i64,
        user_id: i64,
    ) -> Result<u64> {
        if tokens.is_empty() {
            return Ok(0);
        }

        let result = Files::update_many()
            .col_expr(Column::OwnerId, sea_orm::sea_query::Expr::value(owner_id))
            .filter(Column::DownloadToken.is_in(tokens.to_vec()))
            .filter(Column::OwnerKind.eq(owner_kind.to_string()))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("挂载文件失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 列出归属对象的文件
    pub async fn list_files_for_owner_impl(
        &self,
        owner_kind: FileOwnerKind,
        owner_id: i64,
    ) -> Result<Vec<File>> {
        let models = Files::find()
            .filter(Column::OwnerKind.eq(owner_kind.to_string()))
            .filter(Column::OwnerId.eq(owner_id))
            .order_by_desc(Column::UploadedAt)
            .all(&self.db)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("查询文件列表失败: {e}")))?;

        Ok(models.into_iter().map(|m| m.into_file()).collect())
    }
}
