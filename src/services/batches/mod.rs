pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::batches::requests::{BatchListQuery, CreateBatchRequest, UpdateBatchRequest};
use crate::storage::Storage;

pub struct BatchService {
    storage: Option<Arc<dyn Storage>>,
}

impl BatchService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建批次
    pub async fn create_batch(
        &self,
        req: &HttpRequest,
        batch_data: CreateBatchRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_batch(self, req, batch_data).await
    }

    // 批次列表
    pub async fn list_batches(
        &self,
        req: &HttpRequest,
        query: BatchListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_batches(self, req, query).await
    }

    // 批次详情
    pub async fn get_batch(&self, req: &HttpRequest, batch_id: i64) -> ActixResult<HttpResponse> {
        get::get_batch(self, req, batch_id).await
    }

    // 更新批次
    pub async fn update_batch(
        &self,
        req: &HttpRequest,
        batch_id: i64,
        update_data: UpdateBatchRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_batch(self, req, batch_id, update_data).await
    }

    // 删除批次
    pub async fn delete_batch(
        &self,
        req: &HttpRequest,
        batch_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_batch(self, req, batch_id).await
    }
}
