pub mod download;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::files::entities::FileOwnerKind;
use crate::storage::Storage;

pub struct FileService {
    storage: Option<Arc<dyn Storage>>,
}

impl FileService {
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

    // 上传文件（按归属类别走各自的大小/类型限制）
    pub async fn handle_upload(
        &self,
        req: &HttpRequest,
        owner_kind: FileOwnerKind,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        upload::handle_upload(self, req, owner_kind, payload).await
    }

    // 下载文件
    pub async fn handle_download(
        &self,
        req: &HttpRequest,
        file_token: String,
    ) -> ActixResult<HttpResponse> {
        download::handle_download(self, req, file_token).await
    }
}
