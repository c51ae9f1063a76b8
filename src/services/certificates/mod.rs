pub mod get;
pub mod issue;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct CertificateService {
    storage: Option<Arc<dyn Storage>>,
}

impl CertificateService {
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

    // 证书列表
    pub async fn list_certificates(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_certificates(self, req).await
    }

    // 证书详情
    pub async fn get_certificate(
        &self,
        req: &HttpRequest,
        certificate_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_certificate(self, req, certificate_id).await
    }

    // 某学员的证书
    pub async fn list_certificates_for_user(
        &self,
        req: &HttpRequest,
        trainee_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_certificates_for_user(self, req, trainee_id).await
    }
}
