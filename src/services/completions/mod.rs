pub mod percentage;
pub mod record;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::entities::AssignmentKind;
use crate::models::completions::requests::{PercentageQuery, RecordCompletionRequest};
use crate::storage::Storage;

pub struct CompletionService {
    storage: Option<Arc<dyn Storage>>,
}

impl CompletionService {
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

    // 提交完成（课程任务或实战挑战）
    pub async fn record_completion(
        &self,
        req: &HttpRequest,
        kind: AssignmentKind,
        assignment_id: i64,
        body: RecordCompletionRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_completion(self, req, kind, assignment_id, body).await
    }

    // 完成率查询
    pub async fn get_percentage(
        &self,
        req: &HttpRequest,
        query: PercentageQuery,
    ) -> ActixResult<HttpResponse> {
        percentage::get_percentage(self, req, query).await
    }
}
