pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::entities::AssignmentKind;
use crate::models::assignments::requests::{
    AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::storage::Storage;

/// 课程任务与实战挑战共用的服务，按 kind 区分
pub struct AssignmentService {
    kind: AssignmentKind,
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
    pub fn new_lazy(kind: AssignmentKind) -> Self {
        Self {
            kind,
            storage: None,
        }
    }

    pub(crate) fn kind(&self) -> AssignmentKind {
        self.kind
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

    // 创建任务
    pub async fn create_assignment(
        &self,
        req: &HttpRequest,
        body: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, req, body).await
    }

    // 任务列表
    pub async fn list_assignments(
        &self,
        req: &HttpRequest,
        query: AssignmentListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(self, req, query).await
    }

    // 任务详情
    pub async fn get_assignment(
        &self,
        req: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_assignment(self, req, assignment_id).await
    }

    // 更新任务
    pub async fn update_assignment(
        &self,
        req: &HttpRequest,
        assignment_id: i64,
        body: UpdateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_assignment(self, req, assignment_id, body).await
    }

    // 删除任务
    pub async fn delete_assignment(
        &self,
        req: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, req, assignment_id).await
    }
}
