pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod members;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::{
    AddClassUsersRequest, AssignMentorsRequest, ClassListQuery, CreateClassRequest,
    UpdateClassRequest,
};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
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

    // 创建班级
    pub async fn create_class(
        &self,
        req: &HttpRequest,
        class_data: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, req, class_data).await
    }

    // 班级列表
    pub async fn list_classes(
        &self,
        req: &HttpRequest,
        query: ClassListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_classes(self, req, query).await
    }

    // 班级详情
    pub async fn get_class(&self, req: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        get::get_class(self, req, class_id).await
    }

    // 更新班级
    pub async fn update_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
        update_data: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, req, class_id, update_data).await
    }

    // 删除班级
    pub async fn delete_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class(self, req, class_id).await
    }

    // 添加班级学员
    pub async fn add_class_users(
        &self,
        req: &HttpRequest,
        class_id: i64,
        body: AddClassUsersRequest,
    ) -> ActixResult<HttpResponse> {
        members::add_class_users(self, req, class_id, body).await
    }

    // 指派班级导师
    pub async fn assign_mentors(
        &self,
        req: &HttpRequest,
        class_id: i64,
        body: AssignMentorsRequest,
    ) -> ActixResult<HttpResponse> {
        members::assign_mentors(self, req, class_id, body).await
    }
}
