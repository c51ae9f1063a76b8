pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notes::requests::{CreateNoteRequest, NoteListQuery};
use crate::storage::Storage;

pub struct NoteService {
    storage: Option<Arc<dyn Storage>>,
}

impl NoteService {
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

    // 创建点评
    pub async fn create_note(
        &self,
        req: &HttpRequest,
        note_data: CreateNoteRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_note(self, req, note_data).await
    }

    // 某学员的点评列表
    pub async fn list_notes_for_trainee(
        &self,
        req: &HttpRequest,
        trainee_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_notes_for_trainee(self, req, trainee_id).await
    }

    // 某点评人的点评列表
    pub async fn list_notes_by_grader(
        &self,
        req: &HttpRequest,
        grader_id: i64,
        query: NoteListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_notes_by_grader(self, req, grader_id, query).await
    }

    // 删除点评
    pub async fn delete_note(&self, req: &HttpRequest, note_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_note(self, req, note_id).await
    }
}
