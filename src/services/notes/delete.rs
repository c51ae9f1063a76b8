use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::NoteService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 删除点评
///
/// 仅点评人本人或管理员可删。
pub async fn delete_note(
    service: &NoteService,
    request: &HttpRequest,
    note_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    let note = match storage.get_note_by_id(note_id).await {
        Ok(Some(note)) => note,
        Ok(None) => {
            return Ok(error_response(ErrorCode::NoteNotFound, "Note not found"));
        }
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("查询点评失败: {e}"),
            ));
        }
    };

    if current_user.role != UserRole::Admin && note.grader_id != current_user.id {
        return Ok(error_response(
            ErrorCode::Forbidden,
            "You are not authorized to delete this note",
        ));
    }

    match storage.delete_note(note_id).await {
        Ok(true) => {
            info!("Note {} deleted by user {}", note_id, current_user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Note deleted successfully")))
        }
        Ok(false) => Ok(error_response(ErrorCode::NoteNotFound, "Note not found")),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("删除点评失败: {e}"),
        )),
    }
}
