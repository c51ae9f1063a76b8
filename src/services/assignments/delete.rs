use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::AssignmentKind;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 删除任务
///
/// 导师只能删除自己的任务，管理员不受限。
pub async fn delete_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let kind = service.kind();
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    let assignment = match storage.get_assignment_by_id(kind, assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            let code = match kind {
                AssignmentKind::Lesson => ErrorCode::LessonNotFound,
                AssignmentKind::Challenge => ErrorCode::ChallengeNotFound,
            };
            return Ok(error_response(
                code,
                format!("{} not found", kind.title_noun()),
            ));
        }
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("Failed to fetch {}: {e}", kind.noun()),
            ));
        }
    };

    if current_user.role != UserRole::Admin && assignment.mentor_id != current_user.id {
        return Ok(error_response(
            ErrorCode::Forbidden,
            "You do not have permission to delete this assignment",
        ));
    }

    match storage.delete_assignment(kind, assignment_id).await {
        Ok(true) => {
            info!("{} {} deleted", kind.title_noun(), assignment_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(format!(
                "{} deleted successfully",
                kind.title_noun()
            ))))
        }
        Ok(false) => {
            let code = match kind {
                AssignmentKind::Lesson => ErrorCode::LessonNotFound,
                AssignmentKind::Challenge => ErrorCode::ChallengeNotFound,
            };
            Ok(error_response(
                code,
                format!("{} not found", kind.title_noun()),
            ))
        }
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("Failed to delete {}: {e}", kind.noun()),
        )),
    }
}
