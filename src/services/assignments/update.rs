use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::AssignmentKind;
use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 更新任务
///
/// 导师只能更新自己的任务，管理员不受限。
pub async fn update_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    body: UpdateAssignmentRequest,
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
            "You do not have permission to update this assignment",
        ));
    }

    match storage.update_assignment(kind, assignment_id, body).await {
        Ok(Some(updated)) => {
            info!("{} {} updated", kind.title_noun(), assignment_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                updated,
                format!("{} updated successfully", kind.title_noun()),
            )))
        }
        Ok(None) => {
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
            format!("Failed to update {}: {e}", kind.noun()),
        )),
    }
}
