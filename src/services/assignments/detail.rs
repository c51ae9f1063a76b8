use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::entities::AssignmentKind;
use crate::models::assignments::responses::AssignmentDetailResponse;
use crate::models::files::entities::FileOwnerKind;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 任务详情（含导师展示信息与附件）
pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let kind = service.kind();
    let storage = service.get_storage(request);

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

    let mentor = match storage.get_mentor_info(assignment.mentor_id).await {
        Ok(mentor) => mentor,
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("查询导师失败: {e}"),
            ));
        }
    };

    let owner_kind = match kind {
        AssignmentKind::Lesson => FileOwnerKind::Lesson,
        AssignmentKind::Challenge => FileOwnerKind::Challenge,
    };
    let files = match storage.list_files_for_owner(owner_kind, assignment.id).await {
        Ok(files) => files,
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("查询附件失败: {e}"),
            ));
        }
    };

    let response = AssignmentDetailResponse {
        assignment,
        mentor,
        files,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
