use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::files::entities::FileOwnerKind;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, error_response};
use crate::models::assignments::entities::AssignmentKind;

/// 创建任务（导师 / 管理员）
///
/// 导师只能以自己的名义创建；管理员可为任意导师创建。
pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    mut body: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let kind = service.kind();
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    if body.title.trim().is_empty() {
        return Ok(error_response(ErrorCode::Validation, "title is required"));
    }

    // 归属导师：导师本人，或管理员指定
    match current_user.role {
        UserRole::Mentor => {
            if body.mentor_id.is_some() && body.mentor_id != Some(current_user.id) {
                return Ok(error_response(
                    ErrorCode::Forbidden,
                    "You do not have permission to create an assignment for another mentor",
                ));
            }
            body.mentor_id = Some(current_user.id);
        }
        UserRole::Admin => {
            let mentor_id = body.mentor_id.unwrap_or(current_user.id);
            body.mentor_id = Some(mentor_id);
        }
        _ => {
            return Ok(error_response(ErrorCode::Forbidden, "Access denied."));
        }
    }

    // 班级与批次必须存在
    match storage.get_class_by_id(body.class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(error_response(ErrorCode::ClassNotFound, "Class not found"));
        }
        Err(e) => {
            error!("Failed to get class by id: {}", e);
            return Ok(error_response(
                ErrorCode::InternalServerError,
                "Internal server error while fetching class",
            ));
        }
    }
    match storage.get_batch_by_id(body.batch_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(error_response(ErrorCode::BatchNotFound, "Batch not found"));
        }
        Err(e) => {
            error!("Failed to get batch by id: {}", e);
            return Ok(error_response(
                ErrorCode::InternalServerError,
                "Internal server error while fetching batch",
            ));
        }
    }

    let file_tokens = std::mem::take(&mut body.file_tokens);
    let uploader_id = current_user.id;

    let assignment = match storage.create_assignment(kind, body).await {
        Ok(assignment) => assignment,
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("Failed to create {}: {e}", kind.noun()),
            ));
        }
    };

    // 挂载任务附件
    if !file_tokens.is_empty() {
        let owner_kind = match kind {
            AssignmentKind::Lesson => FileOwnerKind::Lesson,
            AssignmentKind::Challenge => FileOwnerKind::Challenge,
        };
        if let Err(e) = storage
            .attach_files_to_owner(&file_tokens, owner_kind, assignment.id, uploader_id)
            .await
        {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("Failed to attach files: {e}"),
            ));
        }
    }

    info!(
        "{} {} created by user {}",
        kind.title_noun(),
        assignment.id,
        uploader_id
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(
        assignment,
        format!("{} created successfully", kind.title_noun()),
    )))
}
