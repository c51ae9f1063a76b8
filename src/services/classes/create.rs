use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 创建班级（管理员）
///
/// 创建时可直接挂批次与指派导师；被指派者必须确实是导师角色。
pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if class_data.class_name.trim().is_empty() {
        return Ok(error_response(
            ErrorCode::Validation,
            "class_name is required",
        ));
    }

    // 校验批次存在
    for batch_id in &class_data.batch_ids {
        match storage.get_batch_by_id(*batch_id).await {
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
    }

    // 校验导师角色
    for mentor_id in &class_data.mentor_ids {
        match storage.get_user_by_id(*mentor_id).await {
            Ok(Some(user)) if user.role == UserRole::Mentor => {}
            Ok(Some(_)) => {
                return Ok(error_response(
                    ErrorCode::Validation,
                    "Assigned mentors must have the mentor role",
                ));
            }
            Ok(None) => {
                return Ok(error_response(ErrorCode::UserNotFound, "Mentor not found"));
            }
            Err(e) => {
                error!("Failed to get user by id: {}", e);
                return Ok(error_response(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching mentor",
                ));
            }
        }
    }

    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {} created successfully", class.class_name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(class, "Class created successfully")))
        }
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("Class creation failed: {e}"),
        )),
    }
}
