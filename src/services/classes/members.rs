use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::models::classes::requests::{AddClassUsersRequest, AssignMentorsRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 添加班级学员（管理员）
pub async fn add_class_users(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    body: AddClassUsersRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if body.user_ids.is_empty() {
        return Ok(error_response(ErrorCode::Validation, "user_ids is required"));
    }

    // 班级必须存在
    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(error_response(ErrorCode::ClassNotFound, "Class not found"));
        }
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("查询班级失败: {e}"),
            ));
        }
    }

    // 成员必须存在
    for user_id in &body.user_ids {
        match storage.get_user_by_id(*user_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(error_response(ErrorCode::UserNotFound, "User not found"));
            }
            Err(e) => {
                return Ok(error_response(
                    ErrorCode::InternalServerError,
                    format!("查询用户失败: {e}"),
                ));
            }
        }
    }

    match storage.add_class_users(class_id, &body.user_ids).await {
        Ok(added) => {
            info!("Added {} user(s) to class {}", added, class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                serde_json::json!({ "added": added }),
                "Class members updated successfully",
            )))
        }
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("添加班级学员失败: {e}"),
        )),
    }
}

/// 指派班级导师（管理员）
pub async fn assign_mentors(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    body: AssignMentorsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if body.mentor_ids.is_empty() {
        return Ok(error_response(
            ErrorCode::Validation,
            "mentor_ids is required",
        ));
    }

    // 班级必须存在
    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(error_response(ErrorCode::ClassNotFound, "Class not found"));
        }
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("查询班级失败: {e}"),
            ));
        }
    }

    // 被指派者必须确实是导师角色
    for mentor_id in &body.mentor_ids {
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
                return Ok(error_response(
                    ErrorCode::InternalServerError,
                    format!("查询用户失败: {e}"),
                ));
            }
        }
    }

    match storage.assign_class_mentors(class_id, &body.mentor_ids).await {
        Ok(assigned) => {
            info!("Assigned {} mentor(s) to class {}", assigned, class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                serde_json::json!({ "assigned": assigned }),
                "Class mentors updated successfully",
            )))
        }
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("指派班级导师失败: {e}"),
        )),
    }
}
