use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::UpdateUserRequest;
use crate::models::{ApiResponse, ErrorCode, error_response};
use crate::services::notifications::notify_user;

/// 更新用户信息
///
/// 本人可改自己的资料字段；角色变更仅管理员可做。
pub async fn update_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
    update_data: UpdateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    if current_user.role != UserRole::Admin {
        if current_user.id != user_id {
            return Ok(error_response(
                ErrorCode::Forbidden,
                "You are not allowed to edit another user",
            ));
        }
        if update_data.role.is_some() {
            return Ok(error_response(
                ErrorCode::Forbidden,
                "Only admins may change user roles",
            ));
        }
    }

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => {
            info!("User {} updated", user_id);

            notify_user(
                &storage,
                user_id,
                "Profile Updated!",
                "Your profile information has been successfully updated.",
                "Profile",
            )
            .await;

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                user,
                "User information updated successfully",
            )))
        }
        Ok(None) => Ok(error_response(ErrorCode::UserNotFound, "User not found")),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("An error occurred while updating user information: {e}"),
        )),
    }
}
