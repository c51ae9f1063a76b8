use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::errors::TrainSystemError;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode, error_response};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password};

/// 创建用户（管理员）
///
/// 任意角色均可创建；邮箱重复按历史契约返回 400。
pub async fn create_user(
    service: &UserService,
    request: &HttpRequest,
    mut user_data: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(error_response(ErrorCode::Validation, msg));
    }

    let password_check = validate_password(&user_data.password);
    if !password_check.is_valid {
        return Ok(error_response(
            ErrorCode::Validation,
            password_check.error_message(),
        ));
    }

    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Failed to hash password: {}", e);
            return Ok(error_response(
                ErrorCode::InternalServerError,
                "User creation failed",
            ));
        }
    };

    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("User {} created successfully", user.email);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(user, "User created successfully.")))
        }
        Err(TrainSystemError::Conflict(_)) => Ok(error_response(
            ErrorCode::UserAlreadyExists,
            "User already exists.",
        )),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("An error occurred while creating the user: {e}"),
        )),
    }
}
