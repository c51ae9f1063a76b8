use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::TrainSystemError;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode, error_response};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password};

use super::AuthService;

/// 学员自助注册
///
/// 自助注册只开放学员角色，导师/考核官/管理员由管理员创建。
pub async fn handle_register(
    service: &AuthService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if user_data.role != UserRole::Trainee {
        return Ok(error_response(
            ErrorCode::InvalidRole,
            "Self-registration is only available for trainees",
        ));
    }

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

    // 哈希密码后才落库
    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Failed to hash password: {}", e);
            return Ok(error_response(
                ErrorCode::InternalServerError,
                "Registration failed",
            ));
        }
    };

    match storage.create_user(user_data).await {
        Ok(user) => {
            tracing::info!("User {} registered successfully", user.email);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "Registration successful")))
        }
        Err(TrainSystemError::Conflict(_)) => Ok(error_response(
            ErrorCode::UserAlreadyExists,
            "User already exists.",
        )),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("Registration failed: {e}"),
        )),
    }
}
