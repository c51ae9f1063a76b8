use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
    error_response,
};
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 根据邮箱获取用户信息
    let user = match storage.get_user_by_email(&login_request.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(error_response(
                ErrorCode::AuthFailed,
                "Email or password is incorrect",
            ));
        }
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            ));
        }
    };

    // 2. 登录端与账号角色必须一致
    if user.role != login_request.role {
        return Ok(error_response(ErrorCode::Forbidden, "Access denied"));
    }

    // 3. 验证密码
    if !verify_password(&login_request.password, &user.password_hash) {
        return Ok(error_response(
            ErrorCode::AuthFailed,
            "Email or password is incorrect",
        ));
    }

    // 4. 生成令牌对
    let token_pair = match user.generate_token_pair() {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            return Ok(error_response(
                ErrorCode::InternalServerError,
                "Login failed, unable to generate token",
            ));
        }
    };

    // 5. 记录登录状态，落库刷新令牌
    if let Err(e) = storage
        .update_login_state(user.id, true, Some(token_pair.refresh_token.clone()))
        .await
    {
        tracing::error!("Failed to persist login state: {}", e);
        return Ok(error_response(
            ErrorCode::InternalServerError,
            "Login failed, unable to persist login state",
        ));
    }
    let _ = storage.update_last_login(user.id).await;

    tracing::info!("User {} logged in successfully", user.email);

    let response = LoginResponse {
        access_token: token_pair.access_token,
        expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
        user,
        created_at: chrono::Utc::now(),
    };

    // 6. 创建 refresh token cookie
    let refresh_cookie = jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie)
        .json(ApiResponse::success(response, "Login successful")))
}
