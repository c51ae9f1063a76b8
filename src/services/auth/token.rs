use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::auth::responses::{
    RefreshTokenResponse, TokenVerificationResponse, UserInfoResponse, UserStatusResponse,
};
use crate::models::{ApiResponse, ErrorCode, error_response};
use crate::utils::jwt::{self, JwtUtils};

use super::AuthService;

/// 刷新访问令牌
///
/// 刷新令牌是唯一接受 refresh token 的入口，其余受保护路由
/// 一律使用 access token。令牌需与落库的副本一致；过期的刷新
/// 令牌会先清掉存储的副本（标记为已登出）再返回 401。
pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 从 cookie 中提取 refresh token
    let Some(refresh_token) = jwt::JwtUtils::extract_refresh_token_from_cookie(request) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    match JwtUtils::verify_refresh_token(&refresh_token) {
        Ok(claims) => {
            let user_id = match claims.sub.parse::<i64>() {
                Ok(id) => id,
                Err(_) => {
                    return Ok(error_response(ErrorCode::InvalidToken, "Invalid token"));
                }
            };

            // 与落库的刷新令牌比对，注销过的令牌不再可用
            let user = match storage.get_user_by_id(user_id).await {
                Ok(Some(user)) => user,
                Ok(None) => {
                    return Ok(error_response(
                        ErrorCode::Unauthorized,
                        "Invalid refresh token",
                    ));
                }
                Err(e) => {
                    return Ok(error_response(
                        ErrorCode::InternalServerError,
                        format!("Token refresh failed: {e}"),
                    ));
                }
            };

            if user.refresh_token.as_deref() != Some(refresh_token.as_str()) {
                return Ok(error_response(
                    ErrorCode::Unauthorized,
                    "Invalid refresh token",
                ));
            }

            match JwtUtils::generate_access_token(user.id, &user.role.to_string()) {
                Ok(new_access_token) => {
                    let response = RefreshTokenResponse {
                        access_token: new_access_token,
                        expires_in: config.jwt.access_token_expiry * 60,
                    };
                    Ok(HttpResponse::Ok().json(ApiResponse::success(
                        response,
                        "Token refreshed successfully",
                    )))
                }
                Err(e) => {
                    tracing::error!("Refresh token failed: {}", e);
                    Ok(error_response(
                        ErrorCode::InternalServerError,
                        "Token refresh failed",
                    ))
                }
            }
        }
        Err(e) if JwtUtils::is_expired_error(&e) => {
            // 过期的刷新令牌：尽力清掉落库的副本后返回 401
            if let Ok(claims) = JwtUtils::decode_token_allow_expired(&refresh_token)
                && let Ok(user_id) = claims.sub.parse::<i64>()
            {
                let _ = storage.update_login_state(user_id, false, None).await;
            }

            let empty_cookie = jwt::JwtUtils::create_empty_refresh_token_cookie();
            Ok(HttpResponse::Unauthorized().cookie(empty_cookie).json(
                ApiResponse::<()>::error_empty(
                    ErrorCode::TokenExpired,
                    "Refresh token has expired, please login again",
                ),
            ))
        }
        Err(e) => {
            tracing::info!("Refresh token validation failed: {}", e);

            // 清除无效的 refresh token cookie
            let empty_cookie = jwt::JwtUtils::create_empty_refresh_token_cookie();
            Ok(HttpResponse::Unauthorized().cookie(empty_cookie).json(
                ApiResponse::<()>::error_empty(
                    ErrorCode::Unauthorized,
                    "Login expired or invalid, please login again",
                ),
            ))
        }
    }
}

pub async fn handle_verify_token(
    _service: &AuthService,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TokenVerificationResponse { is_valid: true },
        "Token is valid",
    )))
}

pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "User information retrieved successfully",
        ))),
        None => Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )),
    }
}

pub async fn handle_get_status(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserStatusResponse {
                status: user.status.to_string(),
            },
            "查询成功",
        ))),
        None => Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )),
    }
}
