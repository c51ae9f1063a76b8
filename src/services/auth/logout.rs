use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::LogoutRequest;
use crate::models::{ApiResponse, ErrorCode, error_response};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

/// 注销
///
/// 过期的访问令牌仍然会完成清理（登录状态与刷新令牌落库清空），
/// 只是响应为 401，提示客户端重新登录。
pub async fn handle_logout(
    service: &AuthService,
    logout_request: LogoutRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 先按正常路径校验；失败再区分"过期"与"非法"
    match JwtUtils::verify_access_token(&logout_request.access_token) {
        Ok(claims) => {
            let user_id = match claims.sub.parse::<i64>() {
                Ok(id) => id,
                Err(_) => {
                    return Ok(error_response(ErrorCode::InvalidToken, "Invalid token"));
                }
            };

            if let Err(e) = storage.update_login_state(user_id, false, None).await {
                return Ok(error_response(
                    ErrorCode::InternalServerError,
                    format!("Logout failed: {e}"),
                ));
            }

            let empty_cookie = JwtUtils::create_empty_refresh_token_cookie();
            Ok(HttpResponse::Ok()
                .cookie(empty_cookie)
                .json(ApiResponse::success_empty("Logout successful")))
        }
        Err(e) if JwtUtils::is_expired_error(&e) => {
            // 令牌已过期：尽力清理后返回 401
            if let Ok(claims) = JwtUtils::decode_token_allow_expired(&logout_request.access_token)
                && let Ok(user_id) = claims.sub.parse::<i64>()
            {
                let _ = storage.update_login_state(user_id, false, None).await;
            }

            let empty_cookie = JwtUtils::create_empty_refresh_token_cookie();
            Ok(HttpResponse::Unauthorized().cookie(empty_cookie).json(
                ApiResponse::<()>::error_empty(ErrorCode::TokenExpired, "Token already expired"),
            ))
        }
        Err(_) => Ok(error_response(ErrorCode::InvalidToken, "Invalid token")),
    }
}
