use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::users::responses::PublicUserResponse;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 用户公开信息（仅展示字段）
pub async fn get_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => {
            let response = PublicUserResponse {
                id: user.id,
                full_name: user.profile.full_name,
                nickname: user.profile.nickname,
                email: user.email,
                github: user.profile.github,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
        }
        Ok(None) => Ok(error_response(ErrorCode::UserNotFound, "User not found")),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("查询用户失败: {e}"),
        )),
    }
}
