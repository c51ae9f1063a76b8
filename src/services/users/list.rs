use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::users::requests::UserListQuery;
use crate::models::{ApiResponse, ErrorCode, error_response};

pub async fn list_users(
    service: &UserService,
    request: &HttpRequest,
    query: UserListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_users_with_pagination(query).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "查询成功"))),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("查询用户列表失败: {e}"),
        )),
    }
}
