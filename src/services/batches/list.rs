use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::BatchService;
use crate::middlewares::RequireJWT;
use crate::models::batches::requests::BatchListQuery;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 批次列表
///
/// 学员默认只看到自己所在班级挂载的批次，其余角色不加限制。
pub async fn list_batches(
    service: &BatchService,
    request: &HttpRequest,
    mut query: BatchListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    if current_user.role == UserRole::Trainee {
        query.user_id = Some(current_user.id);
    }

    match storage.list_batches_with_pagination(query).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "查询成功"))),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("查询批次列表失败: {e}"),
        )),
    }
}
