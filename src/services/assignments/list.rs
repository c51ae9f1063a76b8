use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::AssignmentListQuery;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 任务列表
///
/// 学员拿到自己所在班级的全部任务；其他角色按查询参数分页。
pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    query: AssignmentListQuery,
) -> ActixResult<HttpResponse> {
    let kind = service.kind();
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    if current_user.role == UserRole::Trainee {
        return match storage.list_assignments_for_user(kind, current_user.id).await {
            Ok(assignments) => {
                Ok(HttpResponse::Ok().json(ApiResponse::success(assignments, "查询成功")))
            }
            Err(e) => Ok(error_response(
                ErrorCode::InternalServerError,
                format!("Failed to fetch {}s: {e}", kind.noun()),
            )),
        };
    }

    match storage.list_assignments_with_pagination(kind, query).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "查询成功"))),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("Failed to fetch {}s: {e}", kind.noun()),
        )),
    }
}
