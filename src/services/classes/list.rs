use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::classes::requests::ClassListQuery;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 班级列表
///
/// 学员默认只看到自己所在的班级；导师默认看到自己带的班级；
/// 管理员与考核官不加限制。
pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    mut query: ClassListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    match current_user.role {
        UserRole::Trainee => {
            query.user_id = Some(current_user.id);
        }
        UserRole::Mentor => {
            if query.user_id.is_none() {
                query.mentor_id = Some(current_user.id);
            }
        }
        UserRole::Examiner | UserRole::Admin => {}
    }

    match storage.list_classes_with_pagination(query).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "查询成功"))),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("查询班级列表失败: {e}"),
        )),
    }
}
