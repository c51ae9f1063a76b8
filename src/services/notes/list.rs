use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NoteService;
use crate::middlewares::RequireJWT;
use crate::models::notes::requests::NoteListQuery;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 某学员的点评列表
///
/// 可见性规则：
/// - 学员本人只能看到 for_trainee 可见性的点评
/// - 点评角色（导师/考核官/管理员）能看到全部
/// - 其他学员一律 403
pub async fn list_notes_for_trainee(
    service: &NoteService,
    request: &HttpRequest,
    trainee_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    let only_for_trainee = if current_user.role.is_grader() {
        false
    } else if current_user.role == UserRole::Trainee && current_user.id == trainee_id {
        true
    } else {
        return Ok(error_response(ErrorCode::Forbidden, "Unauthorized"));
    };

    match storage
        .list_notes_for_trainee(trainee_id, only_for_trainee)
        .await
    {
        Ok(notes) => Ok(HttpResponse::Ok().json(ApiResponse::success(notes, "查询成功"))),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("查询点评列表失败: {e}"),
        )),
    }
}

/// 某点评人的点评列表（点评角色）
pub async fn list_notes_by_grader(
    service: &NoteService,
    request: &HttpRequest,
    grader_id: i64,
    query: NoteListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_notes_by_grader(grader_id, query.visibility).await {
        Ok(notes) => Ok(HttpResponse::Ok().json(ApiResponse::success(notes, "查询成功"))),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("查询点评列表失败: {e}"),
        )),
    }
}
