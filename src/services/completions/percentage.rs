use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CompletionService;
use crate::middlewares::RequireJWT;
use crate::models::completions::entities::ProgressScope;
use crate::models::completions::requests::PercentageQuery;
use crate::models::completions::responses::PercentageResponse;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 完成率查询
///
/// 统计口径由调用方显式选择：带 class_id 按班级统计，
/// 不带则按全局统计。查询他人的进度需要点评角色。
pub async fn get_percentage(
    service: &CompletionService,
    request: &HttpRequest,
    query: PercentageQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    let target_user_id = query.user_id.unwrap_or(current_user.id);
    if target_user_id != current_user.id && !current_user.role.is_grader() {
        return Ok(error_response(
            ErrorCode::Forbidden,
            "You are not allowed to view another trainee's progress",
        ));
    }

    let scope = match query.class_id {
        Some(class_id) => ProgressScope::Class(class_id),
        None => ProgressScope::Global,
    };

    match storage.get_progress(target_user_id, scope).await {
        Ok(progress) => {
            // 两位小数，总数为 0 时固定为 0
            let response = PercentageResponse {
                lesson_percentage: (progress.lesson_percentage() * 100.0).round() / 100.0,
                challenge_percentage: (progress.challenge_percentage() * 100.0).round() / 100.0,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
        }
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("Failed to compute progress: {e}"),
        )),
    }
}
