use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::entities::AssignmentKind;
use crate::models::completions::requests::{PercentageQuery, RecordCompletionRequest};
use crate::models::users::entities::UserRole;
use crate::services::CompletionService;
use crate::utils::SafeIdI64;

// 懒加载的全局 CompletionService 实例
static COMPLETION_SERVICE: Lazy<CompletionService> = Lazy::new(CompletionService::new_lazy);

// HTTP处理程序
pub async fn complete_lesson(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<RecordCompletionRequest>,
) -> ActixResult<HttpResponse> {
    COMPLETION_SERVICE
        .record_completion(&req, AssignmentKind::Lesson, id.0, body.into_inner())
        .await
}

pub async fn complete_challenge(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<RecordCompletionRequest>,
) -> ActixResult<HttpResponse> {
    COMPLETION_SERVICE
        .record_completion(&req, AssignmentKind::Challenge, id.0, body.into_inner())
        .await
}

pub async fn get_percentage(
    req: HttpRequest,
    query: web::Query<PercentageQuery>,
) -> ActixResult<HttpResponse> {
    COMPLETION_SERVICE
        .get_percentage(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_completions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/completions")
            .wrap(middlewares::RequireJWT)
            // 完成率查询所有登录用户可用（查他人进度在业务层校验）
            .service(web::resource("/percentage").route(web::get().to(get_percentage)))
            .service(
                web::resource("/lessons/{id}").route(
                    web::post()
                        .to(complete_lesson)
                        // 只有完成认证的学员才能提交
                        .wrap(middlewares::RequireVerified)
                        .wrap(middlewares::RequireRole::new_any(UserRole::trainee_roles())),
                ),
            )
            .service(
                web::resource("/challenges/{id}").route(
                    web::post()
                        .to(complete_challenge)
                        .wrap(middlewares::RequireVerified)
                        .wrap(middlewares::RequireRole::new_any(UserRole::trainee_roles())),
                ),
            ),
    );
}
