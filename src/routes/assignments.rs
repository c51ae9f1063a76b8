use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::entities::AssignmentKind;
use crate::models::assignments::requests::{
    AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AssignmentService;
use crate::utils::SafeIdI64;

// 懒加载的全局服务实例：课程任务与实战挑战各一个
static LESSON_SERVICE: Lazy<AssignmentService> =
    Lazy::new(|| AssignmentService::new_lazy(AssignmentKind::Lesson));
static CHALLENGE_SERVICE: Lazy<AssignmentService> =
    Lazy::new(|| AssignmentService::new_lazy(AssignmentKind::Challenge));

// 课程任务处理程序
pub async fn list_lessons(
    req: HttpRequest,
    query: web::Query<AssignmentListQuery>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .list_assignments(&req, query.into_inner())
        .await
}

pub async fn create_lesson(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .create_assignment(&req, body.into_inner())
        .await
}

pub async fn get_lesson(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.get_assignment(&req, id.0).await
}

pub async fn update_lesson(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .update_assignment(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_lesson(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.delete_assignment(&req, id.0).await
}

// 实战挑战处理程序
pub async fn list_challenges(
    req: HttpRequest,
    query: web::Query<AssignmentListQuery>,
) -> ActixResult<HttpResponse> {
    CHALLENGE_SERVICE
        .list_assignments(&req, query.into_inner())
        .await
}

pub async fn create_challenge(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    CHALLENGE_SERVICE
        .create_assignment(&req, body.into_inner())
        .await
}

pub async fn get_challenge(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    CHALLENGE_SERVICE.get_assignment(&req, id.0).await
}

pub async fn update_challenge(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    CHALLENGE_SERVICE
        .update_assignment(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_challenge(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    CHALLENGE_SERVICE.delete_assignment(&req, id.0).await
}

// 配置路由：/lessons 与 /challenges 两个平行 scope
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lessons")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(web::get().to(list_lessons)).route(
                    web::post()
                        .to(create_lesson)
                        // 导师发布自己的课程任务，管理员可代发
                        .wrap(middlewares::RequireRole::new_any(UserRole::mentor_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_lesson))
                    .route(
                        web::put()
                            .to(update_lesson)
                            .wrap(middlewares::RequireRole::new_any(UserRole::mentor_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_lesson)
                            .wrap(middlewares::RequireRole::new_any(UserRole::mentor_roles())),
                    ),
            ),
    );

    cfg.service(
        web::scope("/api/v1/challenges")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_challenges))
                    .route(
                        web::post()
                            .to(create_challenge)
                            .wrap(middlewares::RequireRole::new_any(UserRole::mentor_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_challenge))
                    .route(
                        web::put()
                            .to(update_challenge)
                            .wrap(middlewares::RequireRole::new_any(UserRole::mentor_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_challenge)
                            .wrap(middlewares::RequireRole::new_any(UserRole::mentor_roles())),
                    ),
            ),
    );
}
