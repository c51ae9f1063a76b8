use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::notes::requests::{CreateNoteRequest, NoteListQuery};
use crate::models::users::entities::UserRole;
use crate::services::NoteService;
use crate::utils::{SafeNoteIdI64, SafeTraineeIdI64};

// 懒加载的全局 NoteService 实例
static NOTE_SERVICE: Lazy<NoteService> = Lazy::new(NoteService::new_lazy);

// HTTP处理程序
pub async fn create_note(
    req: HttpRequest,
    note_data: web::Json<CreateNoteRequest>,
) -> ActixResult<HttpResponse> {
    NOTE_SERVICE.create_note(&req, note_data.into_inner()).await
}

pub async fn list_notes_for_trainee(
    req: HttpRequest,
    trainee_id: SafeTraineeIdI64,
) -> ActixResult<HttpResponse> {
    NOTE_SERVICE
        .list_notes_for_trainee(&req, trainee_id.0)
        .await
}

pub async fn list_notes_by_grader(
    req: HttpRequest,
    grader_id: web::Path<i64>,
    query: web::Query<NoteListQuery>,
) -> ActixResult<HttpResponse> {
    NOTE_SERVICE
        .list_notes_by_grader(&req, grader_id.into_inner(), query.into_inner())
        .await
}

pub async fn delete_note(req: HttpRequest, note_id: SafeNoteIdI64) -> ActixResult<HttpResponse> {
    NOTE_SERVICE.delete_note(&req, note_id.0).await
}

// 配置路由
pub fn configure_notes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notes")
            .wrap(middlewares::RequireJWT)
            .service(
                // 创建点评仅点评角色可用
                web::resource("").route(
                    web::post()
                        .to(create_note)
                        .wrap(middlewares::RequireRole::new_any(UserRole::grader_roles())),
                ),
            )
            // 学员本人只能拿到 for_trainee 可见性的点评（业务层过滤）
            .service(
                web::resource("/trainee/{trainee_id}")
                    .route(web::get().to(list_notes_for_trainee)),
            )
            .service(
                web::resource("/grader/{grader_id}").route(
                    web::get()
                        .to(list_notes_by_grader)
                        .wrap(middlewares::RequireRole::new_any(UserRole::grader_roles())),
                ),
            )
            .service(
                web::resource("/{note_id}").route(
                    web::delete()
                        .to(delete_note)
                        .wrap(middlewares::RequireRole::new_any(UserRole::grader_roles())),
                ),
            ),
    );
}
