use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::notifications::requests::NotificationListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::NotificationService;
use crate::utils::SafeNotificationIdI64;

// 懒加载的全局 NotificationService 实例
static NOTIFICATION_SERVICE: Lazy<NotificationService> = Lazy::new(NotificationService::new_lazy);

// HTTP处理程序
pub async fn list_notifications(
    req: HttpRequest,
    query: web::Query<NotificationListQuery>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    NOTIFICATION_SERVICE
        .list_notifications(&req, user_id, query.into_inner())
        .await
}

pub async fn get_unread_count(req: HttpRequest) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    NOTIFICATION_SERVICE.get_unread_count(&req, user_id).await
}

pub async fn mark_as_read(
    req: HttpRequest,
    notification_id: SafeNotificationIdI64,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    NOTIFICATION_SERVICE
        .mark_as_read(&req, user_id, notification_id.0)
        .await
}

pub async fn mark_all_as_read(req: HttpRequest) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    NOTIFICATION_SERVICE.mark_all_as_read(&req, user_id).await
}

pub async fn delete_notification(
    req: HttpRequest,
    notification_id: SafeNotificationIdI64,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    NOTIFICATION_SERVICE
        .delete_notification(&req, user_id, notification_id.0)
        .await
}

// 配置路由
pub fn configure_notifications_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notifications")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("").route(web::get().to(list_notifications)))
            .service(web::resource("/unread-count").route(web::get().to(get_unread_count)))
            .service(web::resource("/read-all").route(web::put().to(mark_all_as_read)))
            .service(
                web::resource("/{notification_id}/read").route(web::put().to(mark_as_read)),
            )
            .service(
                web::resource("/{notification_id}").route(web::delete().to(delete_notification)),
            ),
    );
}
