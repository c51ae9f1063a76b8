use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 标记单条通知已读
pub async fn mark_as_read(
    service: &NotificationService,
    request: &HttpRequest,
    _user_id: i64,
    notification_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.mark_notification_as_read(notification_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("已标记为已读"))),
        Ok(false) => Ok(error_response(
            ErrorCode::NotificationNotFound,
            "通知不存在",
        )),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("标记通知已读失败: {e}"),
        )),
    }
}

/// 标记全部通知已读
pub async fn mark_all_as_read(
    service: &NotificationService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.mark_all_notifications_as_read(user_id).await {
        Ok(count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            serde_json::json!({ "marked": count }),
            "已全部标记为已读",
        ))),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("标记全部通知已读失败: {e}"),
        )),
    }
}

/// 删除通知
pub async fn delete_notification(
    service: &NotificationService,
    request: &HttpRequest,
    _user_id: i64,
    notification_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_notification(notification_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("通知已删除"))),
        Ok(false) => Ok(error_response(
            ErrorCode::NotificationNotFound,
            "通知不存在",
        )),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("删除通知失败: {e}"),
        )),
    }
}
