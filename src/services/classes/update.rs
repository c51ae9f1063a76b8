use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::{ApiResponse, ErrorCode, error_response};

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => {
            info!("Class {} updated", class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(class, "Class updated successfully")))
        }
        Ok(None) => Ok(error_response(ErrorCode::ClassNotFound, "Class not found")),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("更新班级失败: {e}"),
        )),
    }
}
