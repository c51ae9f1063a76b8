use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::BatchService;
use crate::models::{ApiResponse, ErrorCode, error_response};

pub async fn delete_batch(
    service: &BatchService,
    request: &HttpRequest,
    batch_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_batch(batch_id).await {
        Ok(true) => {
            info!("Batch {} deleted", batch_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Batch deleted successfully")))
        }
        Ok(false) => Ok(error_response(ErrorCode::BatchNotFound, "Batch not found")),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("删除批次失败: {e}"),
        )),
    }
}
