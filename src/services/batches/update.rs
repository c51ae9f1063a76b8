use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::BatchService;
use crate::models::batches::requests::UpdateBatchRequest;
use crate::models::{ApiResponse, ErrorCode, error_response};

pub async fn update_batch(
    service: &BatchService,
    request: &HttpRequest,
    batch_id: i64,
    update_data: UpdateBatchRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_batch(batch_id, update_data).await {
        Ok(Some(batch)) => {
            info!("Batch {} updated", batch_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(batch, "Batch updated successfully")))
        }
        Ok(None) => Ok(error_response(ErrorCode::BatchNotFound, "Batch not found")),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("更新批次失败: {e}"),
        )),
    }
}
