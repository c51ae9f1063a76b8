use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::BatchService;
use crate::models::{ApiResponse, ErrorCode, error_response};

pub async fn get_batch(
    service: &BatchService,
    request: &HttpRequest,
    batch_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_batch_by_id(batch_id).await {
        Ok(Some(batch)) => Ok(HttpResponse::Ok().json(ApiResponse::success(batch, "查询成功"))),
        Ok(None) => Ok(error_response(ErrorCode::BatchNotFound, "Batch not found")),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("查询批次失败: {e}"),
        )),
    }
}
