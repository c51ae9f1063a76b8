use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::BatchService;
use crate::errors::TrainSystemError;
use crate::models::batches::requests::CreateBatchRequest;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 创建批次（管理员）
///
/// 批次号全局唯一；冲突由数据库唯一约束兜底，单条 INSERT
/// 失败不会留下半成品记录。
pub async fn create_batch(
    service: &BatchService,
    request: &HttpRequest,
    batch_data: CreateBatchRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if batch_data.batch_num <= 0 {
        return Ok(error_response(
            ErrorCode::Validation,
            "batch_num must be a positive number",
        ));
    }

    if batch_data.end_date < batch_data.start_date {
        return Ok(error_response(
            ErrorCode::Validation,
            "end_date must not be before start_date",
        ));
    }

    match storage.create_batch(batch_data).await {
        Ok(batch) => {
            info!("Batch {} created successfully", batch.batch_num);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(batch, "Batch created successfully")))
        }
        Err(TrainSystemError::Conflict(_)) => Ok(error_response(
            ErrorCode::BatchNumTaken,
            "Batch number already taken",
        )),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("Batch creation failed: {e}"),
        )),
    }
}
