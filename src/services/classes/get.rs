use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 班级详情（批次、导师、学员，参与人数实时统计）
pub async fn get_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_detail(class_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功"))),
        Ok(None) => Ok(error_response(ErrorCode::ClassNotFound, "Class not found")),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("查询班级失败: {e}"),
        )),
    }
}
