use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CertificateService;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 证书详情
pub async fn get_certificate(
    service: &CertificateService,
    request: &HttpRequest,
    certificate_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_certificate_detail(certificate_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功"))),
        Ok(None) => Ok(error_response(
            ErrorCode::CertificateNotFound,
            "Certificate not found.",
        )),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("查询证书失败: {e}"),
        )),
    }
}
