use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CertificateService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, error_response};

/// 证书列表（点评角色）
pub async fn list_certificates(
    service: &CertificateService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_certificates().await {
        Ok(certificates) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(certificates, "查询成功")))
        }
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("查询证书列表失败: {e}"),
        )),
    }
}

/// 某学员的证书
///
/// 学员只能查自己的证书，点评角色可以查任意学员。
pub async fn list_certificates_for_user(
    service: &CertificateService,
    request: &HttpRequest,
    trainee_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    if current_user.id != trainee_id && !current_user.role.is_grader() {
        return Ok(error_response(
            ErrorCode::Forbidden,
            "You are not allowed to view another trainee's certificates",
        ));
    }

    match storage.list_certificates_for_user(trainee_id).await {
        Ok(certificates) if certificates.is_empty() => Ok(error_response(
            ErrorCode::CertificateNotFound,
            "No certificates found for this user",
        )),
        Ok(certificates) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(certificates, "查询成功")))
        }
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("查询学员证书失败: {e}"),
        )),
    }
}
