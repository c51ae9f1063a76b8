use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::CertificateService;
use crate::utils::{SafeIdI64, SafeTraineeIdI64};

// 懒加载的全局 CertificateService 实例
static CERTIFICATE_SERVICE: Lazy<CertificateService> = Lazy::new(CertificateService::new_lazy);

// HTTP处理程序
pub async fn list_certificates(req: HttpRequest) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE.list_certificates(&req).await
}

pub async fn get_certificate(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE.get_certificate(&req, id.0).await
}

pub async fn list_certificates_for_user(
    req: HttpRequest,
    trainee_id: SafeTraineeIdI64,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .list_certificates_for_user(&req, trainee_id.0)
        .await
}

// 配置路由
pub fn configure_certificates_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/certificates")
            .wrap(middlewares::RequireJWT)
            .service(
                // 全量证书列表仅点评角色可用
                web::resource("").route(
                    web::get()
                        .to(list_certificates)
                        .wrap(middlewares::RequireRole::new_any(UserRole::grader_roles())),
                ),
            )
            // 学员查自己的证书，点评角色可查任意学员（业务层校验）
            .service(
                web::resource("/user/{trainee_id}")
                    .route(web::get().to(list_certificates_for_user)),
            )
            .service(web::resource("/{id}").route(web::get().to(get_certificate))),
    );
}
