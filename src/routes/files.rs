use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::files::entities::FileOwnerKind;
use crate::models::{ErrorCode, error_response};
use crate::services::FileService;
use crate::utils::SafeFileToken;

// 懒加载的全局 FileService 实例
static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

pub async fn handle_upload(
    request: HttpRequest,
    kind: web::Path<String>,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    // 归属类别决定大小上限与 MIME 白名单
    let owner_kind = match kind.into_inner().parse::<FileOwnerKind>() {
        Ok(kind) => kind,
        Err(_) => {
            return Ok(error_response(
                ErrorCode::BadRequest,
                "Invalid upload kind in path",
            ));
        }
    };

    FILE_SERVICE
        .handle_upload(&request, owner_kind, payload)
        .await
}

pub async fn handle_download(
    request: HttpRequest,
    file_token: SafeFileToken,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE.handle_download(&request, file_token.0).await
}

// 配置路由
pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/files")
            .wrap(middlewares::RequireJWT)
            .wrap(middleware::Compress::default())
            .route("/upload/{kind}", web::post().to(handle_upload))
            .route("/download/{file_token}", web::get().to(handle_download)),
    );
}
