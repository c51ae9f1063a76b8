use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::FileService;
use crate::config::AppConfig;
use crate::errors::TrainSystemError;
use crate::models::{ErrorCode, error_response};

pub async fn handle_download(
    service: &FileService,
    request: &HttpRequest,
    file_token: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let db_file = match storage.get_file_by_token(&file_token).await {
        Ok(Some(f)) => f,
        Ok(None) => {
            return Ok(error_response(ErrorCode::FileNotFound, "File not found"));
        }
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("File query failed: {e}"),
            ));
        }
    };

    let config = AppConfig::get();
    let file_path = format!(
        "{}/{}/{}",
        config.upload.dir, db_file.owner_kind, db_file.stored_name
    );

    if !Path::new(&file_path).exists() {
        return Ok(error_response(ErrorCode::FileNotFound, "文件不存在"));
    }

    let mut file = match File::open(&file_path) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("{:?}", TrainSystemError::file_operation(format!("{e:?}")));
            return Ok(error_response(
                ErrorCode::InternalServerError,
                "File open failed",
            ));
        }
    };

    let mut buf = Vec::new();
    if file.read_to_end(&mut buf).is_err() {
        tracing::error!("{:?}", TrainSystemError::file_operation("File read failed"));
        return Ok(error_response(
            ErrorCode::InternalServerError,
            "File read failed",
        ));
    }

    // 使用数据库中的原始文件名与 MIME 类型
    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, db_file.file_type.clone()))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", db_file.original_name),
        ))
        .body(buf))
}
