use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File as FsFile, path::Path};
use uuid::Uuid;

use super::FileService;
use crate::config::{AppConfig, UploadLimit};
use crate::errors::TrainSystemError;
use crate::middlewares::RequireJWT;
use crate::models::files::entities::{File, FileOwnerKind};
use crate::models::files::responses::FileUploadResponse;
use crate::models::{ApiResponse, ErrorCode, error_response};
use crate::utils::{sanitize_stored_name, validate_magic_bytes};

/// 按归属类别取对应的上传限制
fn limit_for_kind(config: &AppConfig, owner_kind: FileOwnerKind) -> &UploadLimit {
    match owner_kind {
        // 任务附件与提交附件共用大文件限制
        FileOwnerKind::Lesson
        | FileOwnerKind::Challenge
        | FileOwnerKind::LessonCompletion
        | FileOwnerKind::ChallengeCompletion => &config.upload.assignment,
        FileOwnerKind::Profile => &config.upload.profile,
        FileOwnerKind::Certificate => &config.upload.certificate,
    }
}

/// 处理单文件上传
///
/// MIME 白名单与魔术字节校验都发生在任何数据库写入之前：
/// 被拒绝的上传不会留下文件记录或落盘文件。
pub async fn handle_upload(
    service: &FileService,
    req: &HttpRequest,
    owner_kind: FileOwnerKind,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let limit = limit_for_kind(config, owner_kind);
    let upload_dir = format!("{}/{}", config.upload.dir, owner_kind);

    let Some(user_id) = RequireJWT::extract_user_id(req) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    // 确保上传目录存在
    if !Path::new(&upload_dir).exists()
        && let Err(e) = fs::create_dir_all(&upload_dir)
    {
        tracing::error!("{}", TrainSystemError::file_operation(format!("{e}")));
        return Ok(error_response(
            ErrorCode::FileUploadFailed,
            "创建上传目录失败",
        ));
    }

    // 文件相关信息
    let mut original_name = String::new();
    let mut file_size: i64 = 0;
    let mut file_uploaded = false;
    let mut file_type = String::new();
    let mut stored_name = String::new();
    let uploaded_at = chrono::Utc::now();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name == "file" {
            if file_uploaded {
                return Ok(error_response(
                    ErrorCode::MultifileUploadNotAllowed,
                    "Only one file can be uploaded at a time",
                ));
            }
            file_uploaded = true;

            // 先获取原始文件名
            original_name = content_disposition
                .and_then(|cd| cd.get_filename())
                .map(|s| s.to_string())
                .unwrap_or_default();

            // MIME 白名单校验
            file_type = field
                .content_type()
                .map(|ct| ct.to_string())
                .unwrap_or_default();

            if !limit
                .allowed_types
                .iter()
                .any(|t| t.eq_ignore_ascii_case(&file_type))
            {
                return Ok(error_response(
                    ErrorCode::FileTypeNotAllowed,
                    "File type not allowed",
                ));
            }

            // 落盘文件名：时间戳前缀 + 清洗后的原始名
            stored_name = sanitize_stored_name(&original_name, uploaded_at.timestamp());
            let file_path = format!("{upload_dir}/{stored_name}");
            let mut f = match FsFile::create(&file_path) {
                Ok(file) => file,
                Err(e) => {
                    tracing::error!("{}", TrainSystemError::file_operation(format!("{e}")));
                    return Ok(error_response(ErrorCode::FileUploadFailed, "文件创建失败"));
                }
            };

            let mut total_size: usize = 0;
            let mut first_chunk = true;
            while let Some(chunk) = field.next().await {
                let data = chunk?;

                // 第一个 chunk 时验证魔术字节
                if first_chunk {
                    first_chunk = false;
                    if !validate_magic_bytes(&data, &file_type) {
                        let _ = fs::remove_file(&file_path);
                        return Ok(error_response(
                            ErrorCode::FileTypeNotAllowed,
                            "文件内容与声明的类型不匹配",
                        ));
                    }
                }

                total_size += data.len();
                // 校验大小
                if total_size > limit.max_size {
                    let _ = fs::remove_file(&file_path);
                    return Ok(error_response(
                        ErrorCode::FileSizeExceeded,
                        "File size exceeds the limit",
                    ));
                }
                f.write_all(&data)?;
            }
            file_size = total_size as i64;
        }
    }

    if !file_uploaded {
        return Ok(error_response(
            ErrorCode::FileNotFound,
            "No file found in upload payload",
        ));
    }

    let storage = service.get_storage(req);

    let record = File {
        download_token: Uuid::new_v4().to_string(),
        original_name,
        stored_name,
        file_size,
        file_type,
        owner_kind,
        owner_id: None,
        user_id,
        uploaded_at,
    };

    let db_file = match storage.create_file(record).await {
        Ok(file) => FileUploadResponse {
            download_token: file.download_token,
            file_name: file.original_name,
            size: file.file_size,
            content_type: file.file_type,
            uploaded_at: file.uploaded_at,
        },
        Err(e) => {
            return Ok(error_response(
                ErrorCode::FileUploadFailed,
                format!("Failed to upload file: {e}"),
            ));
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(db_file, "File uploaded successfully")))
}
