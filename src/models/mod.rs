//! 数据模型定义
//!
//! 按业务域划分：每个域下分 entities / requests / responses。

pub mod assignments;
pub mod auth;
pub mod batches;
pub mod certificates;
pub mod classes;
pub mod common;
pub mod completions;
pub mod files;
pub mod notes;
pub mod notifications;
pub mod users;

pub use common::pagination::PaginationInfo;
pub use common::response::{ApiResponse, error_response};

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// 程序启动时间（注入 app_data，用于运行时长统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 封闭枚举，每个错误码确定性地映射到一个 HTTP 状态码，
/// 客户端依据 code 而不是 message 文本做程序化处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    Success = 0,

    // 1xxx 认证授权
    Unauthorized = 1001,
    TokenExpired = 1002,
    AuthFailed = 1003,
    Forbidden = 1004,
    NotVerified = 1005,
    InvalidToken = 1006,

    // 2xxx 用户
    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    InvalidRole = 2003,

    // 3xxx 批次与班级
    BatchNotFound = 3001,
    BatchNumTaken = 3002,
    ClassNotFound = 3101,
    NotClassMember = 3102,

    // 34xx 课程任务与挑战
    LessonNotFound = 3401,
    ChallengeNotFound = 3402,

    // 35xx 完成记录与证书
    CompletionNotFound = 3501,
    CertificateNotFound = 3601,

    // 37xx 点评
    NoteNotFound = 3701,
    NoteContentInvalid = 3702,

    // 38xx 通知
    NotificationNotFound = 3801,

    // 39xx 文件
    FileNotFound = 3901,
    FileTypeNotAllowed = 3902,
    FileSizeExceeded = 3903,
    MultifileUploadNotAllowed = 3904,
    FileUploadFailed = 3905,

    // 4xxx 通用请求错误
    BadRequest = 4001,
    Validation = 4002,
    Conflict = 4003,

    // 5xxx 服务端错误
    InternalServerError = 5000,
}

impl ErrorCode {
    /// 错误码到 HTTP 状态码的确定性映射
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::Success => StatusCode::OK,

            ErrorCode::Unauthorized
            | ErrorCode::TokenExpired
            | ErrorCode::AuthFailed
            | ErrorCode::InvalidToken => StatusCode::UNAUTHORIZED,

            ErrorCode::Forbidden | ErrorCode::NotVerified | ErrorCode::NotClassMember => {
                StatusCode::FORBIDDEN
            }

            ErrorCode::UserNotFound
            | ErrorCode::BatchNotFound
            | ErrorCode::ClassNotFound
            | ErrorCode::LessonNotFound
            | ErrorCode::ChallengeNotFound
            | ErrorCode::CompletionNotFound
            | ErrorCode::CertificateNotFound
            | ErrorCode::NoteNotFound
            | ErrorCode::NotificationNotFound
            | ErrorCode::FileNotFound => StatusCode::NOT_FOUND,

            // 历史接口契约：重复邮箱 / 重复批次号返回 400 而不是 409
            ErrorCode::UserAlreadyExists
            | ErrorCode::BatchNumTaken
            | ErrorCode::InvalidRole
            | ErrorCode::NoteContentInvalid
            | ErrorCode::FileTypeNotAllowed
            | ErrorCode::FileSizeExceeded
            | ErrorCode::MultifileUploadNotAllowed
            | ErrorCode::BadRequest
            | ErrorCode::Validation => StatusCode::BAD_REQUEST,

            ErrorCode::Conflict => StatusCode::CONFLICT,

            ErrorCode::FileUploadFailed | ErrorCode::InternalServerError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_is_deterministic() {
        assert_eq!(ErrorCode::Unauthorized.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::Forbidden.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorCode::BatchNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::Conflict.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::InternalServerError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_duplicate_batch_num_maps_to_bad_request() {
        // 与历史接口契约保持一致：批次号冲突是 400 而不是 409
        assert_eq!(ErrorCode::BatchNumTaken.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::UserAlreadyExists.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
