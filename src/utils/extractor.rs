//! 安全路径参数提取器
//!
//! 在进入处理函数之前完成路径参数的解析与基本校验，
//! 非法参数直接返回 400，处理函数只拿到合法值。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::models::{ErrorCode, error_response};

/// 定义基于路径参数的 i64 提取器
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(InternalError::from_response(
                        concat!("invalid path parameter: ", $param),
                        error_response(
                            ErrorCode::BadRequest,
                            concat!("Invalid ", $param, " in path"),
                        ),
                    )
                    .into()),
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeIdI64, "id");
define_safe_i64_extractor!(SafeUserIdI64, "user_id");
define_safe_i64_extractor!(SafeClassIdI64, "class_id");
define_safe_i64_extractor!(SafeBatchIdI64, "batch_id");
define_safe_i64_extractor!(SafeTraineeIdI64, "trainee_id");
define_safe_i64_extractor!(SafeNoteIdI64, "note_id");
define_safe_i64_extractor!(SafeNotificationIdI64, "notification_id");

/// 文件下载 token 提取器：仅放行 UUID 风格的字符
pub struct SafeFileToken(pub String);

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .match_info()
            .get("file_token")
            .filter(|raw| {
                !raw.is_empty()
                    && raw.len() <= 64
                    && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            })
            .map(|raw| raw.to_string());

        ready(match token {
            Some(token) => Ok(SafeFileToken(token)),
            None => Err(InternalError::from_response(
                "invalid path parameter: file_token",
                error_response(ErrorCode::BadRequest, "Invalid file token in path"),
            )
            .into()),
        })
    }
}
