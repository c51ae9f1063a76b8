//! 请求参数解析错误处理器
//!
//! 把 actix 默认的纯文本 400 响应统一成 ApiResponse JSON 格式。

use actix_web::HttpRequest;
use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};

use crate::models::{ErrorCode, error_response};

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let response = error_response(
        ErrorCode::BadRequest,
        format!("Invalid JSON payload: {detail}"),
    );
    InternalError::from_response(err, response).into()
}

/// 查询参数解析错误处理器
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let response = error_response(
        ErrorCode::BadRequest,
        format!("Invalid query parameters: {detail}"),
    );
    InternalError::from_response(err, response).into()
}
