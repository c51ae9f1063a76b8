use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Deserialize;

use crate::middlewares::RequireJWT;
use crate::models::{ErrorCode, error_response};
use crate::services::websocket::WebSocketService;

#[derive(Debug, Deserialize)]
pub struct WsQuery {
    pub token: String,
}

/// WebSocket 握手
///
/// 浏览器的 WebSocket API 无法自定义请求头，令牌走查询参数。
pub async fn ws_connect(
    req: HttpRequest,
    stream: web::Payload,
    query: web::Query<WsQuery>,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::user_id_from_access_token(&query.token) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Invalid or expired token",
        ));
    };

    let (response, session, msg_stream) = actix_ws::handle(&req, stream)?;

    actix_web::rt::spawn(WebSocketService::handle_connection(
        user_id, session, msg_stream,
    ));

    Ok(response)
}

// 配置路由
pub fn configure_ws_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/v1/ws").route(web::get().to(ws_connect)));
}
