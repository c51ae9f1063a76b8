use serde::{Deserialize, Serialize};

use super::entities::Notification;
use crate::models::PaginationInfo;

/// 通知列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationListResponse {
    pub items: Vec<Notification>,
    pub pagination: PaginationInfo,
}

/// 未读通知数量响应
#[derive(Debug, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}
