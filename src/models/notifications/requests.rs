use serde::Deserialize;

/// 创建通知请求（服务内部使用，不经 HTTP 暴露）
#[derive(Debug, Clone)]
pub struct CreateNotificationRequest {
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub notification_type: String,
}

/// 通知列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub unread_only: Option<bool>,
}
