use serde::{Deserialize, Serialize};

/// 站内通知
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    // 通知分类，如 "Lesson" / "Challenge" / "Profile" / "Certificate"
    pub notification_type: String,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
