use serde::{Deserialize, Serialize};

/// 班级
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub class_name: String,
    pub status: String,
    // 参与人数为冗余展示字段，每次读取时从成员表重新统计
    pub participant_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 班级成员（导师或学员）的展示信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassMember {
    pub id: i64,
    pub full_name: Option<String>,
    pub nickname: Option<String>,
    pub email: String,
}
