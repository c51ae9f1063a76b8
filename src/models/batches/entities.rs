use serde::{Deserialize, Serialize};

/// 培训批次
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub id: i64,
    // 批次编号，全局唯一
    pub batch_num: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    // 批次状态，如 "Ongoing" / "Finished"
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
