use serde::Deserialize;

/// 创建批次请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBatchRequest {
    pub batch_num: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub status: String,
}

/// 更新批次请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBatchRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
    pub status: Option<String>,
}

/// 批次列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct BatchListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub status: Option<String>,
    pub search: Option<String>,
    // 只看某学员所在班级挂载的批次
    pub user_id: Option<i64>,
}
