use serde::Deserialize;

/// 创建任务请求（课程任务与实战挑战共用）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub class_id: i64,
    pub batch_id: i64,
    // 省略时由服务层填充为当前导师
    pub mentor_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    // 随任务一起挂载的已上传文件 token
    #[serde(default)]
    pub file_tokens: Vec<String>,
}

/// 更新任务请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
}

/// 任务列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub class_id: Option<i64>,
    pub batch_id: Option<i64>,
}
