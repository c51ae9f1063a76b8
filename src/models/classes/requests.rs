use serde::Deserialize;

/// 创建班级请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassRequest {
    pub class_name: String,
    pub status: Option<String>,
    // 创建时可直接挂到一个或多个批次
    #[serde(default)]
    pub batch_ids: Vec<i64>,
    // 创建时可直接指派导师
    #[serde(default)]
    pub mentor_ids: Vec<i64>,
}

/// 更新班级请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClassRequest {
    pub class_name: Option<String>,
    pub status: Option<String>,
}

/// 班级列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct ClassListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub batch_id: Option<i64>,
    pub mentor_id: Option<i64>,
    pub user_id: Option<i64>,
    pub search: Option<String>,
}

/// 班级成员调整请求（添加学员）
#[derive(Debug, Clone, Deserialize)]
pub struct AddClassUsersRequest {
    pub user_ids: Vec<i64>,
}

/// 班级导师指派请求
#[derive(Debug, Clone, Deserialize)]
pub struct AssignMentorsRequest {
    pub mentor_ids: Vec<i64>,
}
