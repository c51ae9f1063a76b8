use serde::{Deserialize, Serialize};

use super::entities::User;
use crate::models::PaginationInfo;

/// 用户列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    pub items: Vec<User>,
    pub pagination: PaginationInfo,
}

/// 用户公开信息（学员互查时仅暴露展示字段）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUserResponse {
    pub id: i64,
    pub full_name: Option<String>,
    pub nickname: Option<String>,
    pub email: String,
    pub github: Option<String>,
}
