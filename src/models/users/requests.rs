use serde::Deserialize;

use super::entities::UserRole;

/// 创建用户请求（管理员）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub full_name: Option<String>,
    pub nickname: Option<String>,
}

/// 更新用户请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub nickname: Option<String>,
    pub github: Option<String>,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Option<UserRole>,
}

/// 学员认证表单请求
///
/// 提交后用户状态从 unverified 变为 verified。
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationFormRequest {
    pub full_name: String,
    pub nickname: Option<String>,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub github: Option<String>,
}

/// 用户列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct UserListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}
