use serde::Deserialize;

use crate::models::users::entities::UserRole;

/// 登录请求
///
/// 角色随凭据一并提交，登录端按角色校验（角色不符返回 403）。
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// 注销请求
#[derive(Debug, Clone, Deserialize)]
pub struct LogoutRequest {
    pub access_token: String,
}
