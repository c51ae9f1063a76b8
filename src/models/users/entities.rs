use serde::{Deserialize, Serialize};

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Trainee,  // 学员
    Mentor,   // 导师
    Examiner, // 考核官
    Admin,    // 管理员
}

impl UserRole {
    pub const TRAINEE: &'static str = "trainee";
    pub const MENTOR: &'static str = "mentor";
    pub const EXAMINER: &'static str = "examiner";
    pub const ADMIN: &'static str = "admin";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    /// 有点评/评分权限的角色
    pub fn grader_roles() -> &'static [&'static UserRole] {
        &[&Self::Mentor, &Self::Examiner, &Self::Admin]
    }
    pub fn mentor_roles() -> &'static [&'static UserRole] {
        &[&Self::Mentor, &Self::Admin]
    }
    pub fn trainee_roles() -> &'static [&'static UserRole] {
        &[&Self::Trainee]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Trainee, &Self::Mentor, &Self::Examiner, &Self::Admin]
    }

    /// 是否可以对学员提交附加点评
    pub fn is_grader(&self) -> bool {
        matches!(self, UserRole::Mentor | UserRole::Examiner | UserRole::Admin)
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::TRAINEE => Ok(UserRole::Trainee),
            UserRole::MENTOR => Ok(UserRole::Mentor),
            UserRole::EXAMINER => Ok(UserRole::Examiner),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: trainee, mentor, examiner, admin"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Trainee => write!(f, "{}", UserRole::TRAINEE),
            UserRole::Mentor => write!(f, "{}", UserRole::MENTOR),
            UserRole::Examiner => write!(f, "{}", UserRole::EXAMINER),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trainee" => Ok(UserRole::Trainee),
            "mentor" => Ok(UserRole::Mentor),
            "examiner" => Ok(UserRole::Examiner),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户认证状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Unverified, // 未提交认证资料
    Verified,   // 已认证
}

impl<'de> Deserialize<'de> for UserStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "unverified" => Ok(UserStatus::Unverified),
            "verified" => Ok(UserStatus::Verified),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户状态: '{s}'. 支持的状态: unverified, verified"
            ))),
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Unverified => write!(f, "unverified"),
            UserStatus::Verified => write!(f, "verified"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unverified" => Ok(UserStatus::Unverified),
            "verified" => Ok(UserStatus::Verified),
            _ => Err(format!("Invalid user status: {s}")),
        }
    }
}

// 用户资料
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub full_name: Option<String>,
    pub nickname: Option<String>,
    pub github: Option<String>,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub avatar_url: Option<String>,
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub profile: UserProfile,
    pub is_logged_in: bool,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub refresh_token: Option<String>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    /// 证书等对外文案使用的显示名，资料缺失时回退到邮箱
    pub fn display_name(&self) -> &str {
        self.profile
            .full_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.email)
    }

    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(&self) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(self.id, &self.role.to_string())
            .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in UserRole::all_roles() {
            let s = role.to_string();
            assert_eq!(&s.parse::<UserRole>().unwrap(), *role);
        }
    }

    #[test]
    fn test_grader_roles_exclude_trainee() {
        assert!(!UserRole::Trainee.is_grader());
        assert!(UserRole::Mentor.is_grader());
        assert!(UserRole::Examiner.is_grader());
        assert!(UserRole::Admin.is_grader());
    }
}
