//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub full_name: Option<String>,
    pub nickname: Option<String>,
    pub github: Option<String>,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub avatar_url: Option<String>,
    pub is_logged_in: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub refresh_token: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::class_users::Entity")]
    ClassUsers,
    #[sea_orm(has_many = "super::class_mentors::Entity")]
    ClassMentors,
    #[sea_orm(has_many = "super::lesson_completions::Entity")]
    LessonCompletions,
    #[sea_orm(has_many = "super::challenge_completions::Entity")]
    ChallengeCompletions,
    #[sea_orm(has_many = "super::certificates::Entity")]
    Certificates,
    #[sea_orm(has_many = "super::notifications::Entity")]
    Notifications,
    #[sea_orm(has_many = "super::files::Entity")]
    Files,
}

impl Related<super::class_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassUsers.def()
    }
}

impl Related<super::class_mentors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassMentors.def()
    }
}

impl Related<super::lesson_completions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonCompletions.def()
    }
}

impl Related<super::challenge_completions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChallengeCompletions.def()
    }
}

impl Related<super::certificates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Certificates.def()
    }
}

impl Related<super::notifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notifications.def()
    }
}

impl Related<super::files::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Files.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::{User, UserProfile, UserRole, UserStatus};
        use chrono::{DateTime, Utc};

        User {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role.parse::<UserRole>().unwrap_or(UserRole::Trainee),
            status: self
                .status
                .parse::<UserStatus>()
                .unwrap_or(UserStatus::Unverified),
            profile: UserProfile {
                full_name: self.full_name,
                nickname: self.nickname,
                github: self.github,
                address: self.address,
                mobile: self.mobile,
                avatar_url: self.avatar_url,
            },
            is_logged_in: self.is_logged_in,
            refresh_token: self.refresh_token,
            last_login: self
                .last_login
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
