use serde::{Deserialize, Serialize};

/// 结业证书
///
/// 每个 (学员, 班级) 至多一张，由数据库复合唯一约束保证。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub id: i64,
    pub trainee_id: i64,
    pub class_id: i64,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Certificate {
    /// 新签发证书的状态值
    pub const STATUS_ISSUED: &'static str = "Issued";
}

/// 证书签发结果
///
/// 唯一约束冲突不是错误：并发或重复签发统一落到 AlreadyIssued。
#[derive(Debug, Clone)]
pub enum CertificateIssue {
    Created(Certificate),
    AlreadyIssued(Certificate),
}
