use serde::{Deserialize, Serialize};

use super::entities::{Class, ClassMember};
use crate::models::PaginationInfo;
use crate::models::batches::entities::Batch;

/// 班级列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassListResponse {
    pub items: Vec<Class>,
    pub pagination: PaginationInfo,
}

/// 班级详情响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassDetailResponse {
    #[serde(flatten)]
    pub class: Class,
    pub batches: Vec<Batch>,
    pub mentors: Vec<ClassMember>,
    pub participants: Vec<ClassMember>,
}
