use serde::{Deserialize, Serialize};

use super::entities::{Assignment, MentorInfo};
use crate::models::PaginationInfo;
use crate::models::files::entities::File;

/// 任务列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct AssignmentListResponse {
    pub items: Vec<Assignment>,
    pub pagination: PaginationInfo,
}

/// 任务详情响应（含导师展示信息与附件）
#[derive(Debug, Serialize, Deserialize)]
pub struct AssignmentDetailResponse {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub mentor: Option<MentorInfo>,
    pub files: Vec<File>,
}
