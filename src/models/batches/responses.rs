use serde::{Deserialize, Serialize};

use super::entities::Batch;
use crate::models::PaginationInfo;

/// 批次列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchListResponse {
    pub items: Vec<Batch>,
    pub pagination: PaginationInfo,
}
