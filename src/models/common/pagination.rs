use serde::{Deserialize, Serialize};

/// 分页信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: i64,
    pub size: i64,
    pub total: i64,
    pub pages: i64,
}
