use serde::{Deserialize, Serialize};

use super::entities::Progress;
use crate::models::certificates::responses::CertificatePayload;

/// 提交完成响应
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub message: String,
    pub progress: Progress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<CertificatePayload>,
}

/// 完成率响应
#[derive(Debug, Serialize, Deserialize)]
pub struct PercentageResponse {
    pub lesson_percentage: f64,
    pub challenge_percentage: f64,
}
