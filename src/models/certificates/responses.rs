use serde::{Deserialize, Serialize};

use super::entities::Certificate;

/// 证书签发结果文案
///
/// message 与 content 直接面向最终用户展示。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificatePayload {
    pub message: String,
    pub content: String,
}

impl CertificatePayload {
    pub const MSG_ISSUED: &'static str = "Completion Certificate";
    pub const MSG_ALREADY_ISSUED: &'static str = "Certificate Already Issued";

    /// 新签发证书的展示文案
    pub fn issued(
        trainee_name: &str,
        class_name: &str,
        issued_at: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            message: Self::MSG_ISSUED.to_string(),
            content: format!(
                "This certificate is presented to \n{trainee_name} \nFor successfully completing \nthe {class_name} class\nCompletion date: {}",
                issued_at.format("%Y-%m-%d")
            ),
        }
    }

    /// 证书已存在时的提示文案
    pub fn already_issued(trainee_name: &str, class_name: &str) -> Self {
        Self {
            message: Self::MSG_ALREADY_ISSUED.to_string(),
            content: format!(
                "Certificate for {trainee_name} for the {class_name} class has already been issued."
            ),
        }
    }
}

/// 证书详情响应（带学员/班级/批次展示字段）
#[derive(Debug, Serialize, Deserialize)]
pub struct CertificateDetailResponse {
    #[serde(flatten)]
    pub certificate: Certificate,
    pub trainee_name: Option<String>,
    pub class_name: Option<String>,
    pub batch_num: Option<i64>,
    pub batch_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_payload_contains_names() {
        let payload = CertificatePayload::issued(
            "Alice Tan",
            "Full Stack Development",
            chrono::Utc::now(),
        );
        assert_eq!(payload.message, "Completion Certificate");
        assert!(payload.content.contains("Alice Tan"));
        assert!(payload.content.contains("Full Stack Development"));
    }

    #[test]
    fn test_already_issued_payload() {
        let payload = CertificatePayload::already_issued("Bob", "Quality Assurance");
        assert_eq!(payload.message, "Certificate Already Issued");
        assert!(payload.content.contains("Bob"));
        assert!(payload.content.contains("Quality Assurance"));
    }
}
