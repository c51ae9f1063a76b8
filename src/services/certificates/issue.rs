use std::sync::Arc;

use tracing::info;

use crate::errors::Result;
use crate::models::certificates::entities::CertificateIssue;
use crate::models::certificates::responses::CertificatePayload;
use crate::models::completions::entities::Progress;
use crate::models::users::entities::User;
use crate::services::notifications::notify_user;
use crate::storage::Storage;

/// 进度达标时签发证书
///
/// 两条进度线都到 100% 才尝试签发；"至多一张"由存储层的
/// (trainee_id, class_id) 唯一约束保证，这里只是把签发结果
/// 翻译成面向用户的文案。未达标返回 None。
pub async fn issue_certificate_if_eligible(
    storage: &Arc<dyn Storage>,
    trainee: &User,
    class_id: i64,
    progress: &Progress,
) -> Result<Option<CertificatePayload>> {
    if !progress.is_fully_complete() {
        return Ok(None);
    }

    let class_name = storage
        .get_class_by_id(class_id)
        .await?
        .map(|class| class.class_name)
        .unwrap_or_else(|| format!("class #{class_id}"));

    let payload = match storage.insert_certificate(trainee.id, class_id).await? {
        CertificateIssue::Created(certificate) => {
            info!(
                "Certificate issued to trainee {} for class {}",
                trainee.id, class_id
            );

            notify_user(
                storage,
                trainee.id,
                "Certificate Issued!",
                &format!("Your completion certificate for {class_name} is ready."),
                "Certificate",
            )
            .await;

            CertificatePayload::issued(trainee.display_name(), &class_name, certificate.created_at)
        }
        CertificateIssue::AlreadyIssued(_) => {
            CertificatePayload::already_issued(trainee.display_name(), &class_name)
        }
    };

    Ok(Some(payload))
}
