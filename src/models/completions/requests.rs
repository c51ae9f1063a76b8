use serde::Deserialize;

/// 提交完成请求
///
/// 附件先经文件上传接口取得 token，再随提交挂载到完成记录。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordCompletionRequest {
    #[serde(default)]
    pub file_tokens: Vec<String>,
}

/// 完成率查询参数
///
/// user_id 缺省为当前用户（查询他人进度需要点评角色）；
/// class_id 缺省时按全局口径统计。
#[derive(Debug, Clone, Deserialize)]
pub struct PercentageQuery {
    pub user_id: Option<i64>,
    pub class_id: Option<i64>,
}
