//! 上传文件名处理
//!
//! 落盘文件名 = 上传时间戳前缀 + 清洗后的原始文件名，
//! 既避免同名覆盖，也挡掉路径穿越之类的脏输入。

/// 清洗原始文件名：空白替换为下划线，其余非字母数字字符剔除，
/// 扩展名单独保留（仅字母数字）。
pub fn sanitize_file_name(original: &str) -> String {
    let (stem, ext) = match original.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (original, None),
    };

    let mut cleaned: String = stem
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_ascii_alphanumeric() || c == '_' {
                Some(c)
            } else {
                None
            }
        })
        .collect();

    if cleaned.is_empty() {
        cleaned.push_str("file");
    }

    match ext {
        Some(ext) => {
            let ext: String = ext.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
            if ext.is_empty() {
                cleaned
            } else {
                format!("{cleaned}.{}", ext.to_lowercase())
            }
        }
        None => cleaned,
    }
}

/// 生成落盘文件名：`<上传时间戳>-<清洗后的文件名>`
pub fn sanitize_stored_name(original: &str, uploaded_at: i64) -> String {
    format!("{uploaded_at}-{}", sanitize_file_name(original))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_becomes_underscore() {
        assert_eq!(sanitize_file_name("my report.pdf"), "my_report.pdf");
        assert_eq!(sanitize_file_name("a b\tc.png"), "a_b_c.png");
    }

    #[test]
    fn test_non_alphanumeric_stripped() {
        assert_eq!(sanitize_file_name("tugas(1)!.docx"), "tugas1.docx");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "etcpasswd");
    }

    #[test]
    fn test_empty_stem_falls_back() {
        assert_eq!(sanitize_file_name("???.png"), "file.png");
        assert_eq!(sanitize_file_name(""), "file");
    }

    #[test]
    fn test_stored_name_has_timestamp_prefix() {
        assert_eq!(
            sanitize_stored_name("final report.pdf", 1735689600),
            "1735689600-final_report.pdf"
        );
    }
}
