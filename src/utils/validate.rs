use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::notes::entities::NOTE_CONTENT_MAX_LEN;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 校验点评内容：必填且不超过长度上限
pub fn validate_note_content(content: &str) -> Result<(), &'static str> {
    if content.trim().is_empty() {
        return Err("Content is required");
    }
    if content.chars().count() > NOTE_CONTENT_MAX_LEN {
        return Err("Content must be under 300 characters");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    // 1. 长度检查：至少 8 个字符
    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    // 2. 大写字母检查
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    // 3. 小写字母检查
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    // 4. 数字检查
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("trainee@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_validate_password_policy() {
        assert!(validate_password("Passw0rd").is_valid);
        assert!(!validate_password("short1A").is_valid);
        assert!(!validate_password("alllowercase1").is_valid);
        assert!(!validate_password("ALLUPPERCASE1").is_valid);
        assert!(!validate_password("NoDigitsHere").is_valid);
    }

    #[test]
    fn test_validate_note_content() {
        assert!(validate_note_content("Good work on the final project.").is_ok());
        assert!(validate_note_content("   ").is_err());
        assert!(validate_note_content(&"x".repeat(301)).is_err());
        assert!(validate_note_content(&"x".repeat(300)).is_ok());
    }
}
