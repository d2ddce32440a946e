//! Masking helpers for values that end up in logs

/// Mask an email address, keeping the first character of the local part
/// and the whole domain.
///
/// # Example
///
/// ```
/// use sb_shared::utils::masking::mask_email;
/// assert_eq!(mask_email("alice@example.com"), "a****@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let mut chars = local.chars();
            let first = chars.next().unwrap_or('*');
            format!("{}{}@{}", first, "*".repeat(chars.count()), domain)
        }
        Some((_, domain)) => format!("@{}", domain),
        None => "*".repeat(email.chars().count()),
    }
}

/// Mask an opaque device token, keeping only its last 6 characters.
pub fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= 6 {
        return "*".repeat(len);
    }
    let tail: String = token.chars().skip(len - 6).collect();
    format!("***{}", tail)
}
