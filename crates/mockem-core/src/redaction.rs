/// Number of leading characters kept when redacting an opaque token.
const VISIBLE_PREFIX: usize = 8;

/// Redact an opaque token (session id, cookie value) for logs.
///
/// Keeps a short prefix so log lines for the same session can be correlated.
pub fn redact_token(token: &str) -> String {
    let prefix: String = token.chars().take(VISIBLE_PREFIX).collect();
    if prefix.len() == token.len() {
        "***".to_string()
    } else {
        format!("{prefix}***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_prefix_of_long_tokens() {
        let token = "a1b2c3d4e5f60718293a4b5c6d7e8f90";
        assert_eq!(redact_token(token), "a1b2c3d4***");
    }

    #[test]
    fn hides_short_tokens_entirely() {
        assert_eq!(redact_token("abc"), "***");
        assert_eq!(redact_token(""), "***");
    }
}
