//! Built-in detection rule table.
//!
//! Pure data: 18 rules across 8 categories, in fixed declaration order.
//! The order is load-bearing only for duplicate-name resolution at the
//! match-reporting stage (first matcher with a given name wins).
//!
//! All patterns are compiled case-insensitively by the scanner.

/// `(name, category, pattern)` rows for the built-in rule set.
pub(crate) const BUILTIN_RULES: &[(&str, &str, &str)] = &[
    // API keys and service tokens
    ("github_token", "API Key", r"ghp_[A-Za-z0-9_]{36,}"),
    ("gitlab_token", "API Key", r"glpat-[A-Za-z0-9_\-]{16,}"),
    ("aws_access_key", "API Key", r"\bAKIA[0-9A-Z]{16}\b"),
    ("anthropic_api_key", "API Key", r"sk-ant-[A-Za-z0-9_\-]{10,}"),
    ("openai_api_key", "API Key", r"\bsk-[A-Za-z0-9]{32,}\b"),
    ("slack_token", "API Key", r"xox[baprs]-[A-Za-z0-9\-]{10,}"),
    (
        "generic_api_key",
        "API Key",
        r#"(?:api[_-]?key|api[_-]?token|access[_-]?token)['"]?\s*[:=]\s*['"]?[A-Za-z0-9_\-]{16,}"#,
    ),
    // Credentials
    (
        "password_assignment",
        "Credential",
        r#"(?:password|passwd|pwd)['"]?\s*[:=]\s*['"]?[^\s'"]{6,}"#,
    ),
    ("bearer_token", "Credential", r"bearer\s+[A-Za-z0-9_\-.=]{20,}"),
    // Key material
    (
        "private_key_block",
        "Private Key",
        r"-----BEGIN (?:[A-Z]+ )?PRIVATE KEY-----",
    ),
    // PII
    ("us_ssn", "SSN", r"\b\d{3}-\d{2}-\d{4}\b"),
    ("payment_card", "Credit Card", r"\b(?:\d{4}[-\s]?){3}\d{4}\b"),
    ("visa_card", "Credit Card", r"\b4\d{15}\b"),
    // Connection strings
    (
        "mongodb_url",
        "Connection String",
        r"mongodb(?:\+srv)?://\S+",
    ),
    (
        "sql_url",
        "Connection String",
        r"(?:postgres(?:ql)?|mysql)://\S+",
    ),
    ("redis_url", "Connection String", r"redis://\S+"),
    // Network
    (
        "ipv4_address",
        "Network",
        r"\b(?:(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\b",
    ),
    // Contact
    (
        "email_address",
        "Email",
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
    ),
];
