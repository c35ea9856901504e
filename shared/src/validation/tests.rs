use super::*;

// =========================================================
// 辅助结构
// =========================================================

struct Signup {
    email: String,
    password: String,
    confirm: String,
    phone: String,
}

impl Signup {
    fn new(email: &str, password: &str, confirm: &str, phone: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            confirm: confirm.to_string(),
            phone: phone.to_string(),
        }
    }
}

impl FormValues for Signup {
    const FIELDS: &'static [&'static str] = &["email", "password", "confirm", "phone"];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "email" => Some(self.email.as_str()),
            "password" => Some(self.password.as_str()),
            "confirm" => Some(self.confirm.as_str()),
            "phone" => Some(self.phone.as_str()),
            _ => None,
        }
    }
}

const RULES: &[Rule] = &[
    Rule::new("email", Check::Required, "Email is required"),
    Rule::new("email", Check::Email, "Email is invalid"),
    Rule::new("password", Check::Required, "Password is required"),
    Rule::new(
        "password",
        Check::MinLength(6),
        "Password must be at least 6 characters",
    ),
    Rule::new("confirm", Check::Required, "Please confirm your password"),
    Rule::new("confirm", Check::SameAs("password"), "Passwords do not match"),
    Rule::new(
        "phone",
        Check::DigitCount { min: 10, max: 15 },
        "Phone number must have 10-15 digits",
    ),
];

// =========================================================
// 基础判断
// =========================================================

#[test]
fn test_email_shape() {
    assert!(is_valid_email("user@example.com"));
    assert!(!is_valid_email("user@@example"));
    assert!(!is_valid_email("userexample.com"));
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("user @example"));
}

#[test]
fn test_digit_count_strips_formatting() {
    assert_eq!(digit_count("555-123-4567"), 10);
    assert_eq!(digit_count("+1 (555) 123-4567"), 11);
    assert_eq!(digit_count("abc"), 0);
}

#[test]
fn test_digit_count_bounds_are_inclusive() {
    let check = Check::DigitCount { min: 10, max: 15 };
    let none = |_: &str| None;
    assert!(check.passes("1234567890", none));
    assert!(check.passes("123456789012345", none));
    assert!(!check.passes("123456789", none));
    assert!(!check.passes("1234567890123456", none));
    assert!(!check.passes("12345", none));
    // 可选字段：空值通过
    assert!(check.passes("", none));
    assert!(check.passes("   ", none));
}

#[test]
fn test_required_treats_whitespace_as_blank() {
    let none = |_: &str| None;
    assert!(!Check::Required.passes("", none));
    assert!(!Check::Required.passes(" \t", none));
    assert!(Check::Required.passes("x", none));
}

#[test]
fn test_min_length_counts_utf16_units() {
    let none = |_: &str| None;
    let check = Check::MinLength(6);
    assert!(check.passes("abc123", none));
    assert!(!check.passes("abc12", none));
    // 每个表情占两个 UTF-16 码元
    assert!(check.passes("😀😀😀", none));
    assert!(!check.passes("😀😀", none));
}

// =========================================================
// 规则引擎
// =========================================================

#[test]
fn test_valid_form_has_no_errors() {
    let form = Signup::new("user@example.com", "abc123", "abc123", "555-123-4567");
    let errors = validate(&form, RULES);
    assert!(errors.is_valid());
    assert_eq!(errors.error_count(), 0);
}

#[test]
fn test_password_mismatch() {
    let form = Signup::new("user@example.com", "abc123", "abc124", "");
    let errors = validate(&form, RULES);
    assert!(!errors.is_valid());
    assert_eq!(errors.get("confirm"), Some("Passwords do not match"));
    assert_eq!(errors.error_count(), 1);
}

#[test]
fn test_all_fields_checked_without_short_circuit() {
    let form = Signup::new("", "", "", "12345");
    let errors = validate(&form, RULES);
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));
    assert_eq!(errors.get("confirm"), Some("Please confirm your password"));
    assert_eq!(
        errors.get("phone"),
        Some("Phone number must have 10-15 digits")
    );
}

#[test]
fn test_first_failing_rule_per_field_wins() {
    // 空邮箱只报 "required"，不会被 "invalid" 覆盖
    let form = Signup::new("", "abc123", "abc123", "");
    let errors = validate(&form, RULES);
    assert_eq!(errors.get("email"), Some("Email is required"));

    let form = Signup::new("nope", "abc", "abc", "");
    let errors = validate(&form, RULES);
    assert_eq!(errors.get("email"), Some("Email is invalid"));
    assert_eq!(
        errors.get("password"),
        Some("Password must be at least 6 characters")
    );
    // 两者相同，确认字段本身合法
    assert_eq!(errors.get("confirm"), None);
}

#[test]
fn test_error_keys_are_form_fields() {
    let form = Signup::new("", "", "", "");
    let errors = validate(&form, RULES);
    let failed: Vec<_> = errors.errors().map(|(f, _)| f).collect();
    assert_eq!(failed, ["email", "password", "confirm"]);
    assert!(failed.iter().all(|f| Signup::FIELDS.contains(f)));
    // 未失败的字段仍在表中，消息为空串
    assert!(!errors.has_error("phone"));
    assert_eq!(errors.message("phone"), "");
}

#[test]
fn test_error_map_ignores_unknown_field() {
    let mut errors = ErrorMap::for_fields(&["a"]);
    assert!(!errors.set("b", "boom"));
    assert!(errors.is_valid());
    assert!(errors.set("a", "boom"));
    assert_eq!(errors.message("a"), "boom");
    assert_eq!(errors.message("b"), "");
}

#[test]
fn test_all_present() {
    let form = Signup::new("a", "b", " ", "d");
    assert!(all_present(&form, &["email", "password"]));
    assert!(!all_present(&form, &["email", "confirm"]));
}
