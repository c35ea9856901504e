use super::*;
use crate::notify::Variant;
use crate::validation::ErrorMap;

// =========================================================
// 辅助函数
// =========================================================

fn field_errors<F: Form>(form: &F) -> ErrorMap {
    match form.submit() {
        Err(SubmitError::InvalidFields(errors)) => errors,
        other => panic!("expected field errors, got {other:?}"),
    }
}

fn missing_notice<F: Form>(form: &F) -> Notice {
    let err = form.submit().expect_err("submission should be blocked");
    assert!(err.field_errors().is_none());
    err.notice().expect("missing information produces a notice")
}

fn valid_register() -> RegisterForm {
    RegisterForm {
        full_name: "Jessica Smith".to_string(),
        email: "jessica@example.com".to_string(),
        password: "abc123".to_string(),
        confirm_password: "abc123".to_string(),
        phone_number: String::new(),
        emergency_contact_name: "David Smith".to_string(),
        emergency_contact_number: "555-987-6543".to_string(),
    }
}

// =========================================================
// 登录 / 注册
// =========================================================

#[test]
fn test_login_success_signs_in_and_redirects() {
    let form = LoginForm {
        email: " user@example.com".to_string(),
        password: "x".to_string(),
    };
    let done = form.submit().unwrap();
    assert_eq!(done.notice.title, "Login successful!");
    assert_eq!(done.notice.variant, Variant::Default);
    assert_eq!(
        done.then,
        AfterSubmit::SignIn {
            user_id: "user@example.com".to_string(),
            redirect: AppRoute::Dashboard,
        }
    );
}

#[test]
fn test_login_empty_fields() {
    let errors = field_errors(&LoginForm::default());
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));
}

#[test]
fn test_login_invalid_email() {
    for email in ["user@@example", "userexample.com"] {
        let form = LoginForm {
            email: email.to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(field_errors(&form).get("email"), Some("Email is invalid"));
    }
}

#[test]
fn test_register_valid() {
    let done = valid_register().submit().unwrap();
    assert_eq!(done.notice.title, "Registration successful!");
    assert!(matches!(
        done.then,
        AfterSubmit::SignIn {
            redirect: AppRoute::Dashboard,
            ..
        }
    ));
}

#[test]
fn test_register_every_required_field_reports() {
    let errors = field_errors(&RegisterForm::default());
    assert_eq!(errors.get("fullName"), Some("Full Name is required"));
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));
    assert_eq!(
        errors.get("confirmPassword"),
        Some("Please confirm your password")
    );
    assert_eq!(
        errors.get("emergencyContactName"),
        Some("Emergency Contact Name is required")
    );
    assert_eq!(
        errors.get("emergencyContactNumber"),
        Some("Emergency Contact Number is required")
    );
    // 可选字段为空不报错
    assert_eq!(errors.get("phoneNumber"), None);
}

#[test]
fn test_register_password_rules() {
    let mut form = valid_register();
    form.confirm_password = "abc124".to_string();
    assert_eq!(
        field_errors(&form).get("confirmPassword"),
        Some("Passwords do not match")
    );

    let mut form = valid_register();
    form.password = "abc".to_string();
    form.confirm_password = "abc".to_string();
    let errors = field_errors(&form);
    assert_eq!(
        errors.get("password"),
        Some("Password must be at least 6 characters")
    );
    assert_eq!(errors.error_count(), 1);
}

#[test]
fn test_register_phone_digit_range() {
    let cases = [
        ("555-123-4567", true),
        ("12345", false),
        ("123456789", false),
        ("1234567890", true),
        ("123456789012345", true),
        ("1234567890123456", false),
    ];
    for (phone, ok) in cases {
        let mut form = valid_register();
        form.phone_number = phone.to_string();
        assert_eq!(form.submit().is_ok(), ok, "phone {phone}");

        let mut form = valid_register();
        form.emergency_contact_number = phone.to_string();
        let result = form.submit();
        assert_eq!(result.is_ok(), ok, "contact {phone}");
        if !ok {
            assert_eq!(
                result.unwrap_err().field_errors().unwrap().get("emergencyContactNumber"),
                Some("Contact number must have 10-15 digits")
            );
        }
    }
}

#[test]
fn test_failed_submit_leaves_form_untouched() {
    let mut form = valid_register();
    form.email = "broken".to_string();
    let before = form.clone();
    assert!(form.submit().is_err());
    assert_eq!(form, before);
}

// =========================================================
// 个人资料
// =========================================================

#[test]
fn test_contact_defaults_are_valid() {
    let done = ContactForm::default().submit().unwrap();
    assert_eq!(done.then, AfterSubmit::Close);
}

#[test]
fn test_contact_close_keeps_values() {
    let mut form = ContactForm {
        full_name: "Jess".to_string(),
        ..ContactForm::default()
    };
    let done = form.submit().unwrap();
    form.apply(&done.then);
    assert_eq!(form.full_name, "Jess");
}

#[test]
fn test_password_change() {
    let errors = field_errors(&PasswordForm::default());
    assert_eq!(
        errors.get("currentPassword"),
        Some("Current password is required")
    );
    assert_eq!(errors.get("newPassword"), Some("New password is required"));
    assert_eq!(
        errors.get("confirmPassword"),
        Some("Please confirm your new password")
    );

    let mut form = PasswordForm {
        current_password: "old-one".to_string(),
        new_password: "abc123".to_string(),
        confirm_password: "abc123".to_string(),
    };
    let done = form.submit().unwrap();
    assert_eq!(done.then, AfterSubmit::ResetAndClose);
    form.apply(&done.then);
    assert_eq!(form, PasswordForm::default());
}

// =========================================================
// 社区表单
// =========================================================

#[test]
fn test_incident_requires_all_fields() {
    let form = IncidentReportForm {
        location: "5th & Main".to_string(),
        kind: None,
        description: "Followed".to_string(),
    };
    let notice = missing_notice(&form);
    assert_eq!(notice.title, "Missing information");
    assert_eq!(notice.description, "Please complete all required fields.");
    assert!(notice.is_destructive());
}

#[test]
fn test_incident_submit_resets() {
    let mut form = IncidentReportForm {
        location: "5th & Main".to_string(),
        kind: IncidentType::from_value("harassment"),
        description: "Followed".to_string(),
    };
    let done = form.submit().unwrap();
    assert_eq!(done.notice.title, "Report submitted");
    form.apply(&done.then);
    assert_eq!(form, IncidentReportForm::default());
}

#[test]
fn test_incident_type_values() {
    assert_eq!(IncidentType::from_value(""), None);
    assert_eq!(
        IncidentType::from_value("suspicious"),
        Some(IncidentType::Suspicious)
    );
    assert_eq!(IncidentType::Suspicious.label(), "Suspicious Activity");
}

#[test]
fn test_rating_zero_blocks_even_with_text() {
    let form = RouteRatingForm {
        route_name: "Campus walkway".to_string(),
        rating: 0,
        comments: "Bright and busy".to_string(),
    };
    let notice = missing_notice(&form);
    assert!(notice.is_destructive());
    assert_eq!(
        notice.description,
        "Please provide a route name and star rating."
    );
}

#[test]
fn test_rating_submit() {
    let mut form = RouteRatingForm::default();
    form.route_name = "Campus walkway".to_string();
    form.set_rating(9);
    assert_eq!(form.rating, 5);

    let done = form.submit().unwrap();
    assert_eq!(done.notice.title, "Rating submitted");
    form.apply(&done.then);
    assert_eq!(form.rating, 0);
}

#[test]
fn test_story_form() {
    let form = StoryForm {
        title: "Title".to_string(),
        ..StoryForm::default()
    };
    assert!(form.anonymous);
    missing_notice(&form);

    let mut form = StoryForm {
        title: "Title".to_string(),
        content: "Body".to_string(),
        anonymous: false,
    };
    let done = form.submit().unwrap();
    assert_eq!(done.then, AfterSubmit::ResetAndClose);
    form.apply(&done.then);
    assert!(form.anonymous);
    assert!(form.title.is_empty());
}

// =========================================================
// 路线规划
// =========================================================

#[test]
fn test_route_plan_flow() {
    let mut form = RoutePlanForm::default();
    form.set_start("Home".to_string());
    let notice = missing_notice(&form);
    assert_eq!(
        notice.description,
        "Please provide both start and end locations."
    );

    form.set_end("Work".to_string());
    let done = form.submit().unwrap();
    assert_eq!(done.notice.title, "Route calculated!");
    form.apply(&done.then);
    assert!(form.planned);
    assert_eq!(form.summary().unwrap().end, "Work");

    // 修改输入后摘要失效
    form.set_end("Gym".to_string());
    assert!(!form.planned);
    assert_eq!(form.endpoints(), (None, None));
    assert!(form.summary().is_none());
}
