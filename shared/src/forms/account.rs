use super::{AfterSubmit, Form, Submitted, text_form};
use crate::route::AppRoute;
use crate::validation::{Check, Rule};

pub(super) const PHONE_DIGITS: Check = Check::DigitCount { min: 10, max: 15 };

// =========================================================
// 登录
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

text_form!(LoginForm {
    "email" => email,
    "password" => password,
});

impl Form for LoginForm {
    const RULES: &'static [Rule] = &[
        Rule::new("email", Check::Required, "Email is required"),
        Rule::new("email", Check::Email, "Email is invalid"),
        Rule::new("password", Check::Required, "Password is required"),
    ];

    fn succeeded(&self) -> Submitted {
        Submitted::new(
            "Login successful!",
            "Welcome back to Serenova.",
            AfterSubmit::SignIn {
                user_id: self.email.trim().to_string(),
                redirect: AppRoute::auth_success_redirect(),
            },
        )
    }
}

// =========================================================
// 注册
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// 可选
    pub phone_number: String,
    pub emergency_contact_name: String,
    pub emergency_contact_number: String,
}

text_form!(RegisterForm {
    "fullName" => full_name,
    "email" => email,
    "password" => password,
    "confirmPassword" => confirm_password,
    "phoneNumber" => phone_number,
    "emergencyContactName" => emergency_contact_name,
    "emergencyContactNumber" => emergency_contact_number,
});

impl Form for RegisterForm {
    const RULES: &'static [Rule] = &[
        Rule::new("fullName", Check::Required, "Full Name is required"),
        Rule::new("email", Check::Required, "Email is required"),
        Rule::new("email", Check::Email, "Email is invalid"),
        Rule::new("password", Check::Required, "Password is required"),
        Rule::new(
            "password",
            Check::MinLength(6),
            "Password must be at least 6 characters",
        ),
        Rule::new(
            "confirmPassword",
            Check::Required,
            "Please confirm your password",
        ),
        Rule::new(
            "confirmPassword",
            Check::SameAs("password"),
            "Passwords do not match",
        ),
        Rule::new(
            "phoneNumber",
            PHONE_DIGITS,
            "Phone number must have 10-15 digits",
        ),
        Rule::new(
            "emergencyContactName",
            Check::Required,
            "Emergency Contact Name is required",
        ),
        Rule::new(
            "emergencyContactNumber",
            Check::Required,
            "Emergency Contact Number is required",
        ),
        Rule::new(
            "emergencyContactNumber",
            PHONE_DIGITS,
            "Contact number must have 10-15 digits",
        ),
    ];

    fn succeeded(&self) -> Submitted {
        Submitted::new(
            "Registration successful!",
            "Your account has been created.",
            AfterSubmit::SignIn {
                user_id: self.email.trim().to_string(),
                redirect: AppRoute::auth_success_redirect(),
            },
        )
    }
}
