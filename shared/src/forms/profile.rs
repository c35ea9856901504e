use super::account::PHONE_DIGITS;
use super::{AfterSubmit, Form, Submitted, text_form};
use crate::validation::{Check, Rule};

/// 个人资料中的联系方式，默认值为示例用户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub emergency_contact_name: String,
    pub emergency_contact_number: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            full_name: "Jessica Smith".to_string(),
            email: "jessica@example.com".to_string(),
            phone_number: "555-123-4567".to_string(),
            emergency_contact_name: "David Smith".to_string(),
            emergency_contact_number: "555-987-6543".to_string(),
        }
    }
}

text_form!(ContactForm {
    "fullName" => full_name,
    "email" => email,
    "phoneNumber" => phone_number,
    "emergencyContactName" => emergency_contact_name,
    "emergencyContactNumber" => emergency_contact_number,
});

impl Form for ContactForm {
    const RULES: &'static [Rule] = &[
        Rule::new("fullName", Check::Required, "Full Name is required"),
        Rule::new("email", Check::Required, "Email is required"),
        Rule::new("email", Check::Email, "Email is invalid"),
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
            "Profile updated",
            "Your contact information has been updated successfully.",
            AfterSubmit::Close,
        )
    }
}

/// 修改密码面板
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

text_form!(PasswordForm {
    "currentPassword" => current_password,
    "newPassword" => new_password,
    "confirmPassword" => confirm_password,
});

impl Form for PasswordForm {
    const RULES: &'static [Rule] = &[
        Rule::new(
            "currentPassword",
            Check::Required,
            "Current password is required",
        ),
        Rule::new("newPassword", Check::Required, "New password is required"),
        Rule::new(
            "newPassword",
            Check::MinLength(6),
            "Password must be at least 6 characters",
        ),
        Rule::new(
            "confirmPassword",
            Check::Required,
            "Please confirm your new password",
        ),
        Rule::new(
            "confirmPassword",
            Check::SameAs("newPassword"),
            "Passwords do not match",
        ),
    ];

    fn succeeded(&self) -> Submitted {
        Submitted::new(
            "Password updated",
            "Your password has been changed successfully.",
            AfterSubmit::ResetAndClose,
        )
    }
}
