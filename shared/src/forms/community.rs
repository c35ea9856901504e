use super::{AfterSubmit, Form, Submitted, require_present, text_form};
use crate::error::SubmitError;
use crate::validation::{FormValues, is_blank};

// =========================================================
// 事件上报
// =========================================================

/// 可上报的事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncidentType {
    Harassment,
    Theft,
    Assault,
    Suspicious,
    Other,
}

impl IncidentType {
    pub const ALL: [IncidentType; 5] = [
        Self::Harassment,
        Self::Theft,
        Self::Assault,
        Self::Suspicious,
        Self::Other,
    ];

    /// 表单提交值
    pub fn value(&self) -> &'static str {
        match self {
            Self::Harassment => "harassment",
            Self::Theft => "theft",
            Self::Assault => "assault",
            Self::Suspicious => "suspicious",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Harassment => "Harassment",
            Self::Theft => "Theft",
            Self::Assault => "Assault",
            Self::Suspicious => "Suspicious Activity",
            Self::Other => "Other",
        }
    }

    /// 未知值（包括占位选项的空串）返回 `None`
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentReportForm {
    pub location: String,
    pub kind: Option<IncidentType>,
    pub description: String,
}

impl FormValues for IncidentReportForm {
    const FIELDS: &'static [&'static str] = &["location", "type", "description"];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "location" => Some(self.location.as_str()),
            "type" => Some(self.kind.map(|k| k.value()).unwrap_or_default()),
            "description" => Some(self.description.as_str()),
            _ => None,
        }
    }
}

impl Form for IncidentReportForm {
    fn check(&self) -> Result<(), SubmitError> {
        require_present(self, Self::FIELDS, "Please complete all required fields.")
    }

    fn succeeded(&self) -> Submitted {
        Submitted::new(
            "Report submitted",
            "Thank you for contributing to community safety.",
            AfterSubmit::Reset,
        )
    }
}

// =========================================================
// 路线评分
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRatingForm {
    pub route_name: String,
    /// 0 表示尚未选择
    pub rating: u8,
    /// 可选
    pub comments: String,
}

impl RouteRatingForm {
    pub const MAX_RATING: u8 = 5;

    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating.min(Self::MAX_RATING);
    }
}

text_form!(RouteRatingForm {
    "routeName" => route_name,
    "comments" => comments,
});

impl Form for RouteRatingForm {
    fn check(&self) -> Result<(), SubmitError> {
        if is_blank(&self.route_name) || self.rating == 0 {
            return Err(SubmitError::missing(
                "Please provide a route name and star rating.",
            ));
        }
        Ok(())
    }

    fn succeeded(&self) -> Submitted {
        Submitted::new(
            "Rating submitted",
            "Thank you for rating this route for the community.",
            AfterSubmit::Reset,
        )
    }
}

// =========================================================
// 幸存者故事
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryForm {
    pub title: String,
    pub content: String,
    pub anonymous: bool,
}

impl Default for StoryForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            anonymous: true,
        }
    }
}

text_form!(StoryForm {
    "title" => title,
    "content" => content,
});

impl Form for StoryForm {
    fn check(&self) -> Result<(), SubmitError> {
        require_present(
            self,
            Self::FIELDS,
            "Please provide both a title and content for your story.",
        )
    }

    fn succeeded(&self) -> Submitted {
        Submitted::new(
            "Story posted",
            "Thank you for sharing your experience with our community.",
            AfterSubmit::ResetAndClose,
        )
    }
}
