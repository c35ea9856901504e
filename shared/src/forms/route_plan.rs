use super::{AfterSubmit, Form, Submitted, require_present, text_form};
use crate::error::SubmitError;
use crate::planner::{RouteSummary, summarize};
use crate::validation::FormValues;

/// 路线规划表单（公开页和登录后页面共用）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutePlanForm {
    pub start_location: String,
    pub end_location: String,
    /// 已提交且输入未再变动
    pub planned: bool,
}

impl RoutePlanForm {
    /// 修改任一端点都会让已有的路线摘要失效
    pub fn set_start(&mut self, value: String) {
        self.start_location = value;
        self.planned = false;
    }

    pub fn set_end(&mut self, value: String) {
        self.end_location = value;
        self.planned = false;
    }

    /// 地图组件使用的端点：未规划时为 `None`
    pub fn endpoints(&self) -> (Option<&str>, Option<&str>) {
        if self.planned {
            (
                Some(self.start_location.as_str()),
                Some(self.end_location.as_str()),
            )
        } else {
            (None, None)
        }
    }

    pub fn summary(&self) -> Option<RouteSummary> {
        let (start, end) = self.endpoints();
        summarize(start, end)
    }
}

text_form!(RoutePlanForm {
    "startLocation" => start_location,
    "endLocation" => end_location,
});

impl Form for RoutePlanForm {
    fn check(&self) -> Result<(), SubmitError> {
        require_present(
            self,
            Self::FIELDS,
            "Please provide both start and end locations.",
        )
    }

    fn succeeded(&self) -> Submitted {
        Submitted::new(
            "Route calculated!",
            "We've found the safest path for your journey.",
            AfterSubmit::ShowRoute,
        )
    }

    fn apply(&mut self, then: &AfterSubmit) {
        if *then == AfterSubmit::ShowRoute {
            self.planned = true;
        }
    }
}
