//! 路线规划占位实现
//!
//! 不做任何地理编码或路径计算：只要起点和终点都已填写，
//! 就返回一段固定的安全摘要。

use crate::validation::is_blank;

/// 固定的路线摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    pub start: String,
    pub end: String,
    pub distance: &'static str,
    pub duration: &'static str,
    pub safety: &'static str,
    pub incidents: &'static str,
}

/// 起点、终点都设置时返回摘要，否则为 `None`
pub fn summarize(start: Option<&str>, end: Option<&str>) -> Option<RouteSummary> {
    let start = start.filter(|s| !is_blank(s))?;
    let end = end.filter(|s| !is_blank(s))?;

    Some(RouteSummary {
        start: start.trim().to_string(),
        end: end.trim().to_string(),
        distance: "2.3 miles",
        duration: "42 minutes walking",
        safety: "Safe",
        incidents: "None in the past month",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_requires_both_ends() {
        assert!(summarize(None, None).is_none());
        assert!(summarize(Some("Home"), None).is_none());
        assert!(summarize(Some(" "), Some("Work")).is_none());
    }

    #[test]
    fn test_summary_is_fixed() {
        let a = summarize(Some("Home "), Some("Work")).unwrap();
        let b = summarize(Some("Elsewhere"), Some("Far away")).unwrap();
        assert_eq!(a.start, "Home");
        assert_eq!(a.distance, b.distance);
        assert_eq!(a.safety, "Safe");
        assert_eq!(b.incidents, "None in the past month");
    }
}
