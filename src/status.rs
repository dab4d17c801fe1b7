//! Status vocabulary and the event-result → status policy.

/// Free plan company cap.
pub const FREE_PLAN_COMPANY_LIMIT: usize = 5;

/// Selection event types.
pub const EVENT_TYPES: [&str; 11] = [
    "ES提出",
    "書類選考",
    "適性検査",
    "GD",
    "一次面接",
    "二次面接",
    "三次面接",
    "最終面接",
    "リクルーター面談",
    "カジュアル面談",
    "その他",
];

/// Selection event results.
pub const RESULT_PENDING: &str = "結果待ち";
pub const RESULT_PASSED: &str = "通過";
pub const RESULT_FAILED: &str = "不通過";

pub const EVENT_RESULTS: [&str; 3] = [RESULT_PENDING, RESULT_PASSED, RESULT_FAILED];

/// Status a company is forced into when any event result is 不通過.
pub const STATUS_REJECTED: &str = "不採用";

/// Status of a freshly registered company.
pub const STATUS_NOT_ENTERED: &str = "未エントリー";

/// Default selection-status list, in display/sort order.
pub const DEFAULT_STATUS_LIST: [&str; 18] = [
    "未エントリー",
    "ES提出前",
    "ES提出後",
    "ES通過",
    "一次面接前",
    "一次面接後",
    "一次通過",
    "二次面接前",
    "二次面接後",
    "二次通過",
    "三次面接前",
    "三次面接後",
    "三次通過",
    "最終面接前",
    "最終面接後",
    "内定",
    "不採用",
    "辞退",
];

/// Color assigned to a custom status when the user does not pick one.
pub const DEFAULT_CUSTOM_STATUS_COLOR: &str = "#6366F1";

/// Position of a status in the default list; unknown (custom) statuses
/// sort after every known one.
pub fn default_status_rank(status: &str) -> usize {
    DEFAULT_STATUS_LIST
        .iter()
        .position(|s| *s == status)
        .unwrap_or(DEFAULT_STATUS_LIST.len())
}

/// Company status implied by an event outcome, if any.
///
/// Only a 通過 result implies anything; 不通過 is handled as a fixed
/// override by the event repository, and 結果待ち implies nothing.
pub fn next_status_after_event(event_type: &str, result: &str) -> Option<&'static str> {
    if result != RESULT_PASSED {
        return None;
    }
    match event_type {
        "ES提出" | "書類選考" => Some("ES通過"),
        "一次面接" => Some("一次通過"),
        "二次面接" => Some("二次通過"),
        "三次面接" => Some("三次通過"),
        "最終面接" => Some("内定"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passed_interview_maps_to_passed_status() {
        assert_eq!(next_status_after_event("一次面接", RESULT_PASSED), Some("一次通過"));
        assert_eq!(next_status_after_event("書類選考", RESULT_PASSED), Some("ES通過"));
        assert_eq!(next_status_after_event("最終面接", RESULT_PASSED), Some("内定"));
    }

    #[test]
    fn pending_or_failed_implies_nothing() {
        assert_eq!(next_status_after_event("一次面接", RESULT_PENDING), None);
        assert_eq!(next_status_after_event("最終面接", RESULT_FAILED), None);
    }

    #[test]
    fn unmapped_event_types_imply_nothing() {
        assert_eq!(next_status_after_event("その他", RESULT_PASSED), None);
        assert_eq!(next_status_after_event("カジュアル面談", RESULT_PASSED), None);
        assert_eq!(next_status_after_event("GD", RESULT_PASSED), None);
    }

    #[test]
    fn custom_statuses_rank_after_all_defaults() {
        assert_eq!(default_status_rank("未エントリー"), 0);
        assert_eq!(default_status_rank("辞退"), 17);
        assert_eq!(default_status_rank("夏インターン"), DEFAULT_STATUS_LIST.len());
    }
}
