use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub company_name: String,
    pub login_id: Option<String>, // my-page login
    pub my_page_url: Option<String>,
    pub entry_date: Option<String>,          // date only, ISO 8601
    pub next_interview_date: Option<String>, // date + time, ISO 8601
    pub position: Option<String>,
    pub es_content: Option<String>, // entry sheet actually submitted
    pub motivation: Option<String>,
    pub notes: Option<String>,
    pub status: String, // default or custom status name
    pub sort_order: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields the caller supplies at creation; id, sort order and timestamps
/// are assigned by the repository.
#[derive(Debug, Clone, Default)]
pub struct CompanyInput {
    pub company_name: String,
    pub login_id: Option<String>,
    pub my_page_url: Option<String>,
    pub entry_date: Option<String>,
    pub next_interview_date: Option<String>,
    pub position: Option<String>,
    pub es_content: Option<String>,
    pub motivation: Option<String>,
    pub notes: Option<String>,
    pub status: String,
}

/// Partial update: `None` keeps the stored value. Optional columns use a
/// double `Option` so "clear this field" and "leave it alone" stay distinct.
#[derive(Debug, Clone, Default)]
pub struct CompanyUpdate {
    pub company_name: Option<String>,
    pub login_id: Option<Option<String>>,
    pub my_page_url: Option<Option<String>>,
    pub entry_date: Option<Option<String>>,
    pub next_interview_date: Option<Option<String>>,
    pub position: Option<Option<String>>,
    pub es_content: Option<Option<String>>,
    pub motivation: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomStatus {
    pub id: i64,
    pub name: String,
    pub color: String, // hex, stored as-is
    pub sort_order: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionEvent {
    pub id: String,
    pub company_id: String,
    pub event_type: String,         // ES提出, 一次面接, ...
    pub event_date: Option<String>, // may be logged before it is scheduled
    pub result: String,             // 結果待ち, 通過, 不通過
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct SelectionEventInput {
    pub company_id: String,
    pub event_type: String,
    pub event_date: Option<String>,
    pub result: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionEventUpdate {
    pub event_type: Option<String>,
    pub event_date: Option<Option<String>>,
    pub result: Option<String>,
    pub notes: Option<Option<String>>,
}
