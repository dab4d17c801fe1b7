//! Repositories over the SQLite store.
//!
//! The company repository owns the free-plan cap, manual ordering and the
//! reminder collaborator calls; the selection-event repository owns the
//! status cascade (event outcome pushed onto the owning company). The
//! cascade is one-way: editing or deleting an event never re-derives a
//! company's status from history.

use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

use crate::db::Database;
use crate::error::RepoError;
use crate::models::{
    Company, CompanyInput, CompanyUpdate, CustomStatus, SelectionEvent, SelectionEventInput,
    SelectionEventUpdate,
};
use crate::notify::ReminderScheduler;
use crate::status::{
    default_status_rank, next_status_after_event, FREE_PLAN_COMPANY_LIMIT, DEFAULT_STATUS_LIST,
    RESULT_FAILED, RESULT_PASSED, STATUS_REJECTED,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortType {
    /// User-managed order (drag order in the original app).
    #[default]
    Manual,
    /// Earliest selection stage first.
    StatusAsc,
    /// Latest selection stage first.
    StatusDesc,
    /// Soonest upcoming interview first; companies without one last.
    Interview,
}

fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

// --- Companies ---

pub struct CompanyRepo<'a> {
    db: &'a Database,
    reminders: &'a dyn ReminderScheduler,
}

impl<'a> CompanyRepo<'a> {
    pub fn new(db: &'a Database, reminders: &'a dyn ReminderScheduler) -> Self {
        Self { db, reminders }
    }

    pub fn list(&self, sort: SortType) -> Result<Vec<Company>> {
        match sort {
            SortType::Manual => self.db.all_companies("sortOrder ASC, updatedAt DESC"),
            SortType::Interview => self.db.all_companies(
                "CASE WHEN nextInterviewDate IS NULL THEN 1 ELSE 0 END, \
                 nextInterviewDate ASC, updatedAt DESC",
            ),
            SortType::StatusAsc | SortType::StatusDesc => {
                // Status rank lives in the app, not the store: custom
                // statuses have no column to order by. Stable sort keeps
                // the manual order within a rank.
                let mut companies = self.db.all_companies("sortOrder ASC")?;
                if sort == SortType::StatusAsc {
                    companies.sort_by_key(|c| default_status_rank(&c.status));
                } else {
                    companies.sort_by_key(|c| std::cmp::Reverse(default_status_rank(&c.status)));
                }
                Ok(companies)
            }
        }
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Company>> {
        self.db.get_company(id)
    }

    pub fn get_by_status(&self, status: &str) -> Result<Vec<Company>> {
        self.db.companies_by_status(status)
    }

    pub fn create(&self, input: CompanyInput) -> Result<Company> {
        if self.db.count_companies()? >= FREE_PLAN_COMPANY_LIMIT {
            return Err(RepoError::LimitExceeded {
                limit: FREE_PLAN_COMPANY_LIMIT,
            }
            .into());
        }

        let now = now_iso();
        let sort_order = self.db.max_company_sort_order()?.map_or(0, |max| max + 1);
        let company = Company {
            id: Uuid::new_v4().to_string(),
            company_name: input.company_name,
            login_id: input.login_id,
            my_page_url: input.my_page_url,
            entry_date: input.entry_date,
            next_interview_date: input.next_interview_date,
            position: input.position,
            es_content: input.es_content,
            motivation: input.motivation,
            notes: input.notes,
            status: input.status,
            sort_order,
            created_at: now.clone(),
            updated_at: now,
        };
        self.db.insert_company(&company)?;

        if company.next_interview_date.is_some() {
            self.sync_reminder(&company);
        }
        Ok(company)
    }

    pub fn update(&self, id: &str, updates: CompanyUpdate) -> Result<Option<Company>> {
        let Some(mut company) = self.db.get_company(id)? else {
            return Ok(None);
        };

        if let Some(v) = updates.company_name {
            company.company_name = v;
        }
        if let Some(v) = updates.login_id {
            company.login_id = v;
        }
        if let Some(v) = updates.my_page_url {
            company.my_page_url = v;
        }
        if let Some(v) = updates.entry_date {
            company.entry_date = v;
        }
        if let Some(v) = updates.next_interview_date {
            company.next_interview_date = v;
        }
        if let Some(v) = updates.position {
            company.position = v;
        }
        if let Some(v) = updates.es_content {
            company.es_content = v;
        }
        if let Some(v) = updates.motivation {
            company.motivation = v;
        }
        if let Some(v) = updates.notes {
            company.notes = v;
        }
        if let Some(v) = updates.status {
            company.status = v;
        }
        company.updated_at = now_iso();

        self.db.update_company(&company)?;
        self.sync_reminder(&company);
        Ok(Some(company))
    }

    /// Cascade-removes the company's selection events at the store level.
    /// Any pending reminder is left behind; it dies unconsumed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        self.db.delete_company(id)
    }

    /// Assigns `sortOrder = position` for each listed id, one write per id.
    /// Ids not listed keep their prior order value.
    pub fn reorder(&self, ordered_ids: &[String]) -> Result<()> {
        for (index, id) in ordered_ids.iter().enumerate() {
            self.db.set_company_sort_order(id, index as i64)?;
        }
        Ok(())
    }

    /// A reminder failure must never fail the company write; warn and move on.
    fn sync_reminder(&self, company: &Company) {
        let outcome = match &company.next_interview_date {
            Some(at) => self
                .reminders
                .schedule_interview_reminder(&company.id, &company.company_name, at)
                .map(|_| ()),
            None => self.reminders.cancel_interview_reminder(&company.id),
        };
        if let Err(e) = outcome {
            eprintln!(
                "warning: reminder update failed for {}: {e:#}",
                company.company_name
            );
        }
    }
}

// --- Custom statuses ---

pub struct CustomStatusRegistry<'a> {
    db: &'a Database,
}

impl<'a> CustomStatusRegistry<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn list(&self) -> Result<Vec<CustomStatus>> {
        self.db.all_custom_statuses()
    }

    pub fn add(&self, name: &str, color: &str) -> Result<CustomStatus> {
        let now = now_iso();
        let sort_order = self
            .db
            .max_custom_status_sort_order()?
            .map_or(0, |max| max + 1);

        match self.db.insert_custom_status(name, color, sort_order, &now) {
            Ok(id) => Ok(CustomStatus {
                id,
                name: name.to_string(),
                color: color.to_string(),
                sort_order,
                created_at: now,
            }),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(RepoError::DuplicateName {
                    name: name.to_string(),
                }
                .into())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn remove(&self, id: i64) -> Result<bool> {
        self.db.delete_custom_status(id)
    }

    /// Vocabulary offered at status-assignment time: the fixed defaults
    /// followed by every registered custom name.
    pub fn available_statuses(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = DEFAULT_STATUS_LIST.iter().map(|s| s.to_string()).collect();
        names.extend(self.list()?.into_iter().map(|s| s.name));
        Ok(names)
    }
}

// --- Selection events ---

pub struct SelectionEventRepo<'a> {
    db: &'a Database,
    reminders: &'a dyn ReminderScheduler,
}

impl<'a> SelectionEventRepo<'a> {
    pub fn new(db: &'a Database, reminders: &'a dyn ReminderScheduler) -> Self {
        Self { db, reminders }
    }

    pub fn list_by_company(&self, company_id: &str) -> Result<Vec<SelectionEvent>> {
        self.db.events_by_company(company_id)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<SelectionEvent>> {
        self.db.get_event(id)
    }

    pub fn create(&self, input: SelectionEventInput) -> Result<SelectionEvent> {
        let event = SelectionEvent {
            id: Uuid::new_v4().to_string(),
            company_id: input.company_id,
            event_type: input.event_type,
            event_date: input.event_date,
            result: input.result,
            notes: input.notes,
            created_at: now_iso(),
        };
        self.db.insert_event(&event)?;
        self.apply_cascade(&event)?;
        Ok(event)
    }

    pub fn update(&self, id: &str, updates: SelectionEventUpdate) -> Result<Option<SelectionEvent>> {
        let Some(mut event) = self.db.get_event(id)? else {
            return Ok(None);
        };
        let prior_result = event.result.clone();

        if let Some(v) = updates.event_type {
            event.event_type = v;
        }
        if let Some(v) = updates.event_date {
            event.event_date = v;
        }
        if let Some(v) = updates.result {
            event.result = v;
        }
        if let Some(v) = updates.notes {
            event.notes = v;
        }
        self.db.update_event(&event)?;

        // The cascade re-fires only on an actual result change, judged
        // against the stored value, and uses the updated event type.
        if event.result != prior_result {
            self.apply_cascade(&event)?;
        }
        Ok(Some(event))
    }

    /// Does not touch the owning company's status, even when this event is
    /// the one that set it.
    pub fn delete(&self, id: &str) -> Result<bool> {
        self.db.delete_event(id)
    }

    /// 通過 pushes the policy status (if the event type maps to one);
    /// 不通過 forces 不採用 whatever the event type; 結果待ち does nothing.
    fn apply_cascade(&self, event: &SelectionEvent) -> Result<()> {
        let next_status = if event.result == RESULT_FAILED {
            Some(STATUS_REJECTED)
        } else if event.result == RESULT_PASSED {
            next_status_after_event(&event.event_type, &event.result)
        } else {
            None
        };

        if let Some(status) = next_status {
            let companies = CompanyRepo::new(self.db, self.reminders);
            companies.update(
                &event.company_id,
                CompanyUpdate {
                    status: Some(status.to_string()),
                    ..Default::default()
                },
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{RESULT_PENDING, STATUS_NOT_ENTERED};
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Records collaborator calls instead of scheduling anything.
    #[derive(Default)]
    struct RecordingScheduler {
        calls: RefCell<Vec<String>>,
        fail: bool,
    }

    impl ReminderScheduler for RecordingScheduler {
        fn schedule_interview_reminder(
            &self,
            company_id: &str,
            _company_name: &str,
            interview_at: &str,
        ) -> Result<Option<String>> {
            if self.fail {
                anyhow::bail!("scheduler down");
            }
            self.calls
                .borrow_mut()
                .push(format!("schedule {company_id} {interview_at}"));
            Ok(Some(format!("interview-{company_id}")))
        }

        fn cancel_interview_reminder(&self, company_id: &str) -> Result<()> {
            if self.fail {
                anyhow::bail!("scheduler down");
            }
            self.calls.borrow_mut().push(format!("cancel {company_id}"));
            Ok(())
        }
    }

    struct Fixture {
        _dir: TempDir,
        db: Database,
        scheduler: RecordingScheduler,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().expect("create temp dir");
            let db = Database::open_at(&dir.path().join("shukatsu.db")).expect("open db");
            Self {
                _dir: dir,
                db,
                scheduler: RecordingScheduler::default(),
            }
        }

        fn companies(&self) -> CompanyRepo<'_> {
            CompanyRepo::new(&self.db, &self.scheduler)
        }

        fn events(&self) -> SelectionEventRepo<'_> {
            SelectionEventRepo::new(&self.db, &self.scheduler)
        }

        fn statuses(&self) -> CustomStatusRegistry<'_> {
            CustomStatusRegistry::new(&self.db)
        }
    }

    fn input(name: &str) -> CompanyInput {
        CompanyInput {
            company_name: name.to_string(),
            status: STATUS_NOT_ENTERED.to_string(),
            ..Default::default()
        }
    }

    fn event_input(company_id: &str, event_type: &str, result: &str) -> SelectionEventInput {
        SelectionEventInput {
            company_id: company_id.to_string(),
            event_type: event_type.to_string(),
            event_date: Some("2025-06-01".to_string()),
            result: result.to_string(),
            notes: None,
        }
    }

    #[test]
    fn create_assigns_dense_increasing_sort_order() {
        let fx = Fixture::new();
        let first = fx.companies().create(input("A社")).expect("create A");
        let second = fx.companies().create(input("B社")).expect("create B");

        assert_eq!(first.sort_order, 0);
        assert_eq!(second.sort_order, 1);

        let found = fx
            .companies()
            .get_by_id(&second.id)
            .expect("get")
            .expect("exists");
        assert_eq!(found.sort_order, 1);
    }

    #[test]
    fn sixth_company_hits_the_free_plan_cap() {
        let fx = Fixture::new();
        for i in 0..5 {
            fx.companies()
                .create(input(&format!("会社{i}")))
                .expect("create within cap");
        }

        let err = fx.companies().create(input("6社目")).expect_err("over cap");
        assert_eq!(
            err.downcast_ref::<RepoError>(),
            Some(&RepoError::LimitExceeded { limit: 5 })
        );
        assert_eq!(fx.companies().list(SortType::Manual).expect("list").len(), 5);
    }

    #[test]
    fn missing_ids_are_none_or_false() {
        let fx = Fixture::new();
        assert!(fx.companies().get_by_id("ghost").expect("get").is_none());
        assert!(fx
            .companies()
            .update("ghost", CompanyUpdate::default())
            .expect("update")
            .is_none());
        assert!(!fx.companies().delete("ghost").expect("delete"));
    }

    #[test]
    fn update_merges_partial_fields_and_keeps_the_rest() {
        let fx = Fixture::new();
        let mut inp = input("A社");
        inp.position = Some("バックエンド".to_string());
        let company = fx.companies().create(inp).expect("create");

        let updated = fx
            .companies()
            .update(
                &company.id,
                CompanyUpdate {
                    notes: Some(Some("説明会に参加".to_string())),
                    ..Default::default()
                },
            )
            .expect("update")
            .expect("exists");

        assert_eq!(updated.position.as_deref(), Some("バックエンド"));
        assert_eq!(updated.notes.as_deref(), Some("説明会に参加"));
        assert_eq!(updated.company_name, "A社");
    }

    #[test]
    fn reorder_is_reflected_by_manual_listing() {
        let fx = Fixture::new();
        let c1 = fx.companies().create(input("A社")).expect("create");
        let c2 = fx.companies().create(input("B社")).expect("create");
        let c3 = fx.companies().create(input("C社")).expect("create");

        fx.companies()
            .reorder(&[c3.id.clone(), c1.id.clone(), c2.id.clone()])
            .expect("reorder");

        let listed = fx.companies().list(SortType::Manual).expect("list");
        let ids: Vec<&str> = listed.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, [c3.id.as_str(), c1.id.as_str(), c2.id.as_str()]);
    }

    #[test]
    fn interview_sort_puts_undated_companies_last() {
        let fx = Fixture::new();
        let mut later = input("のんびり社");
        later.next_interview_date = Some("2999-07-01T10:00".to_string());
        let dated_late = fx.companies().create(later).expect("create");

        // No interview date, but the lowest sortOrder would win a manual sort.
        let undated = fx.companies().create(input("未定社")).expect("create");
        fx.companies()
            .reorder(&[undated.id.clone()])
            .expect("reorder");

        let mut sooner = input("いそがし社");
        sooner.next_interview_date = Some("2999-06-01T10:00".to_string());
        let dated_soon = fx.companies().create(sooner).expect("create");

        let listed = fx.companies().list(SortType::Interview).expect("list");
        let ids: Vec<&str> = listed.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            [dated_soon.id.as_str(), dated_late.id.as_str(), undated.id.as_str()]
        );
    }

    #[test]
    fn status_sort_ranks_by_default_vocabulary_with_custom_last() {
        let fx = Fixture::new();
        let offer = fx.companies().create(input("内定社")).expect("create");
        fx.companies()
            .update(
                &offer.id,
                CompanyUpdate {
                    status: Some("内定".to_string()),
                    ..Default::default()
                },
            )
            .expect("update");
        let fresh = fx.companies().create(input("未応募社")).expect("create");
        let custom = fx.companies().create(input("インターン社")).expect("create");
        fx.companies()
            .update(
                &custom.id,
                CompanyUpdate {
                    status: Some("夏インターン".to_string()),
                    ..Default::default()
                },
            )
            .expect("update");

        let asc = fx.companies().list(SortType::StatusAsc).expect("list");
        let ids: Vec<&str> = asc.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, [fresh.id.as_str(), offer.id.as_str(), custom.id.as_str()]);

        let desc = fx.companies().list(SortType::StatusDesc).expect("list");
        assert_eq!(desc.first().map(|c| c.id.as_str()), Some(custom.id.as_str()));
    }

    #[test]
    fn get_by_status_filters_exact_matches() {
        let fx = Fixture::new();
        let a = fx.companies().create(input("A社")).expect("create");
        fx.companies().create(input("B社")).expect("create");
        fx.companies()
            .update(
                &a.id,
                CompanyUpdate {
                    status: Some("内定".to_string()),
                    ..Default::default()
                },
            )
            .expect("update");

        let offers = fx.companies().get_by_status("内定").expect("filter");
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].id, a.id);
    }

    #[test]
    fn create_with_interview_date_schedules_a_reminder() {
        let fx = Fixture::new();
        let mut inp = input("A社");
        inp.next_interview_date = Some("2999-06-01T10:00".to_string());
        let company = fx.companies().create(inp).expect("create");

        let calls = fx.scheduler.calls.borrow();
        assert_eq!(
            calls.as_slice(),
            [format!("schedule {} 2999-06-01T10:00", company.id)]
        );
    }

    #[test]
    fn clearing_the_interview_date_cancels_the_reminder() {
        let fx = Fixture::new();
        let mut inp = input("A社");
        inp.next_interview_date = Some("2999-06-01T10:00".to_string());
        let company = fx.companies().create(inp).expect("create");

        fx.companies()
            .update(
                &company.id,
                CompanyUpdate {
                    next_interview_date: Some(None),
                    ..Default::default()
                },
            )
            .expect("update");

        let calls = fx.scheduler.calls.borrow();
        let expected = format!("cancel {}", company.id);
        assert_eq!(calls.last(), Some(&expected));
    }

    #[test]
    fn scheduler_failures_never_fail_the_company_write() {
        let fx = Fixture::new();
        let broken = RecordingScheduler {
            fail: true,
            ..Default::default()
        };
        let companies = CompanyRepo::new(&fx.db, &broken);

        let mut inp = input("A社");
        inp.next_interview_date = Some("2999-06-01T10:00".to_string());
        let company = companies.create(inp).expect("create succeeds anyway");
        assert!(companies.get_by_id(&company.id).expect("get").is_some());
    }

    #[test]
    fn failed_event_forces_rejected_regardless_of_type() {
        let fx = Fixture::new();
        let company = fx.companies().create(input("A社")).expect("create");

        fx.events()
            .create(event_input(&company.id, "カジュアル面談", RESULT_FAILED))
            .expect("create event");

        let reloaded = fx
            .companies()
            .get_by_id(&company.id)
            .expect("get")
            .expect("exists");
        assert_eq!(reloaded.status, STATUS_REJECTED);
    }

    #[test]
    fn passed_final_interview_means_offer() {
        let fx = Fixture::new();
        let company = fx.companies().create(input("A社")).expect("create");

        fx.events()
            .create(event_input(&company.id, "最終面接", RESULT_PASSED))
            .expect("create event");

        let reloaded = fx
            .companies()
            .get_by_id(&company.id)
            .expect("get")
            .expect("exists");
        assert_eq!(reloaded.status, "内定");
    }

    #[test]
    fn pending_or_unmapped_events_leave_status_alone() {
        let fx = Fixture::new();
        let company = fx.companies().create(input("A社")).expect("create");

        fx.events()
            .create(event_input(&company.id, "一次面接", RESULT_PENDING))
            .expect("pending event");
        fx.events()
            .create(event_input(&company.id, "その他", RESULT_PASSED))
            .expect("unmapped passed event");

        let reloaded = fx
            .companies()
            .get_by_id(&company.id)
            .expect("get")
            .expect("exists");
        assert_eq!(reloaded.status, STATUS_NOT_ENTERED);
    }

    #[test]
    fn result_change_recascades_but_notes_edit_does_not() {
        let fx = Fixture::new();
        let company = fx.companies().create(input("A社")).expect("create");
        let event = fx
            .events()
            .create(event_input(&company.id, "一次面接", RESULT_PENDING))
            .expect("create event");

        fx.events()
            .update(
                &event.id,
                SelectionEventUpdate {
                    result: Some(RESULT_PASSED.to_string()),
                    ..Default::default()
                },
            )
            .expect("update")
            .expect("exists");
        let after_pass = fx
            .companies()
            .get_by_id(&company.id)
            .expect("get")
            .expect("exists");
        assert_eq!(after_pass.status, "一次通過");

        // Hand-set status, then a same-result edit must not re-fire the cascade.
        fx.companies()
            .update(
                &company.id,
                CompanyUpdate {
                    status: Some("辞退".to_string()),
                    ..Default::default()
                },
            )
            .expect("manual status");
        fx.events()
            .update(
                &event.id,
                SelectionEventUpdate {
                    result: Some(RESULT_PASSED.to_string()),
                    notes: Some(Some("お礼メール送付".to_string())),
                    ..Default::default()
                },
            )
            .expect("update")
            .expect("exists");

        let reloaded = fx
            .companies()
            .get_by_id(&company.id)
            .expect("get")
            .expect("exists");
        assert_eq!(reloaded.status, "辞退");
    }

    #[test]
    fn cascade_on_update_uses_the_updated_event_type() {
        let fx = Fixture::new();
        let company = fx.companies().create(input("A社")).expect("create");
        let event = fx
            .events()
            .create(event_input(&company.id, "一次面接", RESULT_PENDING))
            .expect("create event");

        fx.events()
            .update(
                &event.id,
                SelectionEventUpdate {
                    event_type: Some("二次面接".to_string()),
                    result: Some(RESULT_PASSED.to_string()),
                    ..Default::default()
                },
            )
            .expect("update")
            .expect("exists");

        let reloaded = fx
            .companies()
            .get_by_id(&company.id)
            .expect("get")
            .expect("exists");
        assert_eq!(reloaded.status, "二次通過");
    }

    #[test]
    fn deleting_an_event_does_not_roll_back_status() {
        let fx = Fixture::new();
        let company = fx.companies().create(input("A社")).expect("create");
        let event = fx
            .events()
            .create(event_input(&company.id, "最終面接", RESULT_PASSED))
            .expect("create event");

        assert!(fx.events().delete(&event.id).expect("delete"));

        let reloaded = fx
            .companies()
            .get_by_id(&company.id)
            .expect("get")
            .expect("exists");
        assert_eq!(reloaded.status, "内定");
    }

    #[test]
    fn deleting_a_company_cascades_its_events() {
        let fx = Fixture::new();
        let company = fx.companies().create(input("A社")).expect("create");
        fx.events()
            .create(event_input(&company.id, "ES提出", RESULT_PENDING))
            .expect("create event");
        fx.events()
            .create(event_input(&company.id, "一次面接", RESULT_PENDING))
            .expect("create event");

        assert!(fx.companies().delete(&company.id).expect("delete"));
        assert!(fx
            .events()
            .list_by_company(&company.id)
            .expect("list")
            .is_empty());
    }

    #[test]
    fn duplicate_custom_status_is_rejected_and_registry_unchanged() {
        let fx = Fixture::new();
        fx.statuses().add("夏インターン", "#6366F1").expect("add");

        let err = fx
            .statuses()
            .add("夏インターン", "#FF0000")
            .expect_err("duplicate");
        assert_eq!(
            err.downcast_ref::<RepoError>(),
            Some(&RepoError::DuplicateName {
                name: "夏インターン".to_string()
            })
        );

        let listed = fx.statuses().list().expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].color, "#6366F1");
    }

    #[test]
    fn custom_statuses_extend_the_default_vocabulary() {
        let fx = Fixture::new();
        fx.statuses().add("夏インターン", "#6366F1").expect("add");

        let names = fx.statuses().available_statuses().expect("vocabulary");
        assert_eq!(names.first().map(String::as_str), Some("未エントリー"));
        assert_eq!(names.last().map(String::as_str), Some("夏インターン"));
        assert_eq!(names.len(), DEFAULT_STATUS_LIST.len() + 1);
    }

    #[test]
    fn custom_status_sort_order_appends() {
        let fx = Fixture::new();
        let first = fx.statuses().add("夏インターン", "#6366F1").expect("add");
        let second = fx.statuses().add("秋インターン", "#6366F1").expect("add");
        assert_eq!(first.sort_order, 0);
        assert_eq!(second.sort_order, 1);

        assert!(fx.statuses().remove(first.id).expect("remove"));
        assert!(!fx.statuses().remove(first.id).expect("remove again"));
    }
}
