mod db;
mod error;
mod models;
mod notify;
mod repo;
mod status;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use db::Database;
use models::{CompanyInput, CompanyUpdate, SelectionEventInput, SelectionEventUpdate};
use notify::{FileReminders, ReminderScheduler};
use repo::{CompanyRepo, CustomStatusRegistry, SelectionEventRepo, SortType};
use status::{DEFAULT_CUSTOM_STATUS_COLOR, EVENT_RESULTS, EVENT_TYPES, RESULT_PENDING, STATUS_NOT_ENTERED};

#[derive(Parser)]
#[command(name = "shukatsu")]
#[command(about = "Track job applications, selection events, and interview reminders")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Manage companies you are applying to
    Company {
        #[command(subcommand)]
        command: CompanyCommands,
    },

    /// Manage selection events (submissions, interviews, results)
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },

    /// Manage the status vocabulary
    Status {
        #[command(subcommand)]
        command: StatusCommands,
    },

    /// Show interview reminders that have come due
    Remind {
        /// Also show reminders that have not fired yet
        #[arg(long)]
        pending: bool,
    },
}

#[derive(Subcommand)]
enum CompanyCommands {
    /// Register a company
    Add {
        /// Company name
        name: String,

        /// Selection status (default or custom status name)
        #[arg(short, long)]
        status: Option<String>,

        /// Entry date (YYYY-MM-DD)
        #[arg(long)]
        entry_date: Option<String>,

        /// Next interview date and time (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        interview: Option<String>,

        /// Position applied for
        #[arg(short, long)]
        position: Option<String>,

        /// My-page URL
        #[arg(long)]
        url: Option<String>,

        /// My-page login id
        #[arg(long)]
        login_id: Option<String>,

        /// Entry sheet content
        #[arg(long)]
        es: Option<String>,

        /// Motivation statement
        #[arg(long)]
        motivation: Option<String>,

        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List companies
    List {
        /// Sort order
        #[arg(short, long, value_enum, default_value = "manual")]
        sort: SortType,

        /// Only companies with this exact status
        #[arg(long)]
        status: Option<String>,
    },

    /// Show one company with its selection timeline
    Show {
        /// Company ID
        id: String,
    },

    /// Update company fields
    Update {
        /// Company ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(short, long)]
        status: Option<String>,

        #[arg(long)]
        entry_date: Option<String>,

        /// Set the next interview date and time
        #[arg(long, conflicts_with = "clear_interview")]
        interview: Option<String>,

        /// Clear the next interview date (cancels the reminder)
        #[arg(long)]
        clear_interview: bool,

        #[arg(short, long)]
        position: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        login_id: Option<String>,

        #[arg(long)]
        es: Option<String>,

        #[arg(long)]
        motivation: Option<String>,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete a company and its selection events
    Delete {
        /// Company ID
        id: String,
    },

    /// Set the manual display order
    Reorder {
        /// Company IDs in the desired order
        ids: Vec<String>,
    },
}

#[derive(Subcommand)]
enum EventCommands {
    /// Record a selection event for a company
    Add {
        /// Company ID
        company_id: String,

        /// Event type (ES提出, 一次面接, 最終面接, ...)
        event_type: String,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Result (結果待ち, 通過, 不通過)
        #[arg(short, long, default_value = RESULT_PENDING)]
        result: String,

        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List a company's selection events, most recent first
    List {
        /// Company ID
        company_id: String,
    },

    /// Update a selection event
    Update {
        /// Event ID
        id: String,

        #[arg(long)]
        event_type: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        result: Option<String>,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete a selection event
    Delete {
        /// Event ID
        id: String,
    },
}

#[derive(Subcommand)]
enum StatusCommands {
    /// List the full status vocabulary (defaults first, then custom)
    List,

    /// Add a custom status
    Add {
        /// Status name
        name: String,

        /// Display color (hex)
        #[arg(short, long, default_value = DEFAULT_CUSTOM_STATUS_COLOR)]
        color: String,
    },

    /// Remove a custom status
    Remove {
        /// Custom status ID
        id: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let db = Database::open()?;
    let reminders = FileReminders::open()?;

    match cli.command {
        Commands::Init => {
            println!("Database initialized at {}", db.path().display());
        }

        Commands::Company { command } => run_company(&db, &reminders, command)?,
        Commands::Event { command } => run_event(&db, &reminders, command)?,
        Commands::Status { command } => run_status(&db, command)?,

        Commands::Remind { pending } => {
            if pending {
                let upcoming = reminders.pending()?;
                if upcoming.is_empty() {
                    println!("No reminders scheduled.");
                } else {
                    for r in upcoming {
                        println!("{}  {} の面接", r.fire_at, r.company_name);
                    }
                }
            } else {
                let due = reminders.take_due(chrono::Local::now().naive_local())?;
                if due.is_empty() {
                    println!("No reminders due.");
                } else {
                    for r in due {
                        println!("📅 本日面接があります: {}", r.company_name);
                    }
                }
            }
        }
    }

    Ok(())
}

fn run_company(
    db: &Database,
    reminders: &dyn ReminderScheduler,
    command: CompanyCommands,
) -> Result<()> {
    let companies = CompanyRepo::new(db, reminders);
    let registry = CustomStatusRegistry::new(db);

    match command {
        CompanyCommands::Add {
            name,
            status,
            entry_date,
            interview,
            position,
            url,
            login_id,
            es,
            motivation,
            notes,
        } => {
            if name.trim().is_empty() {
                bail!("企業名を入力してください");
            }
            let status = match status {
                Some(s) => {
                    validate_status(&registry, &s)?;
                    s
                }
                None => STATUS_NOT_ENTERED.to_string(),
            };

            let company = companies.create(CompanyInput {
                company_name: name,
                login_id,
                my_page_url: url,
                entry_date,
                next_interview_date: interview,
                position,
                es_content: es,
                motivation,
                notes,
                status,
            })?;
            println!("Added {} ({})", company.company_name, company.id);
        }

        CompanyCommands::List { sort, status } => {
            let listed = match status {
                Some(s) => companies.get_by_status(&s)?,
                None => companies.list(sort)?,
            };
            if listed.is_empty() {
                println!("No companies found.");
            } else {
                println!(
                    "{:<38} {:<16} {:<18} {:<18}",
                    "ID", "NAME", "STATUS", "NEXT INTERVIEW"
                );
                println!("{}", "-".repeat(92));
                for c in listed {
                    println!(
                        "{:<38} {:<16} {:<18} {:<18}",
                        c.id,
                        truncate(&c.company_name, 14),
                        truncate(&c.status, 16),
                        c.next_interview_date.as_deref().unwrap_or("-"),
                    );
                }
            }
        }

        CompanyCommands::Show { id } => match companies.get_by_id(&id)? {
            Some(c) => {
                println!("{} ({})", c.company_name, c.id);
                println!("Status: {}", c.status);
                if let Some(position) = &c.position {
                    println!("Position: {}", position);
                }
                if let Some(entry) = &c.entry_date {
                    println!("Entry date: {}", entry);
                }
                if let Some(interview) = &c.next_interview_date {
                    println!("Next interview: {}", interview);
                }
                if let Some(url) = &c.my_page_url {
                    println!("My page: {}", url);
                }
                if let Some(login) = &c.login_id {
                    println!("Login: {}", login);
                }
                if let Some(motivation) = &c.motivation {
                    println!("\n--- 志望動機 ---\n{}", motivation);
                }
                if let Some(es) = &c.es_content {
                    println!("\n--- ES ---\n{}", es);
                }
                if let Some(notes) = &c.notes {
                    println!("\n--- メモ ---\n{}", notes);
                }

                let events = SelectionEventRepo::new(db, reminders).list_by_company(&id)?;
                if !events.is_empty() {
                    println!("\nSelection events ({}):", events.len());
                    for e in events {
                        println!(
                            "  {}  {:<12} {:<10} {}",
                            e.event_date.as_deref().unwrap_or("(未定)    "),
                            e.event_type,
                            e.result,
                            e.id
                        );
                    }
                }
            }
            None => println!("Company {} not found.", id),
        },

        CompanyCommands::Update {
            id,
            name,
            status,
            entry_date,
            interview,
            clear_interview,
            position,
            url,
            login_id,
            es,
            motivation,
            notes,
        } => {
            if let Some(name) = &name {
                if name.trim().is_empty() {
                    bail!("企業名を入力してください");
                }
            }
            if let Some(s) = &status {
                validate_status(&registry, s)?;
            }

            let next_interview_date = if clear_interview {
                Some(None)
            } else {
                interview.map(Some)
            };

            let updated = companies.update(
                &id,
                CompanyUpdate {
                    company_name: name,
                    login_id: login_id.map(Some),
                    my_page_url: url.map(Some),
                    entry_date: entry_date.map(Some),
                    next_interview_date,
                    position: position.map(Some),
                    es_content: es.map(Some),
                    motivation: motivation.map(Some),
                    notes: notes.map(Some),
                    status,
                },
            )?;
            match updated {
                Some(c) => println!("Updated {}.", c.company_name),
                None => println!("Company {} not found.", id),
            }
        }

        CompanyCommands::Delete { id } => {
            if companies.delete(&id)? {
                println!("Deleted company {}.", id);
            } else {
                println!("Company {} not found.", id);
            }
        }

        CompanyCommands::Reorder { ids } => {
            companies.reorder(&ids)?;
            println!("Reordered {} companies.", ids.len());
        }
    }

    Ok(())
}

fn run_event(
    db: &Database,
    reminders: &dyn ReminderScheduler,
    command: EventCommands,
) -> Result<()> {
    let events = SelectionEventRepo::new(db, reminders);
    let companies = CompanyRepo::new(db, reminders);

    match command {
        EventCommands::Add {
            company_id,
            event_type,
            date,
            result,
            notes,
        } => {
            validate_event_type(&event_type)?;
            validate_result(&result)?;
            if companies.get_by_id(&company_id)?.is_none() {
                println!("Company {} not found.", company_id);
                return Ok(());
            }

            let event = events.create(SelectionEventInput {
                company_id,
                event_type,
                event_date: date,
                result,
                notes,
            })?;
            println!("Recorded {} ({}) as {}", event.event_type, event.result, event.id);
        }

        EventCommands::List { company_id } => {
            let listed = events.list_by_company(&company_id)?;
            if listed.is_empty() {
                println!("No selection events found.");
            } else {
                println!("{:<38} {:<12} {:<12} {:<10}", "ID", "DATE", "TYPE", "RESULT");
                println!("{}", "-".repeat(74));
                for e in listed {
                    println!(
                        "{:<38} {:<12} {:<12} {:<10}",
                        e.id,
                        e.event_date.as_deref().unwrap_or("-"),
                        e.event_type,
                        e.result,
                    );
                }
            }
        }

        EventCommands::Update {
            id,
            event_type,
            date,
            result,
            notes,
        } => {
            if let Some(t) = &event_type {
                validate_event_type(t)?;
            }
            if let Some(r) = &result {
                validate_result(r)?;
            }

            let updated = events.update(
                &id,
                SelectionEventUpdate {
                    event_type,
                    event_date: date.map(Some),
                    result,
                    notes: notes.map(Some),
                },
            )?;
            match updated {
                Some(e) => println!("Updated {} ({}).", e.event_type, e.result),
                None => println!("Event {} not found.", id),
            }
        }

        EventCommands::Delete { id } => {
            if events.delete(&id)? {
                println!("Deleted event {}.", id);
            } else {
                println!("Event {} not found.", id);
            }
        }
    }

    Ok(())
}

fn run_status(db: &Database, command: StatusCommands) -> Result<()> {
    let registry = CustomStatusRegistry::new(db);

    match command {
        StatusCommands::List => {
            for name in status::DEFAULT_STATUS_LIST {
                println!("{}", name);
            }
            for custom in registry.list()? {
                println!("{} (custom #{}, {})", custom.name, custom.id, custom.color);
            }
        }

        StatusCommands::Add { name, color } => {
            let added = registry.add(&name, &color)?;
            println!("Added custom status '{}' (ID: {})", added.name, added.id);
        }

        StatusCommands::Remove { id } => {
            if registry.remove(id)? {
                println!("Removed custom status #{}.", id);
            } else {
                println!("Custom status #{} not found.", id);
            }
        }
    }

    Ok(())
}

/// Status is advisory in the store; the vocabulary check lives here at the
/// assignment boundary.
fn validate_status(registry: &CustomStatusRegistry<'_>, status: &str) -> Result<()> {
    let known = registry.available_statuses()?;
    if !known.iter().any(|s| s == status) {
        bail!(
            "ステータス「{}」は登録されていません（`shukatsu status list` で確認できます）",
            status
        );
    }
    Ok(())
}

fn validate_event_type(event_type: &str) -> Result<()> {
    if !EVENT_TYPES.contains(&event_type) {
        bail!(
            "イベント種類「{}」は不正です。有効な値: {}",
            event_type,
            EVENT_TYPES.join(", ")
        );
    }
    Ok(())
}

fn validate_result(result: &str) -> Result<()> {
    if !EVENT_RESULTS.contains(&result) {
        bail!(
            "結果「{}」は不正です。有効な値: {}",
            result,
            EVENT_RESULTS.join(", ")
        );
    }
    Ok(())
}

/// Character-based truncation; company names and statuses are multi-byte.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
