use crate::dashboard::catalog::WidgetType;
use crate::dashboard::model::{
    Dashboard, LayoutItem, WidgetInstance, CURRENT_SCHEMA_VERSION, LEGACY_SCHEMA_VERSION,
};
use crate::dashboard::widgets::{
    CalendarData, CalendarEvent, Expense, ExpenseTrackerData, Goal, GoalsData, Habit,
    HabitTrackerData, Mood, MoodEntry, MoodTrackerData, PomodoroData, Quote, QuoteData,
    ReadingEntry, ReadingTrackerData, StickyNote, StickyNotesData, TodoData, TodoItem,
    WaterEntry, WaterTrackerData, WeatherData, WelcomeData, WidgetData,
};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Key the dashboard document is stored under.
pub const STORAGE_KEY: &str = "flowboard-dashboard";

/// Durable string slots addressed by key.
pub trait StorageBackend: Send {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-process slots. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| anyhow::anyhow!("memory storage lock poisoned"))?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| anyhow::anyhow!("memory storage lock poisoned"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves the [`Dashboard`] document through a [`StorageBackend`].
pub struct DashboardStore {
    backend: Box<dyn StorageBackend>,
}

impl DashboardStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// File-backed store rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self::new(FileStorage::new(dir))
    }

    /// Read the saved dashboard. Any failure is logged and reported as "no
    /// data" so the caller can fall back to the default dashboard.
    pub fn load(&self) -> Option<Dashboard> {
        let content = match self.backend.read(STORAGE_KEY) {
            Ok(Some(content)) => content,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read dashboard");
                return None;
            }
        };
        if content.trim().is_empty() {
            return None;
        }
        match parse_dashboard(&content) {
            Ok(dashboard) => Some(dashboard),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unusable dashboard data");
                None
            }
        }
    }

    /// Persist `dashboard`. Failures are logged; the caller's in-memory copy
    /// stays authoritative.
    pub fn save(&self, dashboard: &Dashboard) {
        if let Err(e) = self.try_save(dashboard) {
            tracing::error!(error = %e, "failed to save dashboard");
        }
    }

    fn try_save(&self, dashboard: &Dashboard) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(dashboard)?;
        self.backend.write(STORAGE_KEY, &json)
    }

    pub fn create_default() -> Dashboard {
        Self::create_default_at(Utc::now())
    }

    /// The starter dashboard: one widget of every type with sample data,
    /// laid out on 4 columns without overlaps.
    pub fn create_default_at(now: DateTime<Utc>) -> Dashboard {
        let today = now.date_naive();
        let days = |n: i64| today + Duration::days(n);

        let todo = TodoData {
            items: [
                ("1", "Review project proposal", false),
                ("2", "Buy groceries", true),
                ("3", "Call mom", false),
            ]
            .into_iter()
            .map(|(id, text, completed)| TodoItem {
                id: id.to_string(),
                text: text.to_string(),
                completed,
                created_at: now,
            })
            .collect(),
        };

        let notes = StickyNotesData {
            notes: [
                ("1", "Remember to water the plants! 🌱", "dusty-pink"),
                ("2", "Book flight for next month", "sage"),
                ("3", "Try that new recipe! 🍝", "pastel-teal"),
            ]
            .into_iter()
            .map(|(id, text, color)| StickyNote {
                id: id.to_string(),
                text: text.to_string(),
                color: color.to_string(),
                created_at: now,
            })
            .collect(),
        };

        let habits = HabitTrackerData {
            habits: vec![
                Habit {
                    completed_days: vec![today],
                    ..Habit::seed("1", "Drink water", "sage")
                },
                Habit::seed("2", "Exercise", "dusty-pink"),
                Habit {
                    completed_days: vec![today],
                    ..Habit::seed("3", "Read", "pastel-teal")
                },
                Habit::seed("4", "Meditate", "sage"),
            ],
        };

        let mood = MoodTrackerData {
            entries: vec![MoodEntry {
                date: today,
                mood: Mood::Happy,
                mood_label: "Happy & Productive".to_string(),
            }],
            current_mood: Some(Mood::Happy),
        };

        let weather = WeatherData {
            location: Some("San Francisco".to_string()),
            ..WeatherData::default()
        };

        let water = WaterTrackerData {
            daily_target: 8,
            today_amount: 3,
            history: vec![WaterEntry {
                date: today,
                amount: 3,
                target: 8,
            }],
        };

        let goals = GoalsData {
            goals: vec![
                Goal {
                    id: "1".to_string(),
                    title: "Learn a new skill".to_string(),
                    description: Some("Complete an online course".to_string()),
                    target_date: days(30),
                    completed: false,
                    progress: 25,
                },
                Goal {
                    id: "2".to_string(),
                    title: "Exercise regularly".to_string(),
                    description: Some("Work out 3 times a week".to_string()),
                    target_date: days(14),
                    completed: false,
                    progress: 60,
                },
            ],
        };

        let calendar = CalendarData {
            events: vec![
                CalendarEvent {
                    id: "1".to_string(),
                    title: "Team Meeting".to_string(),
                    date: days(1),
                    time: Some("14:00".to_string()),
                    description: Some("Weekly team sync".to_string()),
                },
                CalendarEvent {
                    id: "2".to_string(),
                    title: "Doctor Appointment".to_string(),
                    date: days(3),
                    time: Some("10:30".to_string()),
                    description: None,
                },
            ],
        };

        let reading = ReadingTrackerData {
            current_books: vec![ReadingEntry {
                id: "1".to_string(),
                book_title: "The Psychology of Money".to_string(),
                author: "Morgan Housel".to_string(),
                total_pages: 256,
                current_page: 89,
                started_date: days(-10),
                finished_date: None,
            }],
            books_read: 3,
            pages_read: 847,
        };

        let expenses = ExpenseTrackerData {
            monthly_budget: Some(2000.0),
            expenses: [
                ("1", 45.67, "Grocery shopping", "Food", -2),
                ("2", 12.50, "Coffee", "Food", 0),
                ("3", 85.00, "Gas bill", "Bills", -1),
            ]
            .into_iter()
            .map(|(id, amount, description, category, offset)| Expense {
                id: id.to_string(),
                amount,
                description: description.to_string(),
                category: category.to_string(),
                date: days(offset),
            })
            .collect(),
            ..ExpenseTrackerData::default()
        };

        let placed: Vec<(WidgetData, [u32; 4])> = vec![
            (WelcomeData::default().into(), [0, 0, 2, 2]),
            (todo.into(), [2, 0, 1, 3]),
            (PomodoroData::default().into(), [3, 0, 1, 2]),
            (
                QuoteData {
                    current_quote: Quote::new(
                        "The way to get started is to quit talking and begin doing.",
                        "Walt Disney",
                    ),
                }
                .into(),
                [0, 2, 1, 2],
            ),
            (notes.into(), [1, 2, 1, 3]),
            (habits.into(), [3, 2, 1, 2]),
            (mood.into(), [2, 4, 2, 2]),
            (weather.into(), [0, 4, 1, 2]),
            (water.into(), [1, 5, 1, 2]),
            (goals.into(), [2, 6, 2, 3]),
            (calendar.into(), [0, 7, 2, 3]),
            (reading.into(), [2, 9, 2, 2]),
            (expenses.into(), [0, 10, 2, 3]),
        ];

        let widgets = placed
            .into_iter()
            .map(|(data, [x, y, w, h])| {
                let kind: WidgetType = data.kind();
                let id = format!("{kind}-1");
                WidgetInstance {
                    layout: LayoutItem::new(id.clone(), x, y, w, h)
                        .with_min(kind.config().min_size),
                    id,
                    data,
                }
            })
            .collect();
        Dashboard::from_widgets(widgets, now)
    }
}

/// Decode, migrate and sanitize a stored document.
fn parse_dashboard(content: &str) -> anyhow::Result<Dashboard> {
    let mut dashboard: Dashboard = serde_json::from_str(content)?;
    if dashboard.schema_version > CURRENT_SCHEMA_VERSION {
        anyhow::bail!(
            "dashboard schema version {} is newer than supported version {}",
            dashboard.schema_version,
            CURRENT_SCHEMA_VERSION
        );
    }
    if dashboard.schema_version == LEGACY_SCHEMA_VERSION {
        tracing::info!(
            to = CURRENT_SCHEMA_VERSION,
            "migrating unversioned dashboard document"
        );
    }
    dashboard.schema_version = CURRENT_SCHEMA_VERSION;
    for warning in dashboard.sanitize() {
        tracing::warn!("{warning}");
    }
    Ok(dashboard)
}
