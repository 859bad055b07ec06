use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of widget kinds the dashboard knows how to host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetType {
    Welcome,
    Todo,
    Pomodoro,
    Quote,
    StickyNotes,
    HabitTracker,
    MoodTracker,
    Weather,
    Calendar,
    Goals,
    WaterTracker,
    ReadingTracker,
    ExpenseTracker,
}

impl WidgetType {
    pub const ALL: [WidgetType; 13] = [
        WidgetType::Welcome,
        WidgetType::Todo,
        WidgetType::Pomodoro,
        WidgetType::Quote,
        WidgetType::StickyNotes,
        WidgetType::HabitTracker,
        WidgetType::MoodTracker,
        WidgetType::Weather,
        WidgetType::Calendar,
        WidgetType::Goals,
        WidgetType::WaterTracker,
        WidgetType::ReadingTracker,
        WidgetType::ExpenseTracker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetType::Welcome => "welcome",
            WidgetType::Todo => "todo",
            WidgetType::Pomodoro => "pomodoro",
            WidgetType::Quote => "quote",
            WidgetType::StickyNotes => "sticky-notes",
            WidgetType::HabitTracker => "habit-tracker",
            WidgetType::MoodTracker => "mood-tracker",
            WidgetType::Weather => "weather",
            WidgetType::Calendar => "calendar",
            WidgetType::Goals => "goals",
            WidgetType::WaterTracker => "water-tracker",
            WidgetType::ReadingTracker => "reading-tracker",
            WidgetType::ExpenseTracker => "expense-tracker",
        }
    }

    /// Static catalog entry for this widget type.
    pub fn config(&self) -> &'static WidgetConfig {
        &WIDGET_CONFIGS[*self as usize]
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown widget type '{s}'"))
    }
}

/// Accent colour tag shared by widget headers, sticky notes and habits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    DustyPink,
    Sage,
    PastelTeal,
}

impl Accent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::DustyPink => "dusty-pink",
            Accent::Sage => "sage",
            Accent::PastelTeal => "pastel-teal",
        }
    }
}

/// Width and height in grid cells.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Footprint {
    pub w: u32,
    pub h: u32,
}

impl Footprint {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub kind: WidgetType,
    pub name: &'static str,
    pub icon: &'static str,
    pub default_size: Footprint,
    pub min_size: Footprint,
    pub color: Accent,
}

const fn entry(
    kind: WidgetType,
    name: &'static str,
    icon: &'static str,
    default_size: Footprint,
    min_size: Footprint,
    color: Accent,
) -> WidgetConfig {
    WidgetConfig {
        kind,
        name,
        icon,
        default_size,
        min_size,
        color,
    }
}

// Indexed by `WidgetType as usize`; order must follow the enum.
static WIDGET_CONFIGS: [WidgetConfig; 13] = [
    entry(
        WidgetType::Welcome,
        "Welcome",
        "Heart",
        Footprint::new(2, 2),
        Footprint::new(2, 2),
        Accent::DustyPink,
    ),
    entry(
        WidgetType::Todo,
        "To-Do List",
        "CheckSquare",
        Footprint::new(1, 3),
        Footprint::new(1, 2),
        Accent::Sage,
    ),
    entry(
        WidgetType::Pomodoro,
        "Pomodoro Timer",
        "Timer",
        Footprint::new(1, 2),
        Footprint::new(1, 2),
        Accent::DustyPink,
    ),
    entry(
        WidgetType::Quote,
        "Daily Quote",
        "Quote",
        Footprint::new(1, 2),
        Footprint::new(1, 2),
        Accent::PastelTeal,
    ),
    entry(
        WidgetType::StickyNotes,
        "Sticky Notes",
        "StickyNote",
        Footprint::new(1, 3),
        Footprint::new(1, 2),
        Accent::Sage,
    ),
    entry(
        WidgetType::HabitTracker,
        "Habit Tracker",
        "Target",
        Footprint::new(1, 3),
        Footprint::new(1, 2),
        Accent::DustyPink,
    ),
    entry(
        WidgetType::MoodTracker,
        "Mood Tracker",
        "Smile",
        Footprint::new(2, 2),
        Footprint::new(2, 2),
        Accent::PastelTeal,
    ),
    entry(
        WidgetType::Weather,
        "Weather",
        "Cloud",
        Footprint::new(1, 2),
        Footprint::new(1, 2),
        Accent::PastelTeal,
    ),
    entry(
        WidgetType::Calendar,
        "Calendar",
        "Calendar",
        Footprint::new(2, 3),
        Footprint::new(2, 2),
        Accent::Sage,
    ),
    entry(
        WidgetType::Goals,
        "Goals",
        "Trophy",
        Footprint::new(2, 3),
        Footprint::new(1, 2),
        Accent::DustyPink,
    ),
    entry(
        WidgetType::WaterTracker,
        "Water Tracker",
        "Droplets",
        Footprint::new(1, 2),
        Footprint::new(1, 2),
        Accent::PastelTeal,
    ),
    entry(
        WidgetType::ReadingTracker,
        "Reading Tracker",
        "BookOpen",
        Footprint::new(2, 2),
        Footprint::new(2, 2),
        Accent::Sage,
    ),
    entry(
        WidgetType::ExpenseTracker,
        "Expense Tracker",
        "DollarSign",
        Footprint::new(2, 3),
        Footprint::new(2, 2),
        Accent::DustyPink,
    ),
];

/// All catalog entries in menu order.
pub fn widget_configs() -> &'static [WidgetConfig] {
    &WIDGET_CONFIGS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_enum() {
        for kind in WidgetType::ALL {
            assert_eq!(kind.config().kind, kind);
        }
    }

    #[test]
    fn min_size_never_exceeds_default() {
        for cfg in widget_configs() {
            assert!(cfg.min_size.w <= cfg.default_size.w, "{}", cfg.name);
            assert!(cfg.min_size.h <= cfg.default_size.h, "{}", cfg.name);
        }
    }

    #[test]
    fn type_tags_round_trip_through_str() {
        for kind in WidgetType::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::json!(kind.as_str()));
            assert_eq!(kind.as_str().parse::<WidgetType>().unwrap(), kind);
        }
        assert!("clock".parse::<WidgetType>().is_err());
    }
}
