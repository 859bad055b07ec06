use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_daily_target() -> u32 {
    8
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaterEntry {
    pub date: NaiveDate,
    pub amount: u32,
    pub target: u32,
}

/// Glasses of water drunk today, with one history entry per day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WaterTrackerData {
    #[serde(default = "default_daily_target")]
    pub daily_target: u32,
    #[serde(default)]
    pub today_amount: u32,
    #[serde(default)]
    pub history: Vec<WaterEntry>,
}

impl Default for WaterTrackerData {
    fn default() -> Self {
        Self {
            daily_target: default_daily_target(),
            today_amount: 0,
            history: Vec::new(),
        }
    }
}

impl WaterTrackerData {
    pub fn add_glass(&mut self, today: NaiveDate) {
        self.today_amount = self.today_amount.saturating_add(1);
        self.record(today);
    }

    /// No-op when nothing was logged today.
    pub fn remove_glass(&mut self, today: NaiveDate) -> bool {
        if self.today_amount == 0 {
            return false;
        }
        self.today_amount -= 1;
        self.record(today);
        true
    }

    fn record(&mut self, today: NaiveDate) {
        self.history.retain(|entry| entry.date != today);
        if self.today_amount > 0 {
            self.history.push(WaterEntry {
                date: today,
                amount: self.today_amount,
                target: self.daily_target,
            });
        }
    }

    /// Percent of the daily target reached, capped at 100.
    pub fn progress(&self) -> f64 {
        if self.daily_target == 0 {
            return 100.0;
        }
        (self.today_amount as f64 / self.daily_target as f64 * 100.0).min(100.0)
    }
}
