use crate::dashboard::catalog::WidgetType;
use crate::dashboard::ids::generate_widget_id;
use crate::dashboard::layout::{project_all, ResponsiveLayouts};
use crate::dashboard::model::{Dashboard, LayoutItem, WidgetInstance};
use crate::dashboard::placement::{find_slot_within, MAX_ROWS_SCANNED};
use crate::dashboard::store::DashboardStore;
use crate::dashboard::ticker::Ticker;
use crate::dashboard::widgets::{
    PomodoroData, TickOutcome, WeatherData, WeatherProvider, WidgetData, WidgetPayload,
};
use crate::settings::Settings;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

/// Grid and timer options the controller runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
    pub grid_columns: u32,
    pub placement_rows: u32,
    pub pomodoro_tick: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            grid_columns: 4,
            placement_rows: MAX_ROWS_SCANNED,
            pomodoro_tick: Duration::from_secs(1),
        }
    }
}

impl ControllerOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            grid_columns: settings.grid_columns.max(1),
            placement_rows: settings.placement_rows.max(1),
            pomodoro_tick: Duration::from_millis(settings.pomodoro_tick_ms.max(1)),
        }
    }
}

/// Owner of the live [`Dashboard`]. Every mutation goes through here and is
/// persisted before the method returns.
pub struct DashboardController {
    dashboard: Dashboard,
    store: DashboardStore,
    options: ControllerOptions,
    tickers: HashMap<String, Ticker>,
    tick_tx: Sender<String>,
    tick_rx: Receiver<String>,
    errors: HashMap<String, String>,
}

impl DashboardController {
    /// Load the saved dashboard, or start from the default one.
    pub fn init(store: DashboardStore, options: ControllerOptions) -> Self {
        let (dashboard, fresh) = match store.load() {
            Some(dashboard) => (dashboard, false),
            None => {
                tracing::info!("no saved dashboard, using default");
                (DashboardStore::create_default(), true)
            }
        };
        let (tick_tx, tick_rx) = mpsc::channel();
        let mut controller = Self {
            dashboard,
            store,
            options,
            tickers: HashMap::new(),
            tick_tx,
            tick_rx,
            errors: HashMap::new(),
        };
        let paused = controller.pause_restored_timers();
        if fresh || paused > 0 {
            controller.commit();
        }
        tracing::debug!(widgets = controller.dashboard.widgets.len(), "dashboard ready");
        controller
    }

    // Nothing was ticking while the dashboard sat on disk.
    fn pause_restored_timers(&mut self) -> usize {
        let mut paused = 0;
        for widget in &mut self.dashboard.widgets {
            if let Some(pomodoro) = PomodoroData::from_data_mut(&mut widget.data) {
                if pomodoro.is_active() {
                    pomodoro.pause();
                    paused += 1;
                }
            }
        }
        paused
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn widgets(&self) -> &[WidgetInstance] {
        &self.dashboard.widgets
    }

    pub fn widget(&self, id: &str) -> Option<&WidgetInstance> {
        self.dashboard.widget(id)
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Add a widget of `kind` at the first free cell and return its id.
    pub fn add_widget(&mut self, kind: WidgetType) -> String {
        let config = kind.config();
        let pos = find_slot_within(
            &self.dashboard.layout,
            config.default_size,
            self.options.grid_columns,
            self.options.placement_rows,
        );
        let id = generate_widget_id(kind, Utc::now());
        let layout = LayoutItem::new(
            id.clone(),
            pos.x,
            pos.y,
            config.default_size.w,
            config.default_size.h,
        )
        .with_min(config.min_size);
        self.dashboard.widgets.push(WidgetInstance {
            id: id.clone(),
            data: WidgetData::default_for(kind),
            layout,
        });
        tracing::info!(widget = %id, x = pos.x, y = pos.y, "widget added");
        self.commit();
        id
    }

    /// Returns `false` when no widget has `id`; nothing is touched or saved
    /// in that case.
    pub fn remove_widget(&mut self, id: &str) -> bool {
        let before = self.dashboard.widgets.len();
        self.dashboard.widgets.retain(|w| w.id != id);
        if self.dashboard.widgets.len() == before {
            return false;
        }
        self.errors.remove(id);
        tracing::info!(widget = %id, "widget removed");
        self.commit();
        true
    }

    /// Shallow-merge `patch` into the widget's data. `Ok(false)` when the id
    /// is unknown; an error when the merged data no longer fits the widget
    /// type, in which case nothing changes.
    pub fn update_widget_data(&mut self, id: &str, patch: &Value) -> anyhow::Result<bool> {
        let Some(widget) = self.dashboard.widget_mut(id) else {
            return Ok(false);
        };
        let merged = widget
            .data
            .merged_with(patch)
            .map_err(|e| e.context(format!("update of widget '{id}' rejected")))?;
        widget.data = merged;
        self.commit();
        Ok(true)
    }

    /// Mutate a widget's data in place. A closure that swaps the payload for
    /// another widget type is undone.
    pub fn update_widget<F>(&mut self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut WidgetData),
    {
        let Some(widget) = self.dashboard.widget_mut(id) else {
            return false;
        };
        let kind = widget.kind();
        let previous = widget.data.clone();
        f(&mut widget.data);
        if widget.data.kind() != kind {
            tracing::warn!(widget = %id, "widget type cannot change; edit discarded");
            widget.data = previous;
            return false;
        }
        self.commit();
        true
    }

    /// Typed edit of one widget's payload. `None` when the id is unknown or
    /// the widget holds a different type.
    pub fn edit_widget<T, R, F>(&mut self, id: &str, f: F) -> Option<R>
    where
        T: WidgetPayload,
        F: FnOnce(&mut T) -> R,
    {
        let widget = self.dashboard.widget_mut(id)?;
        let payload = T::from_data_mut(&mut widget.data)?;
        let out = f(payload);
        self.commit();
        Some(out)
    }

    /// Apply positions and sizes coming back from the grid. Constraints the
    /// incoming items leave out keep their previous values.
    pub fn update_layout(&mut self, items: &[LayoutItem]) {
        for item in items {
            let Some(widget) = self.dashboard.widget_mut(&item.id) else {
                tracing::debug!(widget = %item.id, "layout for unknown widget ignored");
                continue;
            };
            let current = &mut widget.layout;
            current.x = item.x;
            current.y = item.y;
            current.w = item.w;
            current.h = item.h;
            current.min_w = item.min_w.or(current.min_w);
            current.min_h = item.min_h.or(current.min_h);
            current.max_w = item.max_w.or(current.max_w);
            current.max_h = item.max_h.or(current.max_h);
            current.enforce_constraints();
        }
        self.commit();
    }

    pub fn reset_dashboard(&mut self) {
        self.errors.clear();
        self.dashboard = DashboardStore::create_default();
        tracing::info!("dashboard reset to defaults");
        self.commit();
    }

    pub fn clear_dashboard(&mut self) {
        self.errors.clear();
        self.dashboard.widgets.clear();
        tracing::info!("dashboard cleared");
        self.commit();
    }

    pub fn start_pomodoro(&mut self, id: &str) -> bool {
        self.edit_widget(id, |p: &mut PomodoroData| p.start())
            .is_some()
    }

    pub fn pause_pomodoro(&mut self, id: &str) -> bool {
        self.edit_widget(id, |p: &mut PomodoroData| p.pause())
            .is_some()
    }

    pub fn reset_pomodoro(&mut self, id: &str) -> bool {
        self.edit_widget(id, |p: &mut PomodoroData| p.reset())
            .is_some()
    }

    pub fn set_pomodoro_duration(&mut self, id: &str, minutes: u32) -> bool {
        self.edit_widget(id, |p: &mut PomodoroData| p.set_duration(minutes))
            .is_some()
    }

    pub fn timer_running(&self, id: &str) -> bool {
        self.tickers.get(id).is_some_and(Ticker::is_active)
    }

    /// Apply every queued pomodoro tick. Returns how many were applied.
    pub fn pump_timers(&mut self) -> usize {
        let pending: Vec<String> = self.tick_rx.try_iter().collect();
        let mut applied = 0;
        for id in pending {
            let Some(widget) = self.dashboard.widget_mut(&id) else {
                continue;
            };
            let Some(pomodoro) = PomodoroData::from_data_mut(&mut widget.data) else {
                continue;
            };
            match pomodoro.tick() {
                TickOutcome::Idle => continue,
                TickOutcome::Running => {}
                TickOutcome::Finished => tracing::info!(widget = %id, "pomodoro finished"),
            }
            applied += 1;
            self.commit();
        }
        applied
    }

    /// Look up `location` and store the result. On failure the widget's data
    /// is left alone and a message is kept for [`Self::transient_error`].
    pub fn refresh_weather(
        &mut self,
        id: &str,
        location: &str,
        provider: &dyn WeatherProvider,
    ) -> bool {
        let Some(current) = self
            .dashboard
            .widget(id)
            .and_then(|w| WeatherData::from_data(&w.data))
        else {
            return false;
        };
        match current.lookup(location, provider) {
            Ok(data) => {
                self.errors.remove(id);
                self.edit_widget(id, |w: &mut WeatherData| *w = data).is_some()
            }
            Err(e) => {
                tracing::warn!(widget = %id, error = %e, "weather lookup failed");
                self.errors.insert(id.to_string(), e.user_message());
                false
            }
        }
    }

    /// Last error message for a widget; never persisted.
    pub fn transient_error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    pub fn layouts(&self) -> ResponsiveLayouts {
        project_all(&self.dashboard.layout)
    }

    fn commit(&mut self) {
        self.dashboard.touch(Utc::now());
        self.dashboard.sync_layout();
        self.sync_timers();
        self.store.save(&self.dashboard);
    }

    /// One ticker per counting-down pomodoro, none for anything else.
    fn sync_timers(&mut self) {
        let active: Vec<String> = self
            .dashboard
            .widgets
            .iter()
            .filter(|w| PomodoroData::from_data(&w.data).is_some_and(PomodoroData::is_active))
            .map(|w| w.id.clone())
            .collect();
        self.tickers.retain(|id, _| active.contains(id));
        for id in active {
            if self.tickers.contains_key(&id) {
                continue;
            }
            let tx = self.tick_tx.clone();
            let tick_id = id.clone();
            let ticker = Ticker::start(self.options.pomodoro_tick, move || {
                tx.send(tick_id.clone()).is_ok()
            });
            tracing::debug!(widget = %id, "pomodoro ticker started");
            self.tickers.insert(id, ticker);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::store::MemoryStorage;

    fn empty_controller() -> DashboardController {
        let mut controller =
            DashboardController::init(DashboardStore::new(MemoryStorage::new()), Default::default());
        controller.clear_dashboard();
        controller
    }

    #[test]
    fn edit_widget_checks_type() {
        let mut controller = empty_controller();
        let id = controller.add_widget(WidgetType::Todo);
        let added = controller.edit_widget(&id, |todo: &mut crate::dashboard::widgets::TodoData| {
            todo.add("write tests", Utc::now()).is_some()
        });
        assert_eq!(added, Some(true));
        assert!(controller
            .edit_widget(&id, |p: &mut PomodoroData| p.start())
            .is_none());
        assert!(controller.dashboard().layout_in_sync());
    }

    #[test]
    fn update_widget_cannot_change_type() {
        let mut controller = empty_controller();
        let id = controller.add_widget(WidgetType::Quote);
        assert!(!controller.update_widget(&id, |data| {
            *data = WidgetData::default_for(WidgetType::Todo)
        }));
        assert_eq!(controller.widget(&id).unwrap().kind(), WidgetType::Quote);
    }

    #[test]
    fn update_layout_keeps_constraints() {
        let mut controller = empty_controller();
        let id = controller.add_widget(WidgetType::Calendar);
        controller.update_layout(&[LayoutItem::new(id.clone(), 1, 4, 1, 1)]);
        let layout = &controller.widget(&id).unwrap().layout;
        assert_eq!((layout.x, layout.y, layout.w, layout.h), (1, 4, 2, 2));
        assert_eq!(layout.min_w, Some(2));
    }
}
