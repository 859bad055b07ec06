use crate::dashboard::catalog::{Footprint, WidgetType};
use crate::dashboard::widgets::{PomodoroData, WidgetData, WidgetPayload};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Schema version written by this build.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Documents written before versioning existed carry no version field.
pub const LEGACY_SCHEMA_VERSION: u32 = 0;

fn legacy_version() -> u32 {
    LEGACY_SCHEMA_VERSION
}

fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Position and size of one widget on the canonical grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutItem {
    #[serde(rename = "i", alias = "id")]
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_h: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_h: Option<u32>,
}

impl LayoutItem {
    pub fn new(id: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
            min_w: None,
            min_h: None,
            max_w: None,
            max_h: None,
        }
    }

    pub fn with_min(mut self, min: Footprint) -> Self {
        self.min_w = Some(min.w);
        self.min_h = Some(min.h);
        self
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Axis-aligned overlap test against the rectangle `(x, y, w, h)`.
    pub fn collides_with(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        self.x < x.saturating_add(w)
            && self.right() > x
            && self.y < y.saturating_add(h)
            && self.bottom() > y
    }

    pub fn overlaps(&self, other: &LayoutItem) -> bool {
        self.collides_with(other.x, other.y, other.w, other.h)
    }

    /// Clamp the size to `>= 1`, `>= min` and `<= max` (when max is usable).
    /// Returns `true` when anything changed.
    pub fn enforce_constraints(&mut self) -> bool {
        let (w, h) = (self.w, self.h);
        self.w = clamp_dimension(self.w, self.min_w, self.max_w);
        self.h = clamp_dimension(self.h, self.min_h, self.max_h);
        w != self.w || h != self.h
    }
}

fn clamp_dimension(value: u32, min: Option<u32>, max: Option<u32>) -> u32 {
    let floor = min.unwrap_or(1).max(1);
    let mut value = value.max(floor);
    if let Some(max) = max {
        if max >= floor {
            value = value.min(max);
        }
    }
    value
}

/// One placed widget: identity, typed payload and canonical layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWidget", into = "RawWidget")]
pub struct WidgetInstance {
    pub id: String,
    pub data: WidgetData,
    pub layout: LayoutItem,
}

impl WidgetInstance {
    pub fn kind(&self) -> WidgetType {
        self.data.kind()
    }
}

/// Wire shape: the type tag sits next to an untyped `data` object.
#[derive(Serialize, Deserialize)]
struct RawWidget {
    id: String,
    #[serde(rename = "type")]
    kind: WidgetType,
    #[serde(default)]
    data: Value,
    layout: LayoutItem,
}

impl TryFrom<RawWidget> for WidgetInstance {
    type Error = serde_json::Error;

    fn try_from(raw: RawWidget) -> Result<Self, Self::Error> {
        let data = WidgetData::from_value(raw.kind, raw.data)?;
        Ok(Self {
            id: raw.id,
            data,
            layout: raw.layout,
        })
    }
}

impl From<WidgetInstance> for RawWidget {
    fn from(widget: WidgetInstance) -> Self {
        Self {
            id: widget.id,
            kind: widget.data.kind(),
            data: widget.data.to_value(),
            layout: widget.layout,
        }
    }
}

/// The persisted dashboard aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(default = "legacy_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub widgets: Vec<WidgetInstance>,
    #[serde(default)]
    pub layout: Vec<LayoutItem>,
    #[serde(default = "now")]
    pub last_modified: DateTime<Utc>,
}

impl Dashboard {
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            widgets: Vec::new(),
            layout: Vec::new(),
            last_modified: now,
        }
    }

    pub fn from_widgets(widgets: Vec<WidgetInstance>, now: DateTime<Utc>) -> Self {
        let mut dashboard = Self {
            widgets,
            ..Self::empty(now)
        };
        dashboard.sync_layout();
        dashboard
    }

    /// Re-derive the flat layout array from the widgets.
    pub fn sync_layout(&mut self) {
        self.layout = self.widgets.iter().map(|w| w.layout.clone()).collect();
    }

    pub fn layout_in_sync(&self) -> bool {
        self.layout.len() == self.widgets.len()
            && self
                .widgets
                .iter()
                .zip(&self.layout)
                .all(|(w, l)| w.layout == *l)
    }

    pub fn widget(&self, id: &str) -> Option<&WidgetInstance> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn widget_mut(&mut self, id: &str) -> Option<&mut WidgetInstance> {
        self.widgets.iter_mut().find(|w| w.id == id)
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_modified = now;
    }

    /// Repair structural problems a hand-edited or legacy document may carry.
    /// Returns one warning per repair.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut seen = HashSet::new();
        self.widgets.retain(|widget| {
            if seen.insert(widget.id.clone()) {
                true
            } else {
                warnings.push(format!("duplicate widget id '{}' dropped", widget.id));
                false
            }
        });
        for widget in &mut self.widgets {
            if widget.layout.id != widget.id {
                warnings.push(format!(
                    "layout id '{}' rewritten to widget id '{}'",
                    widget.layout.id, widget.id
                ));
                widget.layout.id = widget.id.clone();
            }
            if widget.layout.enforce_constraints() {
                warnings.push(format!("layout of '{}' clamped to its size limits", widget.id));
            }
            let pomodoro = PomodoroData::from_data_mut(&mut widget.data);
            if pomodoro.is_some_and(PomodoroData::clamp_to_limits) {
                warnings.push(format!("pomodoro '{}' duration clamped", widget.id));
            }
        }
        if !self.layout_in_sync() {
            warnings.push("layout array re-derived from widgets".into());
        }
        self.sync_layout();
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn layout_item_uses_grid_layout_keys() {
        let item = LayoutItem::new("todo-1", 2, 0, 1, 3).with_min(Footprint::new(1, 2));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({"i": "todo-1", "x": 2, "y": 0, "w": 1, "h": 3, "minW": 1, "minH": 2})
        );
        let parsed: LayoutItem =
            serde_json::from_value(json!({"id": "a", "x": 0, "y": 1, "w": 2, "h": 2})).unwrap();
        assert_eq!(parsed.id, "a");
        assert_eq!(parsed.min_w, None);
    }

    #[test]
    fn collision_requires_overlap_on_both_axes() {
        let item = LayoutItem::new("a", 1, 1, 2, 2);
        assert!(item.collides_with(2, 2, 1, 1));
        assert!(!item.collides_with(3, 1, 1, 1));
        assert!(!item.collides_with(1, 3, 1, 1));
        assert!(!item.collides_with(0, 0, 1, 1));
    }

    #[test]
    fn edges_saturate_at_the_far_end_of_the_grid() {
        let far = LayoutItem::new("far", 0, u32::MAX, 1, 3);
        assert_eq!(far.bottom(), u32::MAX);
        assert_eq!(LayoutItem::new("wide", u32::MAX, 0, 2, 1).right(), u32::MAX);
        assert!(!far.collides_with(0, 0, 1, 3));
        assert!(!LayoutItem::new("a", 0, 0, 1, 1).collides_with(0, u32::MAX, 1, 1));
    }

    #[test]
    fn constraints_raise_to_min_and_ignore_unusable_max() {
        let mut item = LayoutItem::new("a", 0, 0, 0, 1);
        item.min_h = Some(2);
        item.max_w = Some(0);
        assert!(item.enforce_constraints());
        assert_eq!((item.w, item.h), (1, 2));
        assert!(!item.enforce_constraints());
    }

    #[test]
    fn widget_missing_data_uses_type_defaults() {
        let widget: WidgetInstance = serde_json::from_value(json!({
            "id": "welcome-1",
            "type": "welcome",
            "layout": {"i": "welcome-1", "x": 0, "y": 0, "w": 2, "h": 2}
        }))
        .unwrap();
        assert_eq!(widget.kind(), WidgetType::Welcome);
    }

    #[test]
    fn sanitize_drops_duplicates_and_resyncs() {
        let widget: WidgetInstance = serde_json::from_value(json!({
            "id": "todo-1",
            "type": "todo",
            "data": {"items": []},
            "layout": {"i": "other", "x": 0, "y": 0, "w": 0, "h": 3, "minW": 1}
        }))
        .unwrap();
        let mut dashboard = Dashboard {
            schema_version: LEGACY_SCHEMA_VERSION,
            widgets: vec![widget.clone(), widget],
            layout: Vec::new(),
            last_modified: Utc::now(),
        };
        let warnings = dashboard.sanitize();
        assert_eq!(dashboard.widgets.len(), 1);
        assert_eq!(dashboard.widgets[0].layout.id, "todo-1");
        assert_eq!(dashboard.widgets[0].layout.w, 1);
        assert!(dashboard.layout_in_sync());
        assert_eq!(warnings.len(), 4);
    }

    #[test]
    fn sanitize_clamps_oversized_pomodoro() {
        let widget: WidgetInstance = serde_json::from_value(json!({
            "id": "pomodoro-1",
            "type": "pomodoro",
            "data": {"duration": 100_000_000, "timeRemaining": 5, "isRunning": false, "isPaused": false},
            "layout": {"i": "pomodoro-1", "x": 0, "y": 0, "w": 1, "h": 3}
        }))
        .unwrap();
        let mut dashboard = Dashboard {
            schema_version: CURRENT_SCHEMA_VERSION,
            widgets: vec![widget],
            layout: Vec::new(),
            last_modified: Utc::now(),
        };
        let warnings = dashboard.sanitize();
        assert!(warnings.iter().any(|w| w.contains("pomodoro-1")));
        let pomodoro = PomodoroData::from_data(&dashboard.widgets[0].data).unwrap();
        assert_eq!(pomodoro.duration, 24 * 60);
        assert_eq!(pomodoro.time_remaining, 5);
    }
}
