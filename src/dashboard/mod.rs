pub mod catalog;
pub mod controller;
pub mod ids;
pub mod layout;
pub mod model;
pub mod placement;
pub mod store;
pub mod ticker;
pub mod widgets;

pub use catalog::{widget_configs, Accent, Footprint, WidgetConfig, WidgetType};
pub use controller::{ControllerOptions, DashboardController};
pub use layout::{project, project_all, Breakpoint, ResponsiveLayouts};
pub use model::{Dashboard, LayoutItem, WidgetInstance, CURRENT_SCHEMA_VERSION};
pub use placement::{find_slot, find_slot_within, GridPos, MAX_ROWS_SCANNED};
pub use store::{DashboardStore, FileStorage, MemoryStorage, StorageBackend, STORAGE_KEY};
pub use ticker::Ticker;
pub use widgets::{WidgetData, WidgetPayload};
