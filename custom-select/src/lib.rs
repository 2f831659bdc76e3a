//! Custom dropdowns that stand in for native select controls.
//!
//! Each widget renders a toggle button and an option panel next to the native
//! control it wraps, and writes every committed choice back to that control
//! and raises `change` on it, so form submission and existing listeners keep
//! working.
//!
//! ```ignore
//! let page = Page::init(document, SelectSettings::default());
//! let _ = page.schedule_width_equalization();
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod events;
pub mod markup;
pub mod options;
pub mod page;
pub mod position;
pub mod state;
pub mod width;

pub use bridge::NativeBridge;
pub use config::SelectSettings;
pub use error::{SettingsError, WidgetError};
pub use events::{EventResult, WidgetEvents};
pub use markup::WidgetParts;
pub use options::{OptionModel, SelectOption};
pub use page::Page;
pub use position::{compute_position, AnchorMetrics, PanelPosition, PositionStrategy};
pub use state::{Commit, CustomSelect, Phase, WidgetConfig, WidgetId};
