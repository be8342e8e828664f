//! Tab switching
//!
//! - `model` - pure selection/visibility rules and DOM ids
//! - `container` - `TabContainer`, the selector row plus its panels
//! - `panel` - `TabPanel`, one content region shown only while active

pub mod container;
pub mod model;
pub mod panel;

pub use container::{PanelSlot, TabContainer};
pub use model::{TabDescriptor, TabStrip};
pub use panel::TabPanel;
