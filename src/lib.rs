//! opencraft library - state layer for the skill-combination tool
//!
//! The core is [`CombinationCache`], a persisted, order-independent memo of
//! skill combinations. The remaining stores hold canvas placement, the
//! resource catalog and user settings. Every persisted store writes through
//! a [`storage::KeyValueStore`] chosen by the caller.

pub mod cache;
pub mod canvas;
pub mod config;
pub mod error;
pub mod resources;
pub mod settings;
pub mod skill;
pub mod storage;

// Re-export commonly used types for convenience
pub use cache::CombinationCache;
pub use canvas::{CanvasItem, CanvasItemRegistry};
pub use config::Config;
pub use error::{OpencraftError, Result};
pub use resources::ResourceCatalog;
pub use settings::{Settings, SettingsStore};
pub use skill::Skill;
