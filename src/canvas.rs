//! Transient canvas state: the items currently placed on the board.
//! Nothing here is persisted.

mod canvas_registry;

pub use canvas_registry::{CanvasItem, CanvasItemRegistry, DEFAULT_ITEM_ID};
