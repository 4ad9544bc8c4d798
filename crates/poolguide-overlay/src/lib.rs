//! # PoolGuide Overlay
//!
//! Geometry engine behind the pool table overlay: maps between screen and
//! table-local space, edits the table under pointer input and builds the
//! guide lines drawn on top of the live view.
//!
//! ## Core Components
//!
//! - **Transform**: Forward/inverse affine map for a [`TableFrame`](poolguide_core::TableFrame)
//! - **Trajectory**: Aim line and pocket guide construction
//! - **Manipulation**: Pointer-driven state machine (move pocket, move table, scale, rotate)
//! - **Scene**: Screen-space render model for one frame
//! - **Session**: Owner-thread state tying the above to a profile store and intent queue
//!
//! ## Architecture
//!
//! ```text
//! Shell (window, hooks, hotkeys)
//!   └── IntentQueue ──► OverlaySession (owner thread)
//!                         ├── ManipulationController ──► GeometryProfile
//!                         ├── ProfileStore (save/load/list)
//!                         └── build_scene
//!                               ├── TableTransform
//!                               └── trajectory::predict
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use poolguide_core::{GeometryProfile, MemoryProfileStore, Modifiers, Point, PointerEvent};
//! use poolguide_overlay::OverlaySession;
//!
//! let mut session = OverlaySession::new(MemoryProfileStore::new(), GeometryProfile::default());
//! session.toggle_editing();
//! session.handle_pointer(PointerEvent::Press {
//!     position: Point::new(960.0, 540.0),
//!     modifiers: Modifiers::SHIFT,
//! })?;
//! let scene = session.scene()?;
//! ```

pub mod manipulation;
pub mod scene;
pub mod session;
pub mod trajectory;
pub mod transform;

pub use manipulation::{
    pick_pocket, resolve_press, DragAnchor, ManipulationController, ManipulationState,
};
pub use scene::{build_scene, Crosshair, OverlayScene, PocketMarker, TableOutline};
pub use session::{default_keybindings, ChangeNotice, OverlayMode, OverlaySession};
pub use trajectory::{extend_aim_line, predict, predict_with_extension, Segment, TrajectoryLines};
pub use transform::TableTransform;
