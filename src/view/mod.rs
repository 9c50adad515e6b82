//! View projection
//!
//! Pure functions from `(Selection, Catalog)` to the three things the user
//! sees: the navigation tree, the breadcrumb and the preview. Nothing here is
//! cached; every frame projects again from the current state.

pub mod breadcrumb;
pub mod labels;
pub mod nav;
pub mod preview;

pub use nav::{NavRow, NavTree};
pub use preview::{Preview, PreviewKind};
