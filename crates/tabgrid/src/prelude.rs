//! Prelude module - common imports for tabgrid users
//!
//! ```rust
//! use tabgrid::prelude::*;
//! ```

pub use crate::{
    column_label,
    CellPosition,
    ContextMenuRequest,
    Direction,
    Error,
    Grid,
    GridOptions,
    // Session types
    GridSession,
    GridSnapshot,
    MenuAction,
    MenuTarget,
    Result,
    SortConfig,
    SortDirection,
};
