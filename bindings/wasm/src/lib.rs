//! WebAssembly bindings for tabgrid
//!
//! Exposes an editing session to JavaScript. The page renders from
//! [`GridSession::snapshot`] and forwards input events (typed text, key
//! presses, right-clicks, menu picks) to the matching methods.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use tabgrid::{
    ContextMenuRequest, Direction, GridOptions, GridSession as CoreSession, MenuAction,
    MenuTarget, SortDirection,
};

// =============================================================================
// Error Conversion
// =============================================================================

fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(to_js_error)
}

// =============================================================================
// Key mapping
// =============================================================================

/// Map a `KeyboardEvent.key` value to a focus move
///
/// Returns `None` for keys the grid leaves to the browser.
pub fn direction_for_key(key: &str, shift: bool) -> Option<Direction> {
    match key {
        "Tab" if shift => Some(Direction::TabBackward),
        "Tab" => Some(Direction::TabForward),
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        _ => None,
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MenuEntry {
    name: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MenuView {
    target: MenuTarget,
    actions: Vec<MenuEntry>,
}

impl From<&ContextMenuRequest> for MenuView {
    fn from(menu: &ContextMenuRequest) -> Self {
        Self {
            target: menu.target(),
            actions: menu
                .actions()
                .iter()
                .map(|a| MenuEntry {
                    name: a.name(),
                    label: a.label(),
                })
                .collect(),
        }
    }
}

// =============================================================================
// GridSession - JavaScript wrapper
// =============================================================================

/// An editable grid with focus, filter form and context menu state
#[wasm_bindgen]
pub struct GridSession {
    inner: CoreSession,
}

#[wasm_bindgen]
impl GridSession {
    /// Create a grid of `rows` x `cols` empty cells (defaults 10 x 8)
    #[wasm_bindgen(constructor)]
    pub fn new(rows: Option<usize>, cols: Option<usize>) -> Self {
        let mut options = GridOptions::default();
        if let Some(rows) = rows {
            options = options.with_rows(rows);
        }
        if let Some(cols) = cols {
            options = options.with_columns(cols);
        }
        Self {
            inner: CoreSession::new(&options),
        }
    }

    /// Create a grid from a `{ rows, columns }` options object
    #[wasm_bindgen(js_name = fromOptions)]
    pub fn from_options(options: JsValue) -> Result<GridSession, JsError> {
        let options: GridOptions = serde_wasm_bindgen::from_value(options).map_err(to_js_error)?;
        Ok(Self {
            inner: CoreSession::new(&options),
        })
    }

    // === Queries ===

    #[wasm_bindgen(getter, js_name = rowCount)]
    pub fn row_count(&self) -> usize {
        self.inner.displayed_row_count()
    }

    #[wasm_bindgen(getter, js_name = totalRows)]
    pub fn total_rows(&self) -> usize {
        self.inner.grid().row_count()
    }

    #[wasm_bindgen(getter, js_name = columnCount)]
    pub fn column_count(&self) -> usize {
        self.inner.column_count()
    }

    #[wasm_bindgen(getter)]
    pub fn filtered(&self) -> bool {
        self.inner.is_filtered()
    }

    /// Text of a displayed cell, or `undefined` outside the grid
    pub fn cell(&self, row: usize, col: usize) -> Option<String> {
        self.inner.displayed_cell(row, col).map(str::to_string)
    }

    /// Header labels for every column
    #[wasm_bindgen(getter, js_name = columnLabels)]
    pub fn column_labels(&self) -> js_sys::Array {
        (0..self.inner.column_count())
            .map(|col| JsValue::from_str(&tabgrid::column_label(col)))
            .collect()
    }

    /// Everything needed to draw the grid
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js_value(&self.inner.snapshot())
    }

    /// Open menu as `{ target, actions: [{ name, label }] }`, or `null`
    #[wasm_bindgen(getter, js_name = contextMenu)]
    pub fn context_menu(&self) -> Result<JsValue, JsError> {
        match self.inner.context_menu() {
            Some(menu) => to_js_value(&MenuView::from(menu)),
            None => Ok(JsValue::NULL),
        }
    }

    // === Dimensions and editing ===

    /// Apply the row-count field (clamped to at least 1)
    #[wasm_bindgen(js_name = setRowCount)]
    pub fn set_row_count(&mut self, text: &str) {
        self.inner.set_row_count_text(text);
    }

    /// Apply the column-count field (clamped to at least 1)
    #[wasm_bindgen(js_name = setColumnCount)]
    pub fn set_column_count(&mut self, text: &str) {
        self.inner.set_column_count_text(text);
    }

    #[wasm_bindgen(js_name = setCell)]
    pub fn set_cell(&mut self, row: usize, col: usize, text: &str) -> Result<(), JsError> {
        self.inner.edit_cell(row, col, text).map_err(to_js_error)
    }

    /// Sort by a column; `direction` is "asc" or "desc"
    pub fn sort(&mut self, col: usize, direction: &str) -> Result<(), JsError> {
        let direction: SortDirection = direction.parse().map_err(to_js_error)?;
        self.inner.sort(col, direction).map_err(to_js_error)
    }

    // === Filter ===

    #[wasm_bindgen(js_name = setFilterColumn)]
    pub fn set_filter_column(&mut self, col: usize) {
        self.inner.set_filter_column(col);
    }

    #[wasm_bindgen(js_name = setFilterValue)]
    pub fn set_filter_value(&mut self, value: &str) {
        self.inner.set_filter_value(value);
    }

    /// Apply the filter form; returns the number of matching rows
    #[wasm_bindgen(js_name = applyFilter)]
    pub fn apply_filter(&mut self) -> usize {
        self.inner.apply_filter()
    }

    #[wasm_bindgen(js_name = clearFilter)]
    pub fn clear_filter(&mut self) {
        self.inner.clear_filter();
    }

    // === Focus ===

    #[wasm_bindgen(getter, js_name = focusRow)]
    pub fn focus_row(&self) -> usize {
        self.inner.focus().row
    }

    #[wasm_bindgen(getter, js_name = focusColumn)]
    pub fn focus_column(&self) -> usize {
        self.inner.focus().col
    }

    #[wasm_bindgen(js_name = focusCell)]
    pub fn focus_cell(&mut self, row: usize, col: usize) -> Result<(), JsError> {
        self.inner.focus_cell(row, col).map_err(to_js_error)
    }

    /// Handle a key press
    ///
    /// Returns `true` when the grid consumed the key; the caller should then
    /// call `preventDefault()` on the event.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str, shift: bool) -> bool {
        match direction_for_key(key, shift) {
            Some(direction) => {
                self.inner.navigate(direction);
                true
            }
            None => false,
        }
    }

    // === Context menu ===

    #[wasm_bindgen(js_name = openRowMenu)]
    pub fn open_row_menu(&mut self, row: usize) -> Result<(), JsError> {
        self.open_menu(MenuTarget::Row { row })
    }

    #[wasm_bindgen(js_name = openColumnMenu)]
    pub fn open_column_menu(&mut self, col: usize) -> Result<(), JsError> {
        self.open_menu(MenuTarget::Column { col })
    }

    #[wasm_bindgen(js_name = openCellMenu)]
    pub fn open_cell_menu(&mut self, row: usize, col: usize) -> Result<(), JsError> {
        self.open_menu(MenuTarget::Cell { row, col })
    }

    #[wasm_bindgen(js_name = dismissMenu)]
    pub fn dismiss_menu(&mut self) {
        self.inner.dismiss_context_menu();
    }

    /// Pick an entry of the open menu by name (e.g. "insert-row-above")
    ///
    /// Returns `false` when the action left the grid unchanged.
    #[wasm_bindgen(js_name = chooseMenuAction)]
    pub fn choose_menu_action(&mut self, name: &str) -> Result<bool, JsError> {
        let action: MenuAction = name.parse().map_err(to_js_error)?;
        self.inner.choose_menu_action(action).map_err(to_js_error)
    }
}

impl GridSession {
    fn open_menu(&mut self, target: MenuTarget) -> Result<(), JsError> {
        self.inner
            .open_context_menu(target)
            .map(|_| ())
            .map_err(to_js_error)
    }
}

impl Default for GridSession {
    fn default() -> Self {
        Self::new(None, None)
    }
}
