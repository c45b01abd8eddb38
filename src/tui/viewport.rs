//! Scroll position of the result list.
//!
//! The window of visible results is recomputed on every render from the
//! result count, the highlighted row and the previous window start, so that
//! the list only scrolls when the highlighted row would leave the screen.

/// Rows of the screen not used by the result list: status line and query line
pub const RESERVED_ROWS: usize = 2;

/// Sticky scroll state, the only thing kept between two renders
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    draw_start: usize,
}

/// The visible part of the result list for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Rows available for results
    pub item_rows: usize,
    /// Index in the results of the first visible item
    pub draw_start: usize,
    /// Number of visible items
    pub visible_count: usize,
    /// Position of the highlighted item inside the window
    pub local_cursor: Option<usize>,
    /// Whether the first item sits at the bottom
    pub reverse: bool,
}

/// Rows left for the result list on a screen of `rows` rows
pub fn item_rows(rows: u16) -> usize {
    (rows as usize).saturating_sub(RESERVED_ROWS)
}

impl Viewport {
    /// Index in the results of the first visible item, as of the last update
    pub fn draw_start(&self) -> usize {
        self.draw_start
    }

    /// Recomputes the window for `total` results, the highlighted row `cursor_item` and a screen of `rows` rows
    pub fn update(&mut self, total: usize, cursor_item: Option<usize>, rows: u16, reverse: bool) -> Window {
        let item_rows = item_rows(rows);
        let visible_count = item_rows.min(total);

        if visible_count == 0 {
            self.draw_start = 0;
            return Window {
                item_rows,
                draw_start: 0,
                visible_count,
                local_cursor: None,
                reverse,
            };
        }

        let mut start = self.draw_start;
        if total < item_rows {
            start = 0;
        } else if let Some(cursor) = cursor_item {
            if cursor < start {
                start = cursor;
            } else if cursor >= start + visible_count {
                start = (cursor + 1 - visible_count) % total;
            }
        }
        start = start.min(total - visible_count);
        if start != self.draw_start {
            trace!("scrolled from {} to {start}", self.draw_start);
        }
        self.draw_start = start;

        let local_cursor = cursor_item
            .and_then(|cursor| cursor.checked_sub(start))
            .filter(|&local| local < visible_count);

        Window {
            item_rows,
            draw_start: start,
            visible_count,
            local_cursor,
            reverse,
        }
    }
}

impl Window {
    /// Window-local index of the item drawn on screen row `row`, if any
    pub fn local_index(&self, row: usize) -> Option<usize> {
        if row >= self.item_rows {
            return None;
        }
        let local = if self.reverse { self.item_rows - 1 - row } else { row };
        (local < self.visible_count).then_some(local)
    }

    /// Index in the results of the item drawn on screen row `row`, if any
    pub fn result_index(&self, row: usize) -> Option<usize> {
        self.local_index(row).map(|local| self.draw_start + local)
    }
}
