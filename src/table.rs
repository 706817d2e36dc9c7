use crate::config::Config;
use crate::data::{Collation, ProcessRow, SortColumn, SortDir, matches_search, sort_process_rows};

/// Consumer-side state for one process table: the current sort column
/// and direction, the search filter, the sorted and filtered rows of the
/// latest tick, and a selection anchored by PID so it survives refreshes.
pub struct TableView {
    sort_column: SortColumn,
    sort_dir: SortDir,
    filter: String,
    rows: Vec<ProcessRow>,
    selected: Option<usize>,
    selected_pid: Option<u32>,
}

impl TableView {
    pub fn new(config: &Config) -> Self {
        Self {
            sort_column: config.sort_column,
            sort_dir: config.sort_dir,
            filter: String::new(),
            rows: Vec::new(),
            selected: None,
            selected_pid: None,
        }
    }

    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    pub fn sort_dir(&self) -> SortDir {
        self.sort_dir
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn rows(&self) -> &[ProcessRow] {
        &self.rows
    }

    /// Replace the rows with a fresh tick's snapshots: sort, filter, and
    /// re-anchor the selection on the previously selected PID.
    pub fn refresh(&mut self, rows: Vec<ProcessRow>, collation: &Collation) {
        self.rows = rows;
        sort_process_rows(&mut self.rows, self.sort_column, self.sort_dir, collation);

        let filter = self.filter.trim();
        if !filter.is_empty() {
            self.rows.retain(|row| matches_search(row, filter));
        }

        self.sync_selection();
    }

    /// Reorder the current rows in place, e.g. after a sort change
    /// between ticks.
    pub fn resort(&mut self, collation: &Collation) {
        sort_process_rows(&mut self.rows, self.sort_column, self.sort_dir, collation);
        self.sync_selection();
    }

    /// Select a column; the direction resets to the column's default.
    pub fn set_sort_column(&mut self, column: SortColumn) {
        self.sort_column = column;
        self.sort_dir = column.default_dir();
    }

    pub fn next_column(&mut self) {
        self.set_sort_column(self.sort_column.next());
    }

    pub fn prev_column(&mut self) {
        self.set_sort_column(self.sort_column.prev());
    }

    pub fn toggle_sort_dir(&mut self) {
        self.sort_dir = self.sort_dir.toggle();
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn move_selection(&mut self, delta: i32) {
        if self.rows.is_empty() {
            self.selected = None;
            self.selected_pid = None;
            return;
        }

        let current = self.selected.unwrap_or(0);
        let len = self.rows.len();
        let new_index = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (current + delta as usize).min(len.saturating_sub(1))
        };

        self.selected = Some(new_index);
        self.selected_pid = Some(self.rows[new_index].pid);
    }

    pub fn select_row(&mut self, index: usize) {
        if self.rows.is_empty() {
            self.selected = None;
            self.selected_pid = None;
            return;
        }

        let idx = index.min(self.rows.len().saturating_sub(1));
        self.selected = Some(idx);
        self.selected_pid = Some(self.rows[idx].pid);
    }

    pub fn select_pid(&mut self, pid: u32) {
        self.selected_pid = Some(pid);
        if let Some(index) = self.rows.iter().position(|row| row.pid == pid) {
            self.selected = Some(index);
        }
    }

    pub fn selected_row(&self) -> Option<&ProcessRow> {
        self.selected.and_then(|idx| self.rows.get(idx))
    }

    /// Whether `row` is the currently selected one, for row highlighting.
    pub fn is_selected(&self, row: &ProcessRow) -> bool {
        self.selected_row().is_some_and(|sel| sel.is_same_row(row))
    }

    fn sync_selection(&mut self) {
        if self.rows.is_empty() {
            self.selected = None;
            self.selected_pid = None;
            return;
        }

        let selected_idx = self
            .selected_pid
            .and_then(|pid| self.rows.iter().position(|row| row.pid == pid))
            .or(self.selected)
            .filter(|&idx| idx < self.rows.len())
            .unwrap_or(0);

        self.selected = Some(selected_idx);
        self.selected_pid = Some(self.rows[selected_idx].pid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pid: u32, name: &str, cpu: f64) -> ProcessRow {
        ProcessRow {
            pid,
            process_name: name.to_string(),
            display_name: name.to_string(),
            user: "alice".to_string(),
            cpu,
            ..ProcessRow::default()
        }
    }

    fn view() -> TableView {
        TableView::new(&Config::default())
    }

    #[test]
    fn refresh_sorts_by_configured_column() {
        let collation = Collation::root().unwrap();
        let mut table = view();

        table.refresh(
            vec![row(1, "a", 5.0), row(2, "b", 50.0), row(3, "c", 20.0)],
            &collation,
        );

        let pids: Vec<u32> = table.rows().iter().map(|r| r.pid).collect();
        assert_eq!(pids, vec![2, 3, 1]);
    }

    #[test]
    fn refresh_applies_search_filter() {
        let collation = Collation::root().unwrap();
        let mut table = view();
        table.set_filter("chrome");

        table.refresh(
            vec![row(1, "chrome", 5.0), row(2, "bash", 50.0)],
            &collation,
        );

        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].pid, 1);
    }

    #[test]
    fn selection_survives_refresh_by_pid() {
        let collation = Collation::root().unwrap();
        let mut table = view();

        table.refresh(vec![row(1, "a", 5.0), row(2, "b", 50.0)], &collation);
        table.move_selection(1);
        assert_eq!(table.selected_row().map(|r| r.pid), Some(1));

        // pid 1 climbs to the top on the next tick; selection follows it.
        table.refresh(vec![row(1, "a", 90.0), row(2, "b", 50.0)], &collation);
        assert_eq!(table.selected_row().map(|r| r.pid), Some(1));
        assert!(table.is_selected(&row(1, "a", 90.0)));
    }

    #[test]
    fn selection_falls_back_when_pid_disappears() {
        let collation = Collation::root().unwrap();
        let mut table = view();

        table.refresh(vec![row(1, "a", 5.0), row(2, "b", 50.0)], &collation);
        table.select_pid(1);

        table.refresh(vec![row(2, "b", 50.0), row(3, "c", 10.0)], &collation);
        assert!(table.selected_row().is_some());
        assert_ne!(table.selected_row().map(|r| r.pid), Some(1));
    }

    #[test]
    fn set_sort_column_resets_direction() {
        let mut table = view();
        table.toggle_sort_dir();
        assert_eq!(table.sort_dir(), SortDir::Asc);

        table.set_sort_column(SortColumn::Memory);
        assert_eq!(table.sort_column(), SortColumn::Memory);
        assert_eq!(table.sort_dir(), SortDir::Desc);
    }

    #[test]
    fn column_cycling_moves_through_neighbors() {
        let mut table = view();
        let start = table.sort_column();
        table.next_column();
        assert_eq!(table.sort_column(), start.next());
        table.prev_column();
        assert_eq!(table.sort_column(), start);
    }

    #[test]
    fn resort_reorders_current_rows() {
        let collation = Collation::root().unwrap();
        let mut table = view();
        table.refresh(vec![row(1, "a", 5.0), row(2, "b", 50.0)], &collation);

        table.toggle_sort_dir();
        table.resort(&collation);

        let pids: Vec<u32> = table.rows().iter().map(|r| r.pid).collect();
        assert_eq!(pids, vec![1, 2]);
    }

    #[test]
    fn move_selection_clamps_to_bounds() {
        let collation = Collation::root().unwrap();
        let mut table = view();
        table.refresh(vec![row(1, "a", 5.0), row(2, "b", 50.0)], &collation);

        table.move_selection(10);
        assert_eq!(table.selected_row().map(|r| r.pid), Some(1));
        table.move_selection(-10);
        assert_eq!(table.selected_row().map(|r| r.pid), Some(2));
    }
}
