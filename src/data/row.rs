/// One process's display snapshot for a single refresh tick.
///
/// The sampling layer rebuilds rows wholesale on every tick; the ordering
/// engine only ever borrows them and never mutates a field.
#[derive(Clone, Debug, Default)]
pub struct ProcessRow {
    pub pid: u32,
    pub process_name: String,
    /// User-facing name, may differ from `process_name` after
    /// localization or annotation.
    pub display_name: String,
    pub user: String,
    pub status: String,
    pub cpu: f64,
    /// Resident memory in bytes. Signed so a malformed negative sample
    /// is ordered numerically instead of rejected.
    pub memory: i64,
    pub nice: i64,
    /// Relative network-throughput rank, higher means more traffic.
    pub flow_net_rank: i32,
    pub flow_net_label: String,
    /// Relative disk-throughput rank, higher means more traffic.
    pub disk_io_rank: i32,
    pub disk_io_label: String,
}

impl ProcessRow {
    /// Rows refer to the same process iff their PIDs match. PIDs are
    /// unique within one tick, not across time.
    pub fn is_same_row(&self, other: &ProcessRow) -> bool {
        self.pid == other.pid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_same_row_is_reflexive() {
        let row = ProcessRow {
            pid: 42,
            ..ProcessRow::default()
        };
        assert!(row.is_same_row(&row));
    }

    #[test]
    fn is_same_row_ignores_every_field_but_pid() {
        let a = ProcessRow {
            pid: 42,
            process_name: "bash".to_string(),
            cpu: 3.5,
            ..ProcessRow::default()
        };
        let b = ProcessRow {
            pid: 42,
            process_name: "zsh".to_string(),
            memory: 1024,
            ..ProcessRow::default()
        };
        let c = ProcessRow {
            pid: 43,
            process_name: "bash".to_string(),
            ..ProcessRow::default()
        };

        assert!(a.is_same_row(&b));
        assert!(!a.is_same_row(&c));
    }
}
