use super::ProcessRow;

/// Case-insensitive substring match used by the search box.
///
/// Lowercases the query and the row's process name, display name, and
/// user (pid is matched against its decimal form), then checks for a
/// substring hit in any of the four. An empty query matches every row.
pub fn matches_search(row: &ProcessRow, query: &str) -> bool {
    let needle = query.to_lowercase();
    row.process_name.to_lowercase().contains(&needle)
        || row.display_name.to_lowercase().contains(&needle)
        || row.user.to_lowercase().contains(&needle)
        || row.pid.to_string().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ProcessRow {
        ProcessRow {
            pid: 1234,
            process_name: "chrome".to_string(),
            display_name: "Chrome Browser".to_string(),
            user: "alice".to_string(),
            ..ProcessRow::default()
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_search(&row(), ""));
    }

    #[test]
    fn matches_are_case_insensitive() {
        let mut root_owned = row();
        root_owned.user = "root".to_string();
        assert!(matches_search(&root_owned, "ROOT"));
        assert!(matches_search(&row(), "CHROME"));
    }

    #[test]
    fn pid_matches_by_decimal_form() {
        assert!(matches_search(&row(), "1234"));
        assert!(matches_search(&row(), "23"));
        assert!(!matches_search(&row(), "5678"));
    }

    #[test]
    fn display_name_is_searched() {
        assert!(matches_search(&row(), "browser"));
    }

    #[test]
    fn unrelated_query_does_not_match() {
        assert!(!matches_search(&row(), "firefox"));
    }
}
