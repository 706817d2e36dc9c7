mod collation;
mod row;
mod search;
mod sorting;

pub use collation::Collation;
pub use row::ProcessRow;
pub use search::matches_search;
pub use sorting::{
    SortColumn, SortDir, sort_by_cpu, sort_by_disk_io, sort_by_flow_net, sort_by_memory,
    sort_by_name, sort_by_pid, sort_by_priority, sort_by_status, sort_by_user, sort_process_rows,
};
