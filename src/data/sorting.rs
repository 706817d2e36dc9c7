use std::cmp::Ordering;

use super::ProcessRow;
use super::collation::Collation;

/// Sort direction for a table column.
///
/// `Desc` applies the column's natural preferred direction: higher cpu,
/// memory, pid, and throughput ranks first, lower nice first, and
/// collation-ascending text. `Asc` inverts the whole key, tie-break
/// included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    pub fn toggle(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Some(SortDir::Asc),
            "desc" => Some(SortDir::Desc),
            _ => None,
        }
    }

    /// True when this direction applies the natural preferred ordering.
    pub fn is_descending(self) -> bool {
        self == SortDir::Desc
    }
}

/// One sortable column of the process table, in on-screen order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    User,
    DiskIo,
    Cpu,
    Pid,
    FlowNet,
    Memory,
    Priority,
    Status,
}

impl SortColumn {
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::User => "user",
            SortColumn::DiskIo => "disk",
            SortColumn::Cpu => "cpu",
            SortColumn::Pid => "pid",
            SortColumn::FlowNet => "net",
            SortColumn::Memory => "mem",
            SortColumn::Priority => "pri",
            SortColumn::Status => "stat",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "name" => Some(SortColumn::Name),
            "user" => Some(SortColumn::User),
            "disk" | "diskio" => Some(SortColumn::DiskIo),
            "cpu" => Some(SortColumn::Cpu),
            "pid" => Some(SortColumn::Pid),
            "net" | "flownet" => Some(SortColumn::FlowNet),
            "mem" | "memory" => Some(SortColumn::Memory),
            "pri" | "priority" | "nice" => Some(SortColumn::Priority),
            "stat" | "status" => Some(SortColumn::Status),
            _ => None,
        }
    }

    /// Direction a freshly selected column opens with. Every column opens
    /// in its natural preferred direction.
    pub fn default_dir(self) -> SortDir {
        SortDir::Desc
    }

    pub fn next(self) -> Self {
        match self {
            SortColumn::Name => SortColumn::User,
            SortColumn::User => SortColumn::DiskIo,
            SortColumn::DiskIo => SortColumn::Cpu,
            SortColumn::Cpu => SortColumn::Pid,
            SortColumn::Pid => SortColumn::FlowNet,
            SortColumn::FlowNet => SortColumn::Memory,
            SortColumn::Memory => SortColumn::Priority,
            SortColumn::Priority => SortColumn::Status,
            SortColumn::Status => SortColumn::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SortColumn::Name => SortColumn::Status,
            SortColumn::User => SortColumn::Name,
            SortColumn::DiskIo => SortColumn::User,
            SortColumn::Cpu => SortColumn::DiskIo,
            SortColumn::Pid => SortColumn::Cpu,
            SortColumn::FlowNet => SortColumn::Pid,
            SortColumn::Memory => SortColumn::FlowNet,
            SortColumn::Priority => SortColumn::Memory,
            SortColumn::Status => SortColumn::Priority,
        }
    }

    /// True iff `a` must be placed before `b` in this column under the
    /// requested direction. `descending == true` applies the column's
    /// natural preferred direction; `false` inverts it, tie-break
    /// included.
    pub fn places_before(
        self,
        a: &ProcessRow,
        b: &ProcessRow,
        descending: bool,
        collation: &Collation,
    ) -> bool {
        match self {
            SortColumn::Name => sort_by_name(a, b, descending, collation),
            SortColumn::User => sort_by_user(a, b, descending, collation),
            SortColumn::DiskIo => sort_by_disk_io(a, b, descending),
            SortColumn::Cpu => sort_by_cpu(a, b, descending),
            SortColumn::Pid => sort_by_pid(a, b, descending),
            SortColumn::FlowNet => sort_by_flow_net(a, b, descending),
            SortColumn::Memory => sort_by_memory(a, b, descending),
            SortColumn::Priority => sort_by_priority(a, b, descending),
            SortColumn::Status => sort_by_status(a, b, descending, collation),
        }
    }
}

// Natural per-key orderings: `Less` means `a` ranks first under the key's
// preferred direction.

fn cmp_cpu(a: &ProcessRow, b: &ProcessRow) -> Ordering {
    // NaN compares as a primary-key tie and falls to the tie-break.
    b.cpu.partial_cmp(&a.cpu).unwrap_or(Ordering::Equal)
}

fn cmp_memory(a: &ProcessRow, b: &ProcessRow) -> Ordering {
    b.memory.cmp(&a.memory)
}

fn natural_ordering(
    a: &ProcessRow,
    b: &ProcessRow,
    column: SortColumn,
    collation: &Collation,
) -> Ordering {
    match column {
        SortColumn::Name => collation
            .compare(&a.display_name, &b.display_name)
            .then_with(|| cmp_cpu(a, b)),
        SortColumn::User => collation.compare(&a.user, &b.user).then_with(|| cmp_cpu(a, b)),
        SortColumn::DiskIo => b
            .disk_io_rank
            .cmp(&a.disk_io_rank)
            .then_with(|| cmp_memory(a, b)),
        SortColumn::Cpu => cmp_cpu(a, b).then_with(|| cmp_memory(a, b)),
        SortColumn::Pid => b.pid.cmp(&a.pid),
        SortColumn::FlowNet => b
            .flow_net_rank
            .cmp(&a.flow_net_rank)
            .then_with(|| cmp_memory(a, b)),
        SortColumn::Memory => cmp_memory(a, b).then_with(|| cmp_cpu(a, b)),
        SortColumn::Priority => a.nice.cmp(&b.nice).then_with(|| cmp_cpu(a, b)),
        SortColumn::Status => collation
            .compare(&a.status, &b.status)
            .then_with(|| cmp_cpu(a, b)),
    }
}

fn directed(natural: Ordering, descending: bool) -> bool {
    let is_sort = natural == Ordering::Less;
    if descending { is_sort } else { !is_sort }
}

/// Higher cpu first; equal cpu falls to memory, higher first.
pub fn sort_by_cpu(a: &ProcessRow, b: &ProcessRow, descending: bool) -> bool {
    directed(cmp_cpu(a, b).then_with(|| cmp_memory(a, b)), descending)
}

/// Higher memory first; equal memory falls to cpu, higher first.
pub fn sort_by_memory(a: &ProcessRow, b: &ProcessRow, descending: bool) -> bool {
    directed(cmp_memory(a, b).then_with(|| cmp_cpu(a, b)), descending)
}

/// Higher pid first. No tie-break: pids are unique within a tick.
pub fn sort_by_pid(a: &ProcessRow, b: &ProcessRow, descending: bool) -> bool {
    directed(b.pid.cmp(&a.pid), descending)
}

/// Lower nice first (lower nice is higher priority); equal nice falls to
/// cpu, higher first.
pub fn sort_by_priority(a: &ProcessRow, b: &ProcessRow, descending: bool) -> bool {
    directed(a.nice.cmp(&b.nice).then_with(|| cmp_cpu(a, b)), descending)
}

/// Collation-ascending display name; collation-equal names fall to cpu,
/// higher first.
pub fn sort_by_name(
    a: &ProcessRow,
    b: &ProcessRow,
    descending: bool,
    collation: &Collation,
) -> bool {
    directed(
        collation
            .compare(&a.display_name, &b.display_name)
            .then_with(|| cmp_cpu(a, b)),
        descending,
    )
}

/// Collation-ascending user name; collation-equal users fall to cpu,
/// higher first.
pub fn sort_by_user(
    a: &ProcessRow,
    b: &ProcessRow,
    descending: bool,
    collation: &Collation,
) -> bool {
    directed(
        collation.compare(&a.user, &b.user).then_with(|| cmp_cpu(a, b)),
        descending,
    )
}

/// Collation-ascending status label; collation-equal statuses fall to
/// cpu, higher first.
pub fn sort_by_status(
    a: &ProcessRow,
    b: &ProcessRow,
    descending: bool,
    collation: &Collation,
) -> bool {
    directed(
        collation
            .compare(&a.status, &b.status)
            .then_with(|| cmp_cpu(a, b)),
        descending,
    )
}

/// Higher disk-throughput rank first; equal ranks fall to memory, higher
/// first.
pub fn sort_by_disk_io(a: &ProcessRow, b: &ProcessRow, descending: bool) -> bool {
    directed(
        b.disk_io_rank
            .cmp(&a.disk_io_rank)
            .then_with(|| cmp_memory(a, b)),
        descending,
    )
}

/// Higher network-throughput rank first; equal ranks fall to memory,
/// higher first.
pub fn sort_by_flow_net(a: &ProcessRow, b: &ProcessRow, descending: bool) -> bool {
    directed(
        b.flow_net_rank
            .cmp(&a.flow_net_rank)
            .then_with(|| cmp_memory(a, b)),
        descending,
    )
}

/// Stable sort over one tick's rows. Expresses the same key policy as the
/// pairwise comparators; rows tied on both primary and tie-break key keep
/// their input order.
pub fn sort_process_rows(
    rows: &mut [ProcessRow],
    column: SortColumn,
    dir: SortDir,
    collation: &Collation,
) {
    rows.sort_by(|a, b| {
        let ordering = natural_ordering(a, b, column, collation);
        match dir {
            SortDir::Desc => ordering,
            SortDir::Asc => ordering.reverse(),
        }
    });
}
