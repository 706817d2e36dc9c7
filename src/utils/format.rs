use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn text_width(value: &str) -> usize {
    UnicodeWidthStr::width(value)
}

pub fn format_bytes(bytes: u64) -> String {
    const UNIT: f64 = 1024.0;
    let bytes = bytes as f64;

    if bytes < UNIT {
        return format!("{bytes:.0} B");
    }

    let kb = bytes / UNIT;
    if kb < UNIT {
        return format!("{kb:.1} KiB");
    }

    let mb = kb / UNIT;
    if mb < UNIT {
        return format!("{mb:.1} MiB");
    }

    let gb = mb / UNIT;
    if gb < UNIT {
        return format!("{gb:.1} GiB");
    }

    let tb = gb / UNIT;
    format!("{tb:.1} TiB")
}

/// Memory-column label. Non-positive samples render as zero.
pub fn format_memory(bytes: i64) -> String {
    if bytes > 0 {
        format_bytes(bytes as u64)
    } else {
        "0 B".to_string()
    }
}

/// Cpu-column label, one decimal place.
pub fn format_cpu(cpu: f64) -> String {
    format!("{cpu:.1}")
}

/// Coarse bucket label for the priority column.
pub fn nice_label(nice: i64) -> &'static str {
    if nice < -7 {
        "Very High"
    } else if nice < 0 {
        "High"
    } else if nice == 0 {
        "Normal"
    } else if nice <= 7 {
        "Low"
    } else {
        "Very Low"
    }
}

/// Status-annotated name for the first table column.
pub fn decorate_name(status: &str, name: &str) -> String {
    match status {
        "Stopped" => format!("(Suspend) {name}"),
        "Zombie" => format!("(No response) {name}"),
        "Uninterruptible" => format!("(Uninterruptible) {name}"),
        _ => name.to_string(),
    }
}

pub fn fit_text(value: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if text_width(value) <= max_len {
        return value.to_string();
    }
    if max_len <= 3 {
        return take_width(value, max_len);
    }
    let mut trimmed = take_width(value, max_len - 3);
    trimmed.push_str("...");
    trimmed
}

pub fn take_width(value: &str, max_len: usize) -> String {
    let mut output = String::new();
    let mut width = 0;
    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_len {
            break;
        }
        output.push(ch);
        width += ch_width;
    }
    output
}
