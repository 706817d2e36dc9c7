mod format;

pub use format::{
    decorate_name, fit_text, format_bytes, format_cpu, format_memory, nice_label, take_width,
    text_width,
};
