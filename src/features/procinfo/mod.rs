mod scanner;

pub use scanner::{
    fill_line, scan_lines, CPUINFO_PATH, CPU_LABELS, LINE_BUF_LEN, MEMINFO_PATH, MEMORY_LABELS,
};
