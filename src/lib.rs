pub mod features;
pub mod shared;

// Re-export commonly used items from features
pub use features::identity::{HostIdentity, IdentityCollector};
pub use features::procinfo::{
    fill_line, scan_lines, CPUINFO_PATH, CPU_LABELS, LINE_BUF_LEN, MEMINFO_PATH, MEMORY_LABELS,
};
pub use features::resources::{ResourceCollector, ResourceSnapshot, LOAD_SCALE};

// Re-export shared functionality
pub use shared::error::{CollectionError, ReportError};
pub use shared::report::TextReport;
pub use shared::traits::{Collector, Validatable};
