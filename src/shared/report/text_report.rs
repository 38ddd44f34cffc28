use crate::features::identity::HostIdentity;
use crate::features::procinfo::{scan_lines, CPU_LABELS, MEMORY_LABELS};
use crate::features::resources::ResourceSnapshot;
use crate::shared::error::ReportError;
use chrono::{DateTime, Local};
use std::io::{BufRead, Write};

/// Every `Label:` is padded to this many characters before its value.
const LABEL_WIDTH: usize = 17;

const TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Renders the report's fixed plain-text layout onto an output stream.
/// All literals of the observable output live here.
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_greeting(&mut self) -> Result<(), ReportError> {
        writeln!(
            self.out,
            "Hello, World! This is the hostgreet diagnostic utility."
        )?;
        Ok(())
    }

    pub fn write_arguments<I, S>(&mut self, args: I) -> Result<(), ReportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        writeln!(self.out, "Program started with {} arguments:", args.len())?;
        for (index, arg) in args.iter().enumerate() {
            writeln!(self.out, "  argv[{}]: {}", index, arg.as_ref())?;
        }
        Ok(())
    }

    pub fn write_identity(&mut self, identity: &HostIdentity) -> Result<(), ReportError> {
        writeln!(self.out, "\n=== SYSTEM INFORMATION ===")?;
        self.labeled("System Name:", &identity.sysname)?;
        self.labeled("Node Name:", &identity.nodename)?;
        self.labeled("Kernel Release:", &identity.release)?;
        self.labeled("Kernel Version:", &identity.version)?;
        self.labeled("Machine:", &identity.machine)?;
        Ok(())
    }

    pub fn write_resources(&mut self, snapshot: &ResourceSnapshot) -> Result<(), ReportError> {
        self.labeled(
            "Uptime:",
            &format!(
                "{} seconds ({} days, {} hours, {} minutes)",
                snapshot.uptime_secs,
                snapshot.uptime_days(),
                snapshot.uptime_hours(),
                snapshot.uptime_minutes()
            ),
        )?;
        let [one, five, fifteen] = snapshot.load_averages();
        self.labeled(
            "Load Average:",
            &format!("{:.2}, {:.2}, {:.2}", one, five, fifteen),
        )?;
        self.labeled("Total RAM:", &format!("{} MB", snapshot.total_ram_mb()))?;
        self.labeled("Free RAM:", &format!("{} MB", snapshot.free_ram_mb()))?;
        self.labeled("Process Count:", &snapshot.procs.to_string())?;
        Ok(())
    }

    pub fn write_cpu_section<R: BufRead>(&mut self, reader: R) -> Result<(), ReportError> {
        writeln!(self.out, "\n=== CPU INFORMATION ===")?;
        scan_lines(reader, &CPU_LABELS, &mut self.out)?;
        Ok(())
    }

    pub fn write_memory_section<R: BufRead>(&mut self, reader: R) -> Result<(), ReportError> {
        writeln!(self.out, "\n=== MEMORY INFORMATION ===")?;
        scan_lines(reader, &MEMORY_LABELS, &mut self.out)?;
        Ok(())
    }

    pub fn write_time(&mut self, now: &DateTime<Local>) -> Result<(), ReportError> {
        writeln!(self.out, "\n=== TIME INFORMATION ===")?;
        self.labeled("Current Time:", &now.format(TIME_FORMAT).to_string())?;
        Ok(())
    }

    pub fn write_closing(&mut self) -> Result<(), ReportError> {
        writeln!(self.out, "=============================\n")?;
        writeln!(self.out, "Application is running successfully!")?;
        Ok(())
    }

    fn labeled(&mut self, label: &str, value: &str) -> Result<(), ReportError> {
        writeln!(self.out, "{label:<width$}{value}", width = LABEL_WIDTH)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Cursor;

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut TextReport<Vec<u8>>) -> Result<(), ReportError>,
    {
        let mut report = TextReport::new(Vec::new());
        write(&mut report).unwrap();
        String::from_utf8(report.into_inner()).unwrap()
    }

    fn sample_identity() -> HostIdentity {
        HostIdentity {
            sysname: String::from("Linux"),
            nodename: String::from("testhost"),
            release: String::from("6.1.0"),
            version: String::from("#1 SMP"),
            machine: String::from("x86_64"),
        }
    }

    fn sample_snapshot() -> ResourceSnapshot {
        ResourceSnapshot {
            uptime_secs: 90_061,
            loads: [131_072, 65_536, 98_304],
            total_ram: 2_097_152,
            free_ram: 1_048_576,
            procs: 42,
        }
    }

    #[test]
    fn test_argument_echo_order_and_count() {
        let output = render(|r| r.write_arguments(["prog", "a", "b"]));
        assert_eq!(
            output,
            "Program started with 3 arguments:\n\
             \x20 argv[0]: prog\n\
             \x20 argv[1]: a\n\
             \x20 argv[2]: b\n"
        );
    }

    #[test]
    fn test_argument_echo_empty_list() {
        let output = render(|r| r.write_arguments(Vec::<String>::new()));
        assert_eq!(output, "Program started with 0 arguments:\n");
    }

    #[test]
    fn test_identity_block_layout() {
        let output = render(|r| r.write_identity(&sample_identity()));
        assert_eq!(
            output,
            "\n=== SYSTEM INFORMATION ===\n\
             System Name:     Linux\n\
             Node Name:       testhost\n\
             Kernel Release:  6.1.0\n\
             Kernel Version:  #1 SMP\n\
             Machine:         x86_64\n"
        );
    }

    #[test]
    fn test_resource_block_layout() {
        let output = render(|r| r.write_resources(&sample_snapshot()));
        assert_eq!(
            output,
            "Uptime:          90061 seconds (1 days, 1 hours, 1 minutes)\n\
             Load Average:    2.00, 1.00, 1.50\n\
             Total RAM:       2 MB\n\
             Free RAM:        1 MB\n\
             Process Count:   42\n"
        );
    }

    #[test]
    fn test_cpu_section_filters_lines() {
        let input = "processor\t: 0\nvendor_id\t: Acme\nmodel name\t: Acme Core 9\n";
        let output = render(|r| r.write_cpu_section(Cursor::new(input)));
        assert_eq!(
            output,
            "\n=== CPU INFORMATION ===\nprocessor\t: 0\nmodel name\t: Acme Core 9\n"
        );
    }

    #[test]
    fn test_memory_section_filters_lines() {
        let input = "MemTotal:  2048 kB\nShmem:  64 kB\nMemFree:  512 kB\n";
        let output = render(|r| r.write_memory_section(Cursor::new(input)));
        assert_eq!(
            output,
            "\n=== MEMORY INFORMATION ===\nMemTotal:  2048 kB\nMemFree:  512 kB\n"
        );
    }

    #[test]
    fn test_time_block_layout() {
        let now = Local.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        let output = render(|r| r.write_time(&now));
        assert_eq!(
            output,
            "\n=== TIME INFORMATION ===\nCurrent Time:    Tue Mar  5 07:08:09 2024\n"
        );
    }

    #[test]
    fn test_closing_layout() {
        let output = render(|r| r.write_closing());
        assert_eq!(
            output,
            "=============================\n\nApplication is running successfully!\n"
        );
    }

    #[test]
    fn test_full_report_block_ordering() {
        let output = render(|r| {
            r.write_greeting()?;
            r.write_arguments(["prog", "a", "b"])?;
            r.write_identity(&sample_identity())?;
            r.write_resources(&sample_snapshot())?;
            r.write_cpu_section(Cursor::new("processor\t: 0\n"))?;
            r.write_memory_section(Cursor::new("MemTotal:  2048 kB\n"))?;
            r.write_time(&Local.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap())?;
            r.write_closing()
        });

        let markers = [
            "Hello, World!",
            "Program started with 3 arguments:",
            "=== SYSTEM INFORMATION ===",
            "Uptime:",
            "=== CPU INFORMATION ===",
            "=== MEMORY INFORMATION ===",
            "=== TIME INFORMATION ===",
            "=============================",
            "Application is running successfully!",
        ];
        let mut last = 0;
        for marker in markers {
            let pos = output[last..]
                .find(marker)
                .unwrap_or_else(|| panic!("missing or out-of-order block: {}", marker));
            last += pos + marker.len();
        }
    }

    #[test]
    fn test_skipped_identity_block_leaves_no_header() {
        let output = render(|r| {
            r.write_greeting()?;
            r.write_arguments(["prog"])?;
            r.write_resources(&sample_snapshot())?;
            r.write_closing()
        });

        assert!(!output.contains("=== SYSTEM INFORMATION ==="));
        assert!(output.contains("Process Count:   42"));
        assert!(output.contains("Application is running successfully!"));
    }
}
