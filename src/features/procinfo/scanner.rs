use std::io::{self, BufRead, Write};

pub const CPUINFO_PATH: &str = "/proc/cpuinfo";
pub const MEMINFO_PATH: &str = "/proc/meminfo";

/// Labels whose lines are kept when scanning the CPU source.
pub const CPU_LABELS: [&str; 5] = ["processor", "model name", "cpu MHz", "BogoMIPS", "Features"];

/// Labels whose lines are kept when scanning the memory source.
pub const MEMORY_LABELS: [&str; 5] = ["MemTotal", "MemFree", "MemAvailable", "Buffers", "Cached"];

/// Size of the fixed line buffer. A fill holds at most `LINE_BUF_LEN - 1`
/// bytes, so a longer line arrives as several fills and each fill is
/// matched against the labels on its own. Changing this changes the
/// observable output for over-long lines.
pub const LINE_BUF_LEN: usize = 256;

/// Fill `buf` with the next line fragment: up to `buf.len() - 1` bytes,
/// stopping after a newline. Returns the number of bytes written; 0 means
/// the reader is exhausted.
pub fn fill_line<R: BufRead>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let cap = buf.len() - 1;
    let mut len = 0;
    while len < cap {
        let byte = match reader.fill_buf()? {
            [] => break,
            bytes => bytes[0],
        };
        reader.consume(1);
        buf[len] = byte;
        len += 1;
        if byte == b'\n' {
            break;
        }
    }
    Ok(len)
}

/// Scan `reader` fill by fill, writing every fill whose leading bytes
/// equal one of `labels` to `out` verbatim and discarding the rest.
pub fn scan_lines<R: BufRead, W: Write>(
    mut reader: R,
    labels: &[&str],
    out: &mut W,
) -> io::Result<()> {
    let mut buf = [0u8; LINE_BUF_LEN];
    loop {
        let len = fill_line(&mut reader, &mut buf)?;
        if len == 0 {
            break;
        }
        let line = &buf[..len];
        if labels.iter().any(|label| line.starts_with(label.as_bytes())) {
            out.write_all(line)?;
        }
    }
    Ok(())
}
