use chrono::Local;
use hostgreet::{
    features::procinfo::{CPUINFO_PATH, MEMINFO_PATH},
    shared::{error::ReportError, report::TextReport, traits::Collector},
    IdentityCollector, ResourceCollector,
};
use log::{debug, error};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};

fn main() {
    env_logger::init();

    let stdout = io::stdout();
    let mut report = TextReport::new(stdout.lock());
    if let Err(e) = run(&mut report) {
        error!("Failed to write report: {}", e);
    }
}

fn run<W: Write>(report: &mut TextReport<W>) -> Result<(), ReportError> {
    report.write_greeting()?;
    report.write_arguments(env::args_os().map(|arg| arg.to_string_lossy().into_owned()))?;

    match IdentityCollector::new().collect() {
        Ok(identity) => report.write_identity(&identity)?,
        Err(e) => debug!("Host identity unavailable, skipping block: {}", e),
    }

    match ResourceCollector::new().collect() {
        Ok(snapshot) => report.write_resources(&snapshot)?,
        Err(e) => debug!("Resource snapshot unavailable, skipping block: {}", e),
    }

    match File::open(CPUINFO_PATH) {
        Ok(file) => report.write_cpu_section(BufReader::new(file))?,
        Err(e) => debug!("Cannot open {}, skipping block: {}", CPUINFO_PATH, e),
    }

    match File::open(MEMINFO_PATH) {
        Ok(file) => report.write_memory_section(BufReader::new(file))?,
        Err(e) => debug!("Cannot open {}, skipping block: {}", MEMINFO_PATH, e),
    }

    report.write_time(&Local::now())?;
    report.write_closing()?;
    Ok(())
}
