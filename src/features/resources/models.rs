use crate::shared::traits::Validatable;

/// Fixed-point scale of the kernel's load average counters.
pub const LOAD_SCALE: f64 = 65_536.0;

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;
const BYTES_PER_MB: u64 = 1_048_576;

/// One-shot resource counters. Loads are kept in the kernel's raw
/// fixed-point representation; memory totals are byte counts.
#[derive(Debug, Clone)]
pub struct ResourceSnapshot {
    pub uptime_secs: i64,
    pub loads: [u64; 3],
    pub total_ram: u64,
    pub free_ram: u64,
    pub procs: u16,
}

impl ResourceSnapshot {
    pub fn uptime_days(&self) -> i64 {
        self.uptime_secs / SECS_PER_DAY
    }

    pub fn uptime_hours(&self) -> i64 {
        (self.uptime_secs % SECS_PER_DAY) / SECS_PER_HOUR
    }

    pub fn uptime_minutes(&self) -> i64 {
        (self.uptime_secs % SECS_PER_HOUR) / SECS_PER_MINUTE
    }

    /// One, five and fifteen minute averages, unscaled.
    pub fn load_averages(&self) -> [f64; 3] {
        self.loads.map(|raw| raw as f64 / LOAD_SCALE)
    }

    pub fn total_ram_mb(&self) -> u64 {
        self.total_ram / BYTES_PER_MB
    }

    pub fn free_ram_mb(&self) -> u64 {
        self.free_ram / BYTES_PER_MB
    }
}

impl Validatable for ResourceSnapshot {
    fn validate(&self) -> Result<(), String> {
        if self.uptime_secs < 0 {
            return Err("Uptime cannot be negative".to_string());
        }
        if self.free_ram > self.total_ram {
            return Err("Free RAM cannot exceed total RAM".to_string());
        }
        Ok(())
    }
}
