use crate::features::resources::models::ResourceSnapshot;
use crate::shared::error::CollectionError;
use crate::shared::traits::Collector;
use std::io;
use std::mem;

pub struct ResourceCollector;

impl ResourceCollector {
    pub fn new() -> Self {
        Self
    }
}

impl Collector for ResourceCollector {
    type Output = ResourceSnapshot;

    fn collect(&mut self) -> Result<ResourceSnapshot, CollectionError> {
        let info = unsafe {
            let mut info: libc::sysinfo = mem::zeroed();
            if libc::sysinfo(&mut info) != 0 {
                return Err(CollectionError::SystemApi(format!(
                    "sysinfo failed: {}",
                    io::Error::last_os_error()
                )));
            }
            info
        };

        Ok(ResourceSnapshot {
            uptime_secs: info.uptime as i64,
            loads: [
                info.loads[0] as u64,
                info.loads[1] as u64,
                info.loads[2] as u64,
            ],
            total_ram: info.totalram as u64,
            free_ram: info.freeram as u64,
            procs: info.procs,
        })
    }
}

impl Default for ResourceCollector {
    fn default() -> Self {
        Self::new()
    }
}
