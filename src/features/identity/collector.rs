use crate::features::identity::models::HostIdentity;
use crate::shared::error::CollectionError;
use crate::shared::traits::Collector;
use std::ffi::CStr;
use std::io;
use std::mem;

pub struct IdentityCollector;

impl IdentityCollector {
    pub fn new() -> Self {
        Self
    }
}

impl Collector for IdentityCollector {
    type Output = HostIdentity;

    fn collect(&mut self) -> Result<HostIdentity, CollectionError> {
        let raw = unsafe {
            let mut raw: libc::utsname = mem::zeroed();
            if libc::uname(&mut raw) != 0 {
                return Err(CollectionError::SystemApi(format!(
                    "uname failed: {}",
                    io::Error::last_os_error()
                )));
            }
            raw
        };

        Ok(HostIdentity {
            sysname: field_to_string(&raw.sysname),
            nodename: field_to_string(&raw.nodename),
            release: field_to_string(&raw.release),
            version: field_to_string(&raw.version),
            machine: field_to_string(&raw.machine),
        })
    }
}

impl Default for IdentityCollector {
    fn default() -> Self {
        Self::new()
    }
}

// The kernel NUL-terminates every utsname field.
fn field_to_string(field: &[libc::c_char]) -> String {
    unsafe { CStr::from_ptr(field.as_ptr()).to_string_lossy().into_owned() }
}
