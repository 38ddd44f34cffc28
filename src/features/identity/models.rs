use crate::shared::traits::Validatable;

/// Kernel identity strings, one snapshot per run.
#[derive(Debug, Clone)]
pub struct HostIdentity {
    pub sysname: String,
    pub nodename: String,
    pub release: String,
    pub version: String,
    pub machine: String,
}

impl Validatable for HostIdentity {
    fn validate(&self) -> Result<(), String> {
        if self.sysname.is_empty() {
            return Err("System name cannot be empty".to_string());
        }
        if self.machine.is_empty() {
            return Err("Machine type cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_sysname_and_machine() {
        let identity = HostIdentity {
            sysname: String::from("Linux"),
            nodename: String::from("box"),
            release: String::from("6.1.0"),
            version: String::from("#1 SMP"),
            machine: String::from("x86_64"),
        };
        assert!(identity.is_valid());

        let mut nameless = identity.clone();
        nameless.sysname.clear();
        assert!(nameless.validate().is_err());

        let mut machineless = identity;
        machineless.machine.clear();
        assert!(machineless.validate().is_err());
    }
}
