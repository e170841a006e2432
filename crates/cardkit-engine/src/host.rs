use crate::{Error, Result};

/// Resolve the local machine name from the environment.
///
/// `HOSTNAME` covers most Unix shells, `COMPUTERNAME` covers Windows. Neither
/// is guaranteed to be exported, so callers must treat failure as routine;
/// the card footer logs it and moves on.
pub fn machine_name() -> Result<String> {
    for var in ["HOSTNAME", "COMPUTERNAME"] {
        if let Ok(name) = std::env::var(var) {
            if !name.is_empty() {
                return Ok(name);
            }
        }
    }

    Err(Error::Host(
        "neither HOSTNAME nor COMPUTERNAME is set".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_name_reflects_hostname_var() {
        // SAFETY: test-local mutation; no other test in this module touches
        // these variables.
        unsafe { std::env::set_var("HOSTNAME", "build-agent-07") };

        let name = machine_name().expect("HOSTNAME is set");
        assert_eq!(name, "build-agent-07");

        unsafe { std::env::remove_var("HOSTNAME") };
    }
}
