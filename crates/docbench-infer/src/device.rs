use std::fmt;

/// Where inference runs. CUDA and CoreML sessions are only constructible
/// when the matching cargo feature is enabled; selecting them otherwise
/// fails at session build time.
#[derive(Debug, Clone, PartialEq)]
pub enum Device {
    Cpu,
    Cuda { device_id: i32 },
    CoreMl,
}

impl Device {
    /// Parse a command-line device argument: `cpu`, `cuda`, `cuda:N`
    /// or `coreml`.
    pub fn parse_arg(arg: &str) -> Option<Device> {
        match arg {
            "cpu" => Some(Device::Cpu),
            "cuda" => Some(Device::Cuda { device_id: 0 }),
            "coreml" => Some(Device::CoreMl),
            _ => {
                let id = arg.strip_prefix("cuda:")?.parse().ok()?;
                Some(Device::Cuda { device_id: id })
            }
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "CPU"),
            Device::Cuda { device_id } => write!(f, "CUDA(device_id={device_id})"),
            Device::CoreMl => write!(f, "CoreML"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_devices() {
        assert_eq!(Device::parse_arg("cpu"), Some(Device::Cpu));
        assert_eq!(Device::parse_arg("cuda"), Some(Device::Cuda { device_id: 0 }));
        assert_eq!(
            Device::parse_arg("cuda:1"),
            Some(Device::Cuda { device_id: 1 })
        );
        assert_eq!(Device::parse_arg("coreml"), Some(Device::CoreMl));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Device::parse_arg("tpu"), None);
        assert_eq!(Device::parse_arg("cuda:x"), None);
        assert_eq!(Device::parse_arg(""), None);
    }
}
