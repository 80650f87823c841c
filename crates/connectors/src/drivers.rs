/// A compiled-in database driver, as reported by the `env` command.
#[derive(Debug, Clone, Copy)]
pub struct DriverInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Detection probe for one known driver. Probes report `None` when their
/// driver is unavailable in this build.
pub trait DriverProbe {
    fn detect(&self) -> Option<DriverInfo>;
}

// Versions match the pins in this workspace's manifests.
const MYSQL_DRIVER: DriverInfo = DriverInfo {
    name: "mysql_async",
    version: "0.36.1",
};
const PG_DRIVER: DriverInfo = DriverInfo {
    name: "tokio-postgres",
    version: "0.7.15",
};

struct MySqlDriverProbe;
struct PgDriverProbe;

impl DriverProbe for MySqlDriverProbe {
    fn detect(&self) -> Option<DriverInfo> {
        Some(MYSQL_DRIVER)
    }
}

impl DriverProbe for PgDriverProbe {
    fn detect(&self) -> Option<DriverInfo> {
        Some(PG_DRIVER)
    }
}

/// Registry of known driver probes, in report order.
pub fn registry() -> Vec<Box<dyn DriverProbe>> {
    vec![Box::new(MySqlDriverProbe), Box::new(PgDriverProbe)]
}
