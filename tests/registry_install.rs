//! Installing the process-wide registry
//!
//! Kept in its own test binary: installation is write-once per process.

use atoll::prelude::*;
use atoll::registry::{self, Registry};

fn midrange(sample: &[f64], _params: &[f64]) -> Result<Value> {
    let lo = atoll::min(sample)?;
    let hi = atoll::max(sample)?;
    Ok(Value::Scalar((lo + hi) / 2.0))
}

#[test]
fn test_install_is_write_once() {
    let custom = Registry::builtin().with("midrange", midrange);
    registry::install(custom).unwrap();

    let data = [1.0, 10.0, 4.0];
    assert_eq!(
        stats(&data).call("midrange", &[]).unwrap(),
        Value::Scalar(5.5)
    );
    assert_eq!(stats(&data).call("mean", &[]).unwrap(), Value::Scalar(5.0));

    let second = registry::install(Registry::new());
    assert!(matches!(second, Err(Error::RegistryInstalled)));
    assert!(registry::global().contains("midrange"));
}
