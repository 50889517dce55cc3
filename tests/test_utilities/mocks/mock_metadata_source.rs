use pip_inventory::prelude::*;

/// Mock PackageMetadataSource returning a fixed distribution list,
/// or failing enumeration entirely.
pub struct MockMetadataSource {
    distributions: Vec<Distribution>,
    fail: bool,
}

impl MockMetadataSource {
    pub fn new(distributions: Vec<Distribution>) -> Self {
        Self {
            distributions,
            fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            distributions: Vec::new(),
            fail: true,
        }
    }
}

impl PackageMetadataSource for MockMetadataSource {
    fn distributions(&self) -> Result<Vec<Distribution>> {
        if self.fail {
            anyhow::bail!("Mock registry enumeration failure");
        }
        Ok(self.distributions.clone())
    }
}
