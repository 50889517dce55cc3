use crate::inventory::domain::Distribution;
use crate::shared::Result;

/// PackageMetadataSource port for enumerating installed distributions
///
/// This port abstracts the runtime's installed-package metadata registry
/// so the sizing and rendering core is independent of which ecosystem's
/// registry is queried. A source is scoped to one scan call; there is no
/// process-wide singleton.
pub trait PackageMetadataSource {
    /// Enumerates the installed distributions known to this registry
    ///
    /// # Returns
    /// Distributions in registry enumeration order. Implementations must
    /// make that order deterministic across invocations.
    ///
    /// # Errors
    /// Returns an error if the registry itself cannot be read. Problems
    /// with an individual distribution must not fail the enumeration.
    fn distributions(&self) -> Result<Vec<Distribution>>;
}
