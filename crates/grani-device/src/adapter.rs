//! The adapter and validator contracts every ecosystem implements.

use crate::model::DeviceModel;
use crate::validation::ValidationResult;

/// Converts a canonical [`DeviceModel`] into one ecosystem's native
/// backend representation.
///
/// Implementations are pure: adapting the same model twice yields
/// equivalent handles, and no shared mutable state is touched. The
/// ecosystem in play is always chosen explicitly by the caller, never
/// read from ambient configuration.
pub trait EcosystemAdapter {
    /// The ecosystem's native backend/model type.
    type Handle;
    /// Adapter-specific failure type.
    type Error;

    /// Name of the ecosystem this adapter targets.
    fn ecosystem(&self) -> &'static str;

    /// Render the model into the native representation.
    ///
    /// Must preserve qubit count, coupling constraints (or their absence,
    /// for all-to-all devices), the basis gate set, and a normalized
    /// reference to the resolved two-qubit gate in the ecosystem's own
    /// gate-identifier type.
    fn adapt(&self, model: &DeviceModel) -> Result<Self::Handle, Self::Error>;
}

/// Checks a compiled circuit, in one ecosystem's native circuit type,
/// against the adapted device.
pub trait CircuitValidator {
    /// The ecosystem's native circuit type.
    type Circuit;
    /// The adapted backend handle validated against.
    type Handle;

    /// Verify gate-set and connectivity compliance.
    fn validate(&self, circuit: &Self::Circuit, handle: &Self::Handle) -> ValidationResult;
}
