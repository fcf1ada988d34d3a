//! Feature switches for capabilities that have no implementation yet.
//!
//! DESIGN
//! ======
//! Export/import, settings, report generation and the unbuilt admin/broker
//! sections render as controls whose enabled state comes from this map.
//! Turning a feature on is a configuration change via [`Capabilities::with`].

#[cfg(test)]
#[path = "capabilities_test.rs"]
mod capabilities_test;

use std::collections::HashSet;

/// Individually switchable capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    // User management
    ExportUsers,
    ImportUsers,
    AdvancedUserFilters,
    DeleteUser,
    UserPermissions,
    // Role management
    CreateRole,
    EditRole,
    DuplicateRole,
    RoleActions,
    ExportRoles,
    ImportRoles,
    RoleSettings,
    // Admin sections
    SystemConfig,
    Integrations,
    Workflows,
    Notifications,
    DataAnalytics,
    Security,
    Templates,
    // Broker sections
    ActiveCases,
    ArchivedCases,
    Payments,
    Reports,
    Downloads,
    PlanParameters,
    Plans,
    News,
    Tutorials,
    Documents,
    BrokerAdministration,
    // Dashboard actions
    ReportGeneration,
}

/// Set of enabled capabilities. Everything is off by default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    enabled: HashSet<Capability>,
}

impl Capabilities {
    /// Capabilities with nothing enabled.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Return a copy with `capability` enabled.
    #[must_use]
    pub fn with(mut self, capability: Capability) -> Self {
        self.enabled.insert(capability);
        self
    }

    /// Return a copy with `capability` disabled.
    #[must_use]
    pub fn without(mut self, capability: Capability) -> Self {
        self.enabled.remove(&capability);
        self
    }

    pub fn is_enabled(&self, capability: Capability) -> bool {
        self.enabled.contains(&capability)
    }

    /// Convenience for `disabled=` attributes.
    pub fn is_disabled(&self, capability: Capability) -> bool {
        !self.is_enabled(capability)
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self { enabled: iter.into_iter().collect() }
    }
}
