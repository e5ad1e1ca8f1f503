use core::str::FromStr;
use serde::{Deserialize, Serialize};

use northwind_core::DomainError;

/// Which contact table a model belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Employee,
    Customer,
    Supplier,
    Shipper,
}

impl ContactKind {
    pub const ALL: [ContactKind; 4] = [
        ContactKind::Employee,
        ContactKind::Customer,
        ContactKind::Supplier,
        ContactKind::Shipper,
    ];

    /// Lowercase wire label, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ContactKind::Employee => "employee",
            ContactKind::Customer => "customer",
            ContactKind::Supplier => "supplier",
            ContactKind::Shipper => "shipper",
        }
    }

    /// Type name used in the canonical string rendering.
    pub fn label(self) -> &'static str {
        match self {
            ContactKind::Employee => "Employee",
            ContactKind::Customer => "Customer",
            ContactKind::Supplier => "Supplier",
            ContactKind::Shipper => "Shipper",
        }
    }
}

impl core::fmt::Display for ContactKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ContactKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::validation(format!("unknown contact kind: {needle}")))
    }
}
