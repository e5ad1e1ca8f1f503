//! Kind-tagged wrapper for mixing contact models in one collection.

use serde::{Deserialize, Serialize};

use northwind_core::{Identifiable, ModelId};

use crate::contact::{CONTACT_FIELD_COUNT, ContactModel};
use crate::customer::Customer;
use crate::employee::Employee;
use crate::kind::ContactKind;
use crate::shipper::Shipper;
use crate::supplier::Supplier;

/// Any one of the four contact models.
///
/// Equality keeps the variant, so models of different kinds never compare
/// equal even when their identity and attributes match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Contact {
    Employee(Employee),
    Customer(Customer),
    Supplier(Supplier),
    Shipper(Shipper),
}

impl Contact {
    pub fn kind(&self) -> ContactKind {
        match self {
            Contact::Employee(_) => ContactKind::Employee,
            Contact::Customer(_) => ContactKind::Customer,
            Contact::Supplier(_) => ContactKind::Supplier,
            Contact::Shipper(_) => ContactKind::Shipper,
        }
    }

    pub fn fields(&self) -> [(&'static str, &str); CONTACT_FIELD_COUNT] {
        match self {
            Contact::Employee(m) => m.fields(),
            Contact::Customer(m) => m.fields(),
            Contact::Supplier(m) => m.fields(),
            Contact::Shipper(m) => m.fields(),
        }
    }
}

impl Identifiable for Contact {
    fn id(&self) -> ModelId {
        match self {
            Contact::Employee(m) => m.id(),
            Contact::Customer(m) => m.id(),
            Contact::Supplier(m) => m.id(),
            Contact::Shipper(m) => m.id(),
        }
    }
}

impl core::fmt::Display for Contact {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Contact::Employee(m) => core::fmt::Display::fmt(m, f),
            Contact::Customer(m) => core::fmt::Display::fmt(m, f),
            Contact::Supplier(m) => core::fmt::Display::fmt(m, f),
            Contact::Shipper(m) => core::fmt::Display::fmt(m, f),
        }
    }
}

impl From<Employee> for Contact {
    fn from(value: Employee) -> Self {
        Contact::Employee(value)
    }
}

impl From<Customer> for Contact {
    fn from(value: Customer) -> Self {
        Contact::Customer(value)
    }
}

impl From<Supplier> for Contact {
    fn from(value: Supplier) -> Self {
        Contact::Supplier(value)
    }
}

impl From<Shipper> for Contact {
    fn from(value: Shipper) -> Self {
        Contact::Shipper(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::EmployeeBuilder;
    use crate::shipper::ShipperBuilder;
    use crate::supplier::SupplierBuilder;
    use northwind_core::Builder;
    use std::collections::HashSet;

    #[test]
    fn same_values_of_different_kinds_are_never_equal() {
        let employee = EmployeeBuilder::new(5).set_company("Acme").build();
        let supplier = SupplierBuilder::new(5).set_company("Acme").build();

        assert_eq!(employee.fields(), supplier.fields());
        assert_ne!(Contact::from(employee), Contact::from(supplier));
    }

    #[test]
    fn deduplicates_by_kind_identity_and_attributes() {
        let a = SupplierBuilder::new(1).set_city("Lima").build();
        let b = SupplierBuilder::new(1).set_city("Lima").build();
        let c = ShipperBuilder::new(1).set_city("Lima").build();

        let set: HashSet<Contact> = [Contact::from(a), Contact::from(b), Contact::from(c)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn delegates_identity_kind_and_rendering() {
        let shipper = ShipperBuilder::new(2).set_company("United Package").build();
        let rendered = shipper.to_string();
        let contact = Contact::from(shipper);

        assert_eq!(contact.kind(), ContactKind::Shipper);
        assert_eq!(contact.id(), ModelId::new(2));
        assert_eq!(contact.to_string(), rendered);
        assert!(rendered.starts_with("Shipper[company=United Package, "));
        assert!(rendered.ends_with("] IdentifiableModel[id=2]"));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let contact = Contact::from(SupplierBuilder::new(7).set_company("Acme").build());
        let json = serde_json::to_value(&contact).unwrap();

        assert_eq!(json["kind"], "supplier");
        assert_eq!(json["id"], 7);
        assert_eq!(json["company"], "Acme");

        let back: Contact = serde_json::from_value(json).unwrap();
        assert_eq!(back, contact);
    }
}
