//! Northwind contact models (employees, customers, suppliers and shippers).
//!
//! All four tables share one attribute set. Each still gets its own immutable
//! model type and builder so an employee can never be passed where a supplier
//! is expected.

pub mod any;
pub mod contact;
pub mod customer;
pub mod employee;
pub mod kind;
pub mod shipper;
pub mod supplier;

pub use any::Contact;
pub use contact::{CONTACT_FIELD_COUNT, CONTACT_FIELDS, ContactModel};
pub use customer::{Customer, CustomerBuilder};
pub use employee::{Employee, EmployeeBuilder};
pub use kind::ContactKind;
pub use shipper::{Shipper, ShipperBuilder};
pub use supplier::{Supplier, SupplierBuilder};

pub use northwind_core::{Builder, Identifiable, ModelId};
