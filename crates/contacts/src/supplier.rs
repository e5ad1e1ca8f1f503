use crate::contact::contact_model;
use crate::kind::ContactKind;

contact_model!(
    /// A supplier row of the Northwind catalogue.
    Supplier,
    SupplierBuilder,
    ContactKind::Supplier
);
