use crate::contact::contact_model;
use crate::kind::ContactKind;

contact_model!(
    /// A customer row of the Northwind catalogue.
    Customer,
    CustomerBuilder,
    ContactKind::Customer
);
