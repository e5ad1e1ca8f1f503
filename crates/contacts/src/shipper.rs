use crate::contact::contact_model;
use crate::kind::ContactKind;

contact_model!(
    /// A shipping company used to deliver orders.
    Shipper,
    ShipperBuilder,
    ContactKind::Shipper
);

#[cfg(test)]
mod tests {
    use super::*;
    use northwind_core::{Builder, Identifiable};

    #[test]
    fn builder_accessors_reflect_pending_values() {
        let mut builder = ShipperBuilder::new(3);
        assert_eq!(builder.company(), "");

        builder.set_company("Federal Shipping").set_business_phone("(503) 555-9931");

        assert_eq!(builder.company(), "Federal Shipping");
        assert_eq!(builder.business_phone(), "(503) 555-9931");

        let shipper = builder.build();
        assert_eq!(shipper.business_phone(), "(503) 555-9931");
        assert_eq!(shipper.id().get(), 3);
    }

    #[test]
    fn zero_and_negative_identities_are_accepted() {
        assert_eq!(ShipperBuilder::new(0).build().id().get(), 0);
        assert_eq!(ShipperBuilder::new(-1).build().id().get(), -1);
    }
}
