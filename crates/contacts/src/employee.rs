use crate::contact::contact_model;
use crate::kind::ContactKind;

contact_model!(
    /// A member of staff who takes and ships orders.
    Employee,
    EmployeeBuilder,
    ContactKind::Employee
);
