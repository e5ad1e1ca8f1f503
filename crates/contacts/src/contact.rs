//! Shared shape of the contact tables.
//!
//! Employees, customers, suppliers and shippers all carry the same seventeen
//! free-text attributes. `contact_model!` declares one immutable model and its
//! builder from that attribute list, so each table only names its types.

use northwind_core::{Identifiable, IdentifiableModel};

use crate::kind::ContactKind;

/// Number of free-text attributes on every contact model.
pub const CONTACT_FIELD_COUNT: usize = 17;

/// Attribute names in declared order.
///
/// The same names key `fields()`, `set_field`, the rendering and the serde
/// representation.
pub const CONTACT_FIELDS: [&str; CONTACT_FIELD_COUNT] = [
    "company",
    "lastName",
    "firstName",
    "email",
    "jobTitle",
    "businessPhone",
    "homePhone",
    "mobilePhone",
    "faxNumber",
    "address",
    "city",
    "stateProvince",
    "zipPostalCode",
    "countryRegion",
    "webPage",
    "notes",
    "attachments",
];

/// Read-only view shared by the four contact models.
pub trait ContactModel: Identifiable {
    /// The table this model type belongs to.
    const KIND: ContactKind;

    /// `(name, value)` pairs for every attribute, in declared order.
    fn fields(&self) -> [(&'static str, &str); CONTACT_FIELD_COUNT];

    /// Looks up one attribute by its name.
    fn field(&self, name: &str) -> Option<&str> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }
}

/// Canonical rendering: `Kind[name=value, ...] IdentifiableModel[id=N]`.
pub(crate) fn fmt_contact<M: ContactModel>(
    model: &M,
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    write!(f, "{}[", M::KIND)?;
    for (i, (name, value)) in model.fields().into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{name}={value}")?;
    }
    write!(f, "] {}", IdentifiableModel::new(model.id()))
}

macro_rules! contact_model {
    ($(#[$meta:meta])* $entity:ident, $builder:ident, $kind:expr) => {
        $crate::contact::contact_model!(
            @define $(#[$meta])* $entity, $builder, $kind;
            company as "company": set_company,
            last_name as "lastName": set_last_name,
            first_name as "firstName": set_first_name,
            email as "email": set_email,
            job_title as "jobTitle": set_job_title,
            business_phone as "businessPhone": set_business_phone,
            home_phone as "homePhone": set_home_phone,
            mobile_phone as "mobilePhone": set_mobile_phone,
            fax_number as "faxNumber": set_fax_number,
            address as "address": set_address,
            city as "city": set_city,
            state_province as "stateProvince": set_state_province,
            zip_postal_code as "zipPostalCode": set_zip_postal_code,
            country_region as "countryRegion": set_country_region,
            web_page as "webPage": set_web_page,
            notes as "notes": set_notes,
            attachments as "attachments": set_attachments,
        );
    };

    (
        @define $(#[$meta:meta])* $entity:ident, $builder:ident, $kind:expr;
        $($field:ident as $name:literal : $setter:ident),+ $(,)?
    ) => {
        $(#[$meta])*
        ///
        /// Immutable once built; equality and hashing cover the identity and
        /// every attribute.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $entity {
            #[serde(flatten)]
            base: ::northwind_core::IdentifiableModel,
            $(
                #[serde(rename = $name, default)]
                $field: String,
            )+
        }

        impl $entity {
            /// Start a builder for a model with the given identity.
            pub fn builder(id: impl Into<::northwind_core::ModelId>) -> $builder {
                $builder::new(id)
            }

            /// Builder seeded with this model's identity and values.
            pub fn to_builder(&self) -> $builder {
                $builder::from(self)
            }

            $(
                pub fn $field(&self) -> &str {
                    &self.$field
                }
            )+
        }

        impl ::northwind_core::Identifiable for $entity {
            fn id(&self) -> ::northwind_core::ModelId {
                ::northwind_core::Identifiable::id(&self.base)
            }
        }

        impl $crate::contact::ContactModel for $entity {
            const KIND: $crate::kind::ContactKind = $kind;

            fn fields(&self) -> [(&'static str, &str); $crate::contact::CONTACT_FIELD_COUNT] {
                [$(($name, self.$field.as_str())),+]
            }
        }

        impl ::core::fmt::Display for $entity {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::contact::fmt_contact(self, f)
            }
        }

        #[doc = concat!("Builder for [`", stringify!($entity), "`].")]
        ///
        /// Every attribute starts as an empty string. Setters overwrite one
        /// attribute and return the builder for chaining; `build` leaves the
        /// builder untouched so it can be reused.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $builder {
            id: ::northwind_core::ModelId,
            $($field: String,)+
        }

        impl $builder {
            pub fn new(id: impl Into<::northwind_core::ModelId>) -> Self {
                Self {
                    id: id.into(),
                    $($field: String::new(),)+
                }
            }

            $(
                pub fn $field(&self) -> &str {
                    &self.$field
                }

                #[doc = concat!("Overwrites `", stringify!($field), "`.")]
                pub fn $setter(&mut self, value: impl Into<String>) -> &mut Self {
                    self.$field = value.into();
                    self
                }
            )+

            /// Sets an attribute by its name, as listed in `CONTACT_FIELDS`.
            ///
            /// Used when mapping rows whose columns are only known at runtime.
            pub fn set_field(
                &mut self,
                name: &str,
                value: impl Into<String>,
            ) -> ::northwind_core::DomainResult<&mut Self> {
                let value = value.into();
                $(
                    if name == $name {
                        self.$field = value;
                        return Ok(self);
                    }
                )+
                Err(::northwind_core::DomainError::validation(format!(
                    "unknown {} attribute: {name}",
                    stringify!($entity)
                )))
            }
        }

        impl ::northwind_core::Builder for $builder {
            type Output = $entity;

            fn id(&self) -> ::northwind_core::ModelId {
                self.id
            }

            fn build(&self) -> $entity {
                let kind = <$entity as $crate::contact::ContactModel>::KIND;
                ::tracing::trace!(%kind, id = %self.id, "building contact model");
                $entity {
                    base: ::northwind_core::IdentifiableModel::new(self.id),
                    $($field: self.$field.clone(),)+
                }
            }
        }

        impl From<&$entity> for $builder {
            fn from(model: &$entity) -> Self {
                Self {
                    id: ::northwind_core::Identifiable::id(&model.base),
                    $($field: model.$field.clone(),)+
                }
            }
        }
    };
}

pub(crate) use contact_model;
