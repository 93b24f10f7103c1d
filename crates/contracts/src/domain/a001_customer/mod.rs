use crate::domain::common::{FieldDescriptor, ResourceDescriptor};
use crate::shared::metadata::ValidationRules;

/// Customers: a name, a contact number and a country
pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    collection_name: "customers",
    element_name: "Customer",
    fields: &[
        FieldDescriptor {
            name: "firstName",
            label: "First name",
            mutable: true,
            validation: ValidationRules::required("First name cannot be blank"),
        },
        FieldDescriptor {
            name: "number",
            label: "Number",
            mutable: true,
            validation: ValidationRules::none(),
        },
        FieldDescriptor {
            name: "country",
            label: "Country",
            mutable: true,
            validation: ValidationRules::none(),
        },
    ],
};
