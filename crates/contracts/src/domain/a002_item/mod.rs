use crate::domain::common::{FieldDescriptor, ResourceDescriptor};
use crate::shared::metadata::ValidationRules;

/// Menu items: a food item and its price
pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    collection_name: "items",
    element_name: "Item",
    fields: &[
        FieldDescriptor {
            name: "foodItem",
            label: "Food item",
            mutable: true,
            validation: ValidationRules::required("Food item cannot be blank"),
        },
        FieldDescriptor {
            name: "price",
            label: "Price",
            mutable: true,
            validation: ValidationRules::none(),
        },
    ],
};
