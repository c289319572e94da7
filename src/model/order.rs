use serde::{Deserialize, Serialize};

use crate::model::product::Product;

/// Denormalized order record combining the resolved product with the
/// customer's trimmed form fields. Built per submission, emailed to the
/// operator, then dropped; orders are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub product_id: String,
    pub product_name: String,
    pub product_price: f64,
    pub product_unit: String,

    pub name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub locality: String,
    pub city: String,
    pub pincode: String,
    pub delivery_method: String,
    /// Kept verbatim as submitted, never parsed as a number.
    pub quantity: String,
    pub notes: String,
}

impl OrderSummary {
    pub fn from_product(product: &Product, form: &crate::dto::order_dto::OrderForm) -> Self {
        OrderSummary {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            product_price: product.price,
            product_unit: product.unit.clone(),
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            address_line1: form.address_line1.clone(),
            address_line2: form.address_line2.clone(),
            locality: form.locality.clone(),
            city: form.city.clone(),
            pincode: form.pincode.clone(),
            delivery_method: form.delivery_method.clone(),
            quantity: form.quantity.clone(),
            notes: form.notes.clone(),
        }
    }
}
