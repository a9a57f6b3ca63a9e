use serde::Deserialize;
use validator::Validate;

use crate::models::NewProduct;

#[derive(Deserialize, Validate, Debug)]
pub struct ProductCreate{
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    pub category: String
}

impl ProductCreate {
    // New products always start out active
    pub fn into_new_product(self) -> NewProduct {
        NewProduct{
            name: self.name,
            price: self.price,
            category: self.category,
            is_active: true
        }
    }
}
