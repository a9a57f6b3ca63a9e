use diesel::prelude::{Insertable, Queryable, Selectable};
use serde::Deserialize;
use serde::Serialize;

use crate::schema::orders;
use crate::schema::products;

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product{
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub is_active: bool
}

#[derive(Insertable, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct{
    pub name: String,
    pub price: f64,
    pub category: String,
    pub is_active: bool
}

// Row as stored; `items` holds the order lines as a JSON array
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderRow{
    pub id: i32,
    pub table_id: String,
    pub status: String,
    pub total: f64,
    pub items: String
}

#[derive(Insertable, Debug)]
#[diesel(table_name = orders)]
pub struct NewOrderRow{
    pub table_id: String,
    pub status: String,
    pub total: f64,
    pub items: String
}
