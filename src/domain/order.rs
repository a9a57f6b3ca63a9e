use std::{error::Error, fmt::Debug};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::{models::{NewOrderRow, OrderRow}, utils::error_fmt_chain};

// Orders are not priced from their items yet; every new order carries this total
pub const PLACEHOLDER_ORDER_TOTAL: f64 = 100.0;

#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq)]
pub struct OrderItem{
    pub product_id: i32,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
    #[serde(default)]
    pub notes: Option<String>
}

#[derive(Deserialize, Validate, Debug)]
pub struct OrderCreate{
    #[validate(length(min = 1, message = "table_id must not be empty"))]
    pub table_id: String,
    #[validate(nested)]
    pub items: Vec<OrderItem>
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus{
    Pending,
    Cooking,
    Ready,
    Delivered
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Cooking => "COOKING",
            OrderStatus::Ready => "READY",
            OrderStatus::Delivered => "DELIVERED"
        }
    }

    pub fn parse(status: &str) -> Result<OrderStatus, String> {
        match status {
            "PENDING" => Ok(OrderStatus::Pending),
            "COOKING" => Ok(OrderStatus::Cooking),
            "READY" => Ok(OrderStatus::Ready),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            other => Err(format!("{} is not a valid order status", other))
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Order{
    pub id: i32,
    pub table_id: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus
}

impl OrderCreate {
    // Items are copied verbatim into the JSON blob, without checking that the products exist
    pub fn into_new_order_row(self) -> Result<NewOrderRow, serde_json::Error> {
        Ok(NewOrderRow{
            table_id: self.table_id,
            status: OrderStatus::Pending.as_str().to_string(),
            total: PLACEHOLDER_ORDER_TOTAL,
            items: serde_json::to_string(&self.items)?
        })
    }
}

#[derive(Error)]
pub enum OrderDecodeError{
    #[error("Stored order items are not valid JSON")]
    Items(#[from] serde_json::Error),
    #[error("Stored order status is invalid: {0}")]
    Status(String)
}

impl Debug for OrderDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl TryFrom<OrderRow> for Order {
    type Error = OrderDecodeError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Order{
            id: row.id,
            table_id: row.table_id,
            items: serde_json::from_str(&row.items)?,
            total: row.total,
            status: OrderStatus::parse(&row.status).map_err(OrderDecodeError::Status)?
        })
    }
}
