use std::{error::Error, fmt::Debug};

use diesel::{prelude::SelectableHelper, ExpressionMethods, QueryDsl, RunQueryDsl};
use thiserror::Error;

use crate::{domain::{order::OrderDecodeError, Order, OrderStatus}, models::{NewOrderRow, OrderRow}, schema::orders, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

// Error associated with reading or writing the orders table
#[derive(Error)]
pub enum OrderQueryError{
    #[error("Tokio threadpool error occured")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query")]
    RunQueryError(#[from] diesel::result::Error),
    #[error("Failed to decode stored order")]
    DecodeError(#[from] OrderDecodeError),
    #[error("order id: {0} doesn't exist")]
    NoOrderIdError(i32)
}

impl Debug for OrderQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Creating order in order table",
    skip_all
)]
pub async fn insert_order(
    mut conn: DbConnection,
    order: NewOrderRow
) -> Result<Order, OrderQueryError> {

    let row = spawn_blocking_with_tracing(move || {
        diesel::insert_into(orders::table)
            .values(order)
            .returning(OrderRow::as_returning())
            .get_result::<OrderRow>(&mut conn)
    })
    .await??;

    Ok(Order::try_from(row)?)
}

#[tracing::instrument(
    "Getting orders from db",
    skip_all
)]
pub async fn get_orders(
    mut conn: DbConnection
) -> Result<Vec<Order>, OrderQueryError> {

    let rows = spawn_blocking_with_tracing(move || {
        orders::table
            .order(orders::id.asc())
            .select(OrderRow::as_select())
            .load::<OrderRow>(&mut conn)
    })
    .await??;

    let orders = rows.into_iter()
        .map(Order::try_from)
        .collect::<Result<Vec<Order>, _>>()?;

    Ok(orders)
}

// Function to perform update order status operation
#[tracing::instrument(
    "Updating order status",
    skip(conn)
)]
pub async fn update_order_status(
    mut conn: DbConnection,
    order_id: i32,
    status: OrderStatus
) -> Result<Order, OrderQueryError> {

    let row = spawn_blocking_with_tracing(move || {
        diesel::update(orders::table)
            .filter(orders::id.eq(order_id))
            .set(orders::status.eq(status.as_str()))
            .returning(OrderRow::as_returning())
            .get_results::<OrderRow>(&mut conn)
    })
    .await??
    .pop()
    .ok_or(OrderQueryError::NoOrderIdError(order_id))?;

    Ok(Order::try_from(row)?)
}
