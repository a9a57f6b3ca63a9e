use std::{error::Error, fmt::Debug};

use diesel::{prelude::SelectableHelper, ExpressionMethods, QueryDsl, RunQueryDsl};
use thiserror::Error;

use crate::{models::{NewProduct, Product}, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

#[derive(Error)]
pub enum ProductQueryError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query on products table")]
    QueryError(#[from] diesel::result::Error)
}

impl Debug for ProductQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Insert a product into db",
    skip_all
)]
pub async fn insert_product(
    mut conn: DbConnection,
    product: NewProduct
) -> Result<Product, ProductQueryError> {

    let res = spawn_blocking_with_tracing(move || {
        use crate::schema::products;

        diesel::insert_into(products::table)
            .values(product)
            .returning(Product::as_returning())
            .get_result::<Product>(&mut conn)
    })
    .await??;

    Ok(res)
}

#[tracing::instrument(
    "Getting products from db",
    skip_all
)]
pub async fn get_products(
    mut conn: DbConnection
) -> Result<Vec<Product>, ProductQueryError>{

    let res = spawn_blocking_with_tracing(move || {
        use crate::schema::products;

        products::table
            .order(products::id.asc())
            .select(Product::as_select())
            .load::<Product>(&mut conn)
    })
    .await??;

    Ok(res)
}
