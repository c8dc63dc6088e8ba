use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::ApiError,
    order::{self, CupcakeType, Order},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct CupcakeTypeInfo {
    pub index: usize,
    pub id: CupcakeType,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub cost: f64,
    pub has_valid_address: bool,
    pub order: Order,
}

#[derive(Debug, Deserialize)]
pub struct CostQuery {
    pub quantity: u32,
    #[serde(rename = "type", default)]
    pub type_index: usize,
    #[serde(default)]
    pub extra_frosting: bool,
    #[serde(default)]
    pub add_sprinkle: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CostResponse {
    pub cost: f64,
}

pub async fn list_types() -> Json<Vec<CupcakeTypeInfo>> {
    Json(
        CupcakeType::ALL
            .iter()
            .map(|cupcake| CupcakeTypeInfo {
                index: cupcake.index(),
                id: *cupcake,
                name: cupcake.name().to_string(),
            })
            .collect(),
    )
}

/// Price a full order and check its delivery address
pub async fn quote(Json(order): Json<Order>) -> Json<QuoteResponse> {
    let order = order.normalized();
    tracing::debug!(
        "Quoting {} x {} (special requests: {}, frosting: {}, sprinkles: {})",
        order.quantity,
        order.cupcake_type.name(),
        order.special_request_enabled(),
        order.extra_frosting(),
        order.add_sprinkle()
    );

    Json(QuoteResponse {
        cost: order.cost(),
        has_valid_address: order.has_valid_address(),
        order,
    })
}

/// Price from raw inputs, with the flavour given by index
pub async fn cost(Query(query): Query<CostQuery>) -> Result<Json<CostResponse>, ApiError> {
    CupcakeType::from_index(query.type_index)?;

    Ok(Json(CostResponse {
        cost: order::cost(
            query.quantity,
            query.type_index,
            query.extra_frosting,
            query.add_sprinkle,
        ),
    }))
}
