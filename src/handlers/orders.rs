use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::order::{OrderLineRequest, OrderView};
use crate::errors::AppError;
use crate::{CreateOrderSvc, FindOrderSvc};

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderProductRequest {
    pub id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_id: Uuid,
    pub products: Vec<OrderProductRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLineResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub price: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub ordered_at: String,
    pub lines: Vec<OrderLineResponse>,
}

impl From<OrderView> for OrderResponse {
    fn from(order: OrderView) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            ordered_at: order.ordered_at.to_rfc3339(),
            lines: order
                .lines
                .into_iter()
                .map(|l| OrderLineResponse {
                    id: l.id,
                    product_id: l.product_id,
                    quantity: l.quantity,
                    price: l.price.to_string(),
                })
                .collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Places a new order for an existing customer. The order and its lines are
/// written in one transaction; the stock decrement is a second, separate
/// write issued after the order has committed.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderResponse),
        (status = 404, description = "Customer or product not found"),
        (status = 422, description = "Insufficient stock for a requested product"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    svc: web::Data<CreateOrderSvc>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let lines: Vec<OrderLineRequest> = body
        .products
        .iter()
        .map(|p| OrderLineRequest {
            product_id: p.id,
            quantity: p.quantity,
        })
        .collect();

    let order = web::block(move || svc.execute(body.customer_id, lines))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// GET /orders/{id}
///
/// Returns the order together with its lines. The id is validated before
/// any service call is made.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = String, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 400, description = "Missing or malformed order id"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    svc: web::Data<FindOrderSvc>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw = path.into_inner();
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::Validation("order id is required".to_string()));
    }
    let id = Uuid::parse_str(raw)
        .map_err(|_| AppError::Validation(format!("'{}' is not a valid order id", raw)))?;

    let order = web::block(move || svc.execute(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}
