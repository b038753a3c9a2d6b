//! Place Order Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use tracing::error;

use crate::{
    carts::{self, session_cart},
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

/// Place Order Handler
///
/// Turns the session's cart into an order and empties the cart.
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart is empty"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = session_cart(state, depot).await?;

    let order = state
        .app
        .orders
        .place_order(cart.uuid)
        .await
        .map_err(into_status_error)?;

    if let Err(clear_error) = state.app.carts.clear_cart(cart.uuid).await {
        error!(order = %order.uuid, cart = %cart.uuid, "order placed but cart not cleared");

        return Err(carts::errors::into_status_error(clear_error));
    }

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(OrderResponse::new(
        &order,
        order.total(),
        &state.presentation.images_dir,
    )))
}

#[cfg(test)]
mod tests {
    use market_app::{
        carts::{CartsServiceError, MockCartsService, data::SessionKey, records::CartRecord},
        orders::{MockOrdersService, OrdersServiceError},
    };
    use salvo::{
        http::header::COOKIE,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::{
        app_service, make_cart, make_item, make_line, make_order, session_cookie,
        strict_items_mock,
    };

    use super::*;

    fn make_service(carts: MockCartsService, orders: MockOrdersService) -> Service {
        app_service(
            strict_items_mock(),
            carts,
            orders,
            Router::with_path("buy").post(handler),
        )
    }

    fn carts_with(
        session: &SessionKey,
        cleared: Result<u64, CartsServiceError>,
        clear_times: usize,
    ) -> (MockCartsService, CartRecord) {
        let cart = make_cart(
            session,
            vec![make_line(make_item(100), 1), make_line(make_item(250), 2)],
        );

        let cart_uuid = cart.uuid;
        let returned = cart.clone();

        let mut carts = MockCartsService::new();

        carts
            .expect_get_or_create_cart()
            .once()
            .return_once(move |_| Ok(returned));

        carts
            .expect_clear_cart()
            .times(clear_times)
            .withf(move |uuid| *uuid == cart_uuid)
            .return_once(move |_| cleared);

        carts.expect_update_cart().never();
        carts.expect_cart_total().never();

        (carts, cart)
    }

    #[tokio::test]
    async fn test_buy_places_order_and_clears_cart() -> TestResult {
        let session = SessionKey::generate();
        let (carts, cart) = carts_with(&session, Ok(2), 1);
        let cart_uuid = cart.uuid;
        let order = make_order(cart.uuid, cart.lines);
        let order_uuid = order.uuid;

        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .withf(move |cart| *cart == cart_uuid)
            .return_once(move |_| Ok(order));

        orders.expect_list_orders().never();
        orders.expect_get_order().never();
        orders.expect_order_total().never();

        let mut res = TestClient::post("http://example.com/buy")
            .add_header(COOKIE, session_cookie(&session), true)
            .send(&make_service(carts, orders))
            .await;

        let body: OrderResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/orders/{order_uuid}").as_str()));
        assert_eq!(body.uuid, order_uuid.into_uuid());
        assert_eq!(body.items.len(), 2);
        assert_eq!(body.total, "6.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_buy_empty_cart_returns_400() -> TestResult {
        let session = SessionKey::generate();
        let (carts, _) = carts_with(&session, Ok(0), 0);

        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::EmptyCart));

        orders.expect_list_orders().never();
        orders.expect_get_order().never();
        orders.expect_order_total().never();

        let res = TestClient::post("http://example.com/buy")
            .add_header(COOKIE, session_cookie(&session), true)
            .send(&make_service(carts, orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_buy_clear_failure_returns_500() -> TestResult {
        let session = SessionKey::generate();
        let (carts, cart) = carts_with(
            &session,
            Err(CartsServiceError::Sql(sqlx::Error::PoolTimedOut)),
            1,
        );
        let order = make_order(cart.uuid, cart.lines);

        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .return_once(move |_| Ok(order));

        orders.expect_list_orders().never();
        orders.expect_get_order().never();
        orders.expect_order_total().never();

        let res = TestClient::post("http://example.com/buy")
            .add_header(COOKIE, session_cookie(&session), true)
            .send(&make_service(carts, orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
