//! Test helpers.

use std::{num::NonZeroU32, sync::Arc};

use jiff::Timestamp;
use market_app::{
    carts::{
        MockCartsService,
        data::SessionKey,
        records::{CartLineRecord, CartRecord, CartUuid},
    },
    context::AppContext,
    items::{
        MockItemsService,
        records::{ItemRecord, ItemUuid},
    },
    orders::{
        MockOrdersService,
        records::{OrderLineRecord, OrderLineUuid, OrderRecord, OrderUuid},
    },
};
use salvo::{affix_state::inject, prelude::*};

use crate::{
    session::{self, SESSION_COOKIE},
    state::{Presentation, State},
};

pub(crate) fn make_item(price: u64) -> ItemRecord {
    ItemRecord {
        uuid: ItemUuid::new(),
        title: "Desk Lamp".to_string(),
        description: "Brass, with a linen shade".to_string(),
        image: None,
        price,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_line(item: ItemRecord, quantity: u32) -> CartLineRecord {
    CartLineRecord {
        price: item.price,
        item,
        quantity: NonZeroU32::new(quantity).unwrap_or(NonZeroU32::MIN),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart(session_key: &SessionKey, lines: Vec<CartLineRecord>) -> CartRecord {
    CartRecord {
        uuid: CartUuid::new(),
        session_key: session_key.clone(),
        lines,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(cart: CartUuid, lines: Vec<CartLineRecord>) -> OrderRecord {
    OrderRecord {
        uuid: OrderUuid::new(),
        cart_uuid: cart,
        lines: lines
            .into_iter()
            .map(|line| OrderLineRecord {
                uuid: OrderLineUuid::new(),
                item: line.item,
                quantity: line.quantity,
                price: line.price,
            })
            .collect(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn strict_items_mock() -> MockItemsService {
    let mut items = MockItemsService::new();

    items.expect_list_items().never();
    items.expect_get_item().never();
    items.expect_create_item().never();

    items
}

pub(crate) fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_or_create_cart().never();
    carts.expect_update_cart().never();
    carts.expect_clear_cart().never();
    carts.expect_cart_total().never();

    carts
}

pub(crate) fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_place_order().never();
    orders.expect_list_orders().never();
    orders.expect_get_order().never();
    orders.expect_order_total().never();

    orders
}

pub(crate) fn test_state(
    items: MockItemsService,
    carts: MockCartsService,
    orders: MockOrdersService,
) -> Arc<State> {
    let app = AppContext {
        items: Arc::new(items),
        carts: Arc::new(carts),
        orders: Arc::new(orders),
    };

    State::from_app_context(app, Presentation::default())
}

/// Serve `route` behind the session middleware with the given service mocks.
pub(crate) fn app_service(
    items: MockItemsService,
    carts: MockCartsService,
    orders: MockOrdersService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(test_state(items, carts, orders)))
            .hoop(session::handler)
            .push(route),
    )
}

/// `Cookie` header value presenting `session_key`.
pub(crate) fn session_cookie(session_key: &SessionKey) -> String {
    format!("{SESSION_COOKIE}={session_key}")
}
