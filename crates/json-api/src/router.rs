//! App Router

use salvo::Router;

use crate::{admin, carts, items, orders, session};

pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::new()
                .hoop(session::handler)
                .push(
                    Router::with_path("items")
                        .get(items::index::handler)
                        .push(
                            Router::with_path("{item}")
                                .get(items::get::handler)
                                .post(items::update::handler),
                        ),
                )
                .push(
                    Router::with_path("cart/items")
                        .get(carts::get::handler)
                        .post(carts::update::handler),
                )
                .push(Router::with_path("buy").post(orders::create::handler))
                .push(
                    Router::with_path("orders")
                        .get(orders::index::handler)
                        .push(Router::with_path("{order}").get(orders::get::handler)),
                ),
        )
        .push(Router::with_path("admin/items").post(admin::items::handler))
}
