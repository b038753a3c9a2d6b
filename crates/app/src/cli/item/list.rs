use clap::Args;
use market_app::{
    context::AppContext,
    items::data::{ItemQuery, ItemSort},
    money::format_price,
    paging::{DEFAULT_PAGE_SIZE, PageRequest},
};

use super::StoreArgs;

#[derive(Debug, Args)]
pub(crate) struct ListItemsArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Case-insensitive text matched against title and description
    #[arg(long)]
    search: Option<String>,

    /// One of no, alpha, price, price_desc
    #[arg(long, default_value = "no")]
    sort: ItemSort,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,

    #[arg(long, default_value_t = 1)]
    page_number: u32,
}

pub(crate) async fn run(args: ListItemsArgs) -> Result<(), String> {
    let context = AppContext::from_database_url(&args.store.database_url, &args.store.images_dir)
        .await
        .map_err(|error| format!("failed to initialise app: {error}"))?;

    let page = context
        .items
        .list_items(ItemQuery {
            search: args.search,
            sort: args.sort,
            page: PageRequest::new(args.page_number, args.page_size),
        })
        .await
        .map_err(|error| format!("failed to list items: {error}"))?;

    for item in &page.items {
        println!("{}\t{}\t{}", item.uuid, format_price(item.price), item.title);
    }

    println!(
        "page {} of {} items (size {})",
        page.request.number(),
        page.total,
        page.request.size()
    );

    Ok(())
}
