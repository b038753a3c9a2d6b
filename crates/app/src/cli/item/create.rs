use std::path::PathBuf;

use clap::Args;
use market_app::{
    context::AppContext,
    items::{
        data::{ImageUpload, NewItem},
        records::ItemUuid,
    },
    money::{format_price, parse_price},
};

use super::StoreArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateItemArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Item title
    #[arg(long)]
    title: String,

    /// Item description
    #[arg(long, default_value = "")]
    description: String,

    /// Unit price as a decimal, e.g. 12.50
    #[arg(long)]
    price: String,

    /// Image file to attach
    #[arg(long)]
    image: Option<PathBuf>,
}

pub(crate) async fn run(args: CreateItemArgs) -> Result<(), String> {
    let price = parse_price(&args.price).map_err(|error| format!("invalid price: {error}"))?;

    let image = args
        .image
        .map(|path| {
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| format!("invalid image path: {}", path.display()))?
                .to_string();

            Ok::<_, String>(ImageUpload { file_name, path })
        })
        .transpose()?;

    let context = AppContext::from_database_url(&args.store.database_url, &args.store.images_dir)
        .await
        .map_err(|error| format!("failed to initialise app: {error}"))?;

    let item = context
        .items
        .create_item(
            NewItem {
                uuid: ItemUuid::new(),
                title: args.title,
                description: args.description,
                price,
            },
            image,
        )
        .await
        .map_err(|error| format!("failed to create item: {error}"))?;

    println!("item_uuid: {}", item.uuid);
    println!("title: {}", item.title);
    println!("price: {}", format_price(item.price));

    if let Some(image) = item.image {
        println!("image: {image}");
    }

    Ok(())
}
