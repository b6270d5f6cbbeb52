//! Command handlers

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, bail};
use catalog_client::{
    CatalogApi, CatalogViewer, CatalogsPage, ClientError, Dashboard, ImageUpload, Landing,
    ProductsPage,
};
use shared::models::ProductDraft;
use shared::{ListConfig, ValidationError};

use crate::cli::{CatalogCommand, Cli, Command, ListArgs, ProductCommand};
use crate::output;

/// How long `login` waits for the presence event before the process exits
const PRESENCE_WAIT: Duration = Duration::from_secs(3);

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.client_config();
    tracing::debug!(
        api_url = %config.base_url,
        data_dir = %config.data_dir.display(),
        "Configuration loaded"
    );
    let mut api = CatalogApi::connect(config).context("Failed to initialize client")?;

    match cli.command {
        Command::Login { email, password } => {
            let outcome = api.login(&email, &password).await?;
            println!("Logged in as {}", outcome.session.user.display_name());
            if let Some(presence) = outcome.presence
                && tokio::time::timeout(PRESENCE_WAIT, presence).await.is_err()
            {
                tracing::debug!("Presence event still pending at exit");
            }
        }
        Command::Logout => {
            api.logout()?;
            println!("Logged out");
        }
        Command::Whoami => whoami(&api),
        Command::Stats => stats(&mut api).await?,
        Command::Products(args) => list_products(&mut api, &args).await?,
        Command::Product(cmd) => product(&mut api, cmd).await?,
        Command::Catalog(cmd) => catalog(&mut api, cmd).await?,
    }
    Ok(())
}

fn whoami(api: &CatalogApi) {
    match (api.session().landing(), api.session().current()) {
        (Landing::Dashboard, Some(session)) => {
            println!("{} <{}>", session.user.display_name(), session.user.email);
        }
        _ => println!("Not logged in"),
    }
}

async fn stats(api: &mut CatalogApi) -> anyhow::Result<()> {
    api.session().require()?;
    let mut dashboard = Dashboard::new();
    let state = dashboard.load(api).await;
    if let Some(message) = state.error() {
        bail!("{}", message);
    }
    if let Some(stats) = state.data() {
        print!("{}", output::stats_block(stats));
    }
    Ok(())
}

async fn list_products(api: &mut CatalogApi, args: &ListArgs) -> anyhow::Result<()> {
    let mut page = ProductsPage::new(ListConfig::full(), api.config().app_origin.clone());
    page.load(api).await?;
    page.view_mut().set_criteria(args.criteria());

    let rows = page.view().visible();
    print!("{}", output::product_table(&rows, None));
    if !rows.is_empty() {
        println!("{} of {} products", rows.len(), page.view().products().len());
    }
    Ok(())
}

async fn read_image(path: Option<&Path>) -> anyhow::Result<Option<ImageUpload>> {
    match path {
        Some(path) => {
            let image = ImageUpload::from_path(path)
                .await
                .with_context(|| format!("Cannot read image {}", path.display()))?;
            Ok(Some(image))
        }
        None => Ok(None),
    }
}

async fn product(api: &mut CatalogApi, cmd: ProductCommand) -> anyhow::Result<()> {
    match cmd {
        ProductCommand::Show { id } => {
            let product = api.get_product(&id).await?;
            print!("{}", output::product_detail(&product));
        }
        ProductCommand::Add {
            name,
            price,
            stock,
            barcode,
            image,
        } => {
            let payload = ProductDraft {
                name,
                price_input: price,
                stock: Some(stock),
                barcode,
            }
            .validate()?;
            let image = read_image(image.as_deref()).await?;
            let product = api.create_product(&payload, image).await?;
            println!("Created product {} ({})", product.id, product.name);
        }
        ProductCommand::Edit {
            id,
            name,
            price,
            stock,
            barcode,
            image,
        } => {
            let existing = api.get_product(&id).await?;
            let mut draft = ProductDraft::from_product(&existing);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(price) = price {
                draft.price_input = price;
            }
            if stock.is_some() {
                draft.stock = stock;
            }
            if barcode.is_some() {
                draft.barcode = barcode;
            }
            let payload = draft.validate()?;
            let image = read_image(image.as_deref()).await?;
            let product = api.update_product(&id, &payload, image).await?;
            println!("Updated product {} ({})", product.id, product.name);
        }
        ProductCommand::Delete { id } => {
            api.delete_product(&id).await?;
            println!("Deleted product {}", id);
        }
    }
    Ok(())
}

async fn catalog(api: &mut CatalogApi, cmd: CatalogCommand) -> anyhow::Result<()> {
    let origin = api.config().app_origin.clone();
    match cmd {
        CatalogCommand::Create { ids } => {
            let mut page = ProductsPage::new(ListConfig::full(), origin);
            if !ids.is_empty() {
                page.load(api).await?;
            }
            for id in &ids {
                if page.view().find(id).is_none() {
                    bail!("Unknown product: {}", id);
                }
                page.view_mut().select(id, true)?;
            }
            let link = page.create_catalog(api).await?;
            println!("Catalog created: {}", link);
        }
        CatalogCommand::Show { uuid } => {
            let mut viewer = CatalogViewer::new(uuid);
            let state = viewer.load(api).await;
            if let Some(message) = state.error() {
                bail!("{}", message);
            }
            if let Some(catalog) = state.data() {
                print!("{}", output::catalog_view(catalog));
            }
        }
        CatalogCommand::List => {
            let mut page = CatalogsPage::new(origin);
            page.load(api).await?;
            print!("{}", output::catalog_rows(page.catalogs(), |uuid| page.link(uuid)));
        }
        CatalogCommand::Delete { uuid } => {
            api.delete_catalog(&uuid).await?;
            println!("Deleted catalog {}", uuid);
        }
        CatalogCommand::BulkDelete { uuids } => {
            let mut page = CatalogsPage::new(origin);
            if !uuids.is_empty() {
                page.load(api).await?;
            }
            for uuid in &uuids {
                if !page.catalogs().iter().any(|c| &c.uuid == uuid) {
                    bail!("Unknown catalog: {}", uuid);
                }
                page.select(uuid, true);
            }
            match page.bulk_delete(api).await {
                Ok(count) => println!("Deleted {} catalogs", count),
                Err(ClientError::Invalid(e @ ValidationError::EmptySelection)) => {
                    eprintln!("warning: {}", e);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
    Ok(())
}
