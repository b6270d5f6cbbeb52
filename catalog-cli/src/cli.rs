//! Command-line surface
//!
//! Every connection setting can come from a flag or from the environment
//! (a `.env` file in the working directory is loaded first).

use std::path::PathBuf;

use catalog_client::ClientConfig;
use catalog_client::config::{
    DEFAULT_API_URL, DEFAULT_APP_ORIGIN, DEFAULT_DATA_DIR, DEFAULT_TIMEOUT_SECS,
};
use clap::{Args, Parser, Subcommand};
use shared::FilterCriteria;

#[derive(Debug, Parser)]
#[command(name = "catalog", author, version, about = "Manage products and shareable catalogs")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "CATALOG_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Public origin used in shareable catalog links
    #[arg(long, env = "CATALOG_APP_ORIGIN", default_value = DEFAULT_APP_ORIGIN, global = true)]
    pub app_origin: String,

    /// Directory holding the persisted session
    #[arg(long, env = "CATALOG_DATA_DIR", default_value = DEFAULT_DATA_DIR, global = true)]
    pub data_dir: PathBuf,

    /// Request timeout in seconds
    #[arg(long, env = "CATALOG_REQUEST_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, env = "CATALOG_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Debug logging for the catalog crates
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.clone())
            .with_app_origin(self.app_origin.clone())
            .with_data_dir(self.data_dir.clone())
            .with_timeout(self.timeout)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and keep the session for later commands
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "CATALOG_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Product counts (dashboard)
    Stats,

    /// List products, newest first
    Products(ListArgs),

    /// Manage single products
    #[command(subcommand)]
    Product(ProductCommand),

    /// Create, view and delete catalogs
    #[command(subcommand)]
    Catalog(CatalogCommand),
}

/// Filter flags of the product list
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Only products with stock
    #[arg(long)]
    pub in_stock: bool,

    /// Only products without stock
    #[arg(long)]
    pub out_of_stock: bool,

    /// Case-insensitive match on name or price
    #[arg(short, long)]
    pub search: Option<String>,
}

impl ListArgs {
    /// Passing both stock flags shows everything.
    pub fn criteria(&self) -> FilterCriteria {
        let criteria = FilterCriteria::with_flags(self.in_stock, self.out_of_stock);
        match &self.search {
            Some(search) => criteria.with_search(search.clone()),
            None => criteria,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// Show one product
    Show { id: String },

    /// Create a product
    Add {
        #[arg(long)]
        name: String,

        /// Price; `12,50` and `12.50` are both accepted
        #[arg(long)]
        price: String,

        #[arg(long, allow_negative_numbers = true)]
        stock: i64,

        #[arg(long)]
        barcode: Option<String>,

        /// Image file to upload
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Change a product; omitted fields keep their value
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        stock: Option<i64>,

        /// Empty string removes the barcode
        #[arg(long)]
        barcode: Option<String>,

        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Delete a product
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// Create a catalog from product ids and print its link
    Create {
        /// Product ids, in catalog order
        ids: Vec<String>,
    },

    /// Show the products of a catalog (no login needed)
    Show { uuid: String },

    /// List your catalogs with their links
    List,

    /// Delete one catalog
    Delete { uuid: String },

    /// Delete several catalogs at once
    BulkDelete { uuids: Vec<String> },
}
