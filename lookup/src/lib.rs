//! Find a cloud resource by name in a paginated listing, then fetch its detail record.
//!
//! The [`resolver::Resolver`] walks the pages of a [`catalog::Catalog`] until the first
//! summary with an exactly matching name shows up and asks the catalog for the detail
//! record behind its id. Absence is reported as [`error::NotFoundError`], every other
//! failure is handed back exactly as the catalog produced it.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use common::{error::FancyError, init::LookupInit};
//! use lookup::{
//!     backend::{Backend, data::BResource},
//!     config::Config,
//!     context::Context,
//!     resolver::Resolver,
//! };
//!
//! fn main() -> anyhow::Result<()> {
//!     LookupInit::init_logging(false, Path::new("logs/latest.log"))?;
//!     let config = Config::parse(Path::new("configs/config.toml"))?;
//!     let backend = Backend::new(&config);
//!     let resolver = Resolver::from_config(
//!         backend.catalog::<BResource, serde_json::Value>("node", "nodes"),
//!         &config,
//!     );
//!
//!     match resolver.resolve_optional(&Context::background(), "alpha") {
//!         Ok(Some(node)) => println!("{node}"),
//!         Ok(None) => println!("No node named alpha"),
//!         Err(error) => FancyError::print_fancy(&error, false),
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod page;
pub mod resolver;
