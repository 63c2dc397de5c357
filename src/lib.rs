//! # vitrine
//!
//! A small library that turns a storefront catalog's category listing into
//! a display-ready tree.
//!
//! The catalog API returns nested category records; this crate decodes that
//! payload and maps every record to a node carrying a numeric sort order
//! (derived from the record title, falling back to the id), a home-page
//! visibility flag, and recursively mapped, sorted children.
//!
//! ## Quick Start
//!
//! ```
//! use vitrine::{Category, category_tree};
//!
//! let records = vec![
//!     Category::new(1, "Books").with_title("2"),
//!     Category::new(2, "Music").with_title("1"),
//! ];
//!
//! let tree = category_tree(Some(records.as_slice()));
//! assert_eq!(tree[0].name, "Music");
//! assert!(tree.iter().all(|node| node.show_on_home));
//! ```
//!
//! ## Loading a catalog payload
//!
//! ```no_run
//! use vitrine::{category_tree, read_catalog};
//!
//! let response = read_catalog("catalog.json").unwrap();
//! let tree = category_tree(response.data.as_deref());
//! ```

pub mod catalog;
pub mod error;
pub mod tree;

pub use catalog::{Category, CatalogResponse, parse_catalog, read_catalog};
pub use error::{Error, Result};
pub use tree::{CategoryNode, category_tree, order_from_entry, sort_categories};
