#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod assets;
mod config;
mod feeds;
mod links;
mod menu;
mod pagination;
mod path;
mod registry;
mod seo;
mod site;

pub mod template;

pub use self::assets::*;
pub use self::config::*;
pub use self::feeds::*;
pub use self::links::*;
pub use self::menu::*;
pub use self::pagination::*;
pub use self::path::*;
pub use self::registry::*;
pub use self::seo::*;
pub use self::site::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
