//! Actor info: a grouped snapshot of what live actors report about themselves.
//!
//! # Overview
//!
//! Actors opt in by implementing [`InfoContributor`] and returning themselves
//! from [`Actor::as_contributor`](crate::Actor::as_contributor). The
//! [`ActorInfoExtension`] watches activations and deactivations through the
//! Stage's lifetime hooks, keeps weak handles to opted-in actors and, on
//! demand, asks each of them for its details.
//!
//! With the default grouping the snapshot looks like:
//!
//! ```text
//! {
//!   "Inventory": {
//!     "eu-1": { "items": 12 },
//!     "us-2": { "items": 40 }
//!   },
//!   "Session": {
//!     "null": { "open": 3 }
//!   }
//! }
//! ```
//!
//! # Example
//!
//! ```ignore
//! let actor_info = Arc::new(ActorInfoExtension::new(GroupProperties::default()));
//! let endpoint = InfoEndpoint::new().with_contributor(actor_info.clone());
//!
//! // the Stage calls actor_info.pre_activation(&actor) etc.
//!
//! let document = endpoint.info()?; // { "actors": { ... } } or {}
//! ```

mod actor_handle;
mod actor_info_extension;
mod actor_info_properties;
mod details_container;
mod group_type;
mod info_builder;
mod info_contributor;
mod info_endpoint;

pub use actor_info_extension::{ACTORS_INFO_KEY, ActorInfoExtension};
pub use actor_info_properties::ActorInfoProperties;
pub use group_type::{GroupProperties, GroupType};
pub use info_builder::{Details, InfoBuilder};
pub use info_contributor::InfoContributor;
pub use info_endpoint::InfoEndpoint;
