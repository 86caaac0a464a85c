//! RM identification types.
//!
//! A [`HierObjectId`] has the textual form `root::extension`, where the extension is optional
//! and the root is one of the [`Uid`] kinds. The root kind is decided purely by the shape of
//! the root text; see [`Uid::classify`] for the order in which shapes are tried.

mod hier_object_id;
mod uid;

pub use hier_object_id::HierObjectId;
pub use uid::{Uid, UidKind};
