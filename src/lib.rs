//! Arvore – kinship resolution and generation layout for a family-tree viewer.
//!
//! Arvore loads four flat genealogy collections (places, persons, marriages
//! and parent/child relationship records), indexes them once, and answers the
//! questions a tree viewer asks over and over:
//! * who are the parents, children and spouses of a person,
//! * how does one person relate to another (father, wife, maternal
//!   grandmother, ...),
//! * where does every relative go on screen when a person is put in focus.
//!
//! Relationships are never stored person to person. A child points at a
//! *family unit* (a marriage record), and the marriage names husband and
//! wife. Everything else is derived.
//!
//! ## Modules
//! * [`entity`] – The record types exactly as they appear in the data files.
//! * [`store`] – [`store::EntityStore`], owning the records and the indices
//!   built from them at load time.
//! * [`relation`] – Parent, child and spouse queries.
//! * [`label`] – [`label::RelationshipLabel`] and [`label::label_relative_to`].
//! * [`layout`] – The [`layout::LayoutEngine`] turning a focal person and a
//!   [`layout::LayoutProfile`] into placed nodes and connecting edges.
//! * [`viewport`] – Layout profiles for phone and desktop windows.
//! * [`search`], [`dates`], [`details`] – Helpers behind the search box and the
//!   details panel.
//! * [`source`], [`interface`], [`server`], [`settings`] – Loading from disk,
//!   shared access with reload, the HTTP API and its configuration.
//!
//! ## Data Quality
//! Real genealogy files are incomplete. Missing parents, marriages with one
//! side unknown, and references to ids that do not exist are all tolerated:
//! queries return what can be resolved and silently skip the rest. Only a
//! collection that is not a list of records is rejected.
//!
//! ## Quick Start
//! ```
//! use arvore::entity::{Id, Marriage, ParentChild, Person, Sex};
//! use arvore::layout::{LayoutEngine, LayoutProfile};
//! use arvore::store::EntityStore;
//!
//! let store = EntityStore::load(
//!     vec![],
//!     vec![
//!         Person::new("P1", "Ana", "Silva", Sex::Feminino),
//!         Person::new("P2", "Bento", "Silva", Sex::Masculino),
//!         Person::new("P3", "Carla", "Silva", Sex::Feminino),
//!     ],
//!     vec![Marriage::new("M1", Some("P2".into()), Some("P1".into()))],
//!     vec![ParentChild::new("M1", "P3")],
//! );
//! assert_eq!(store.children_of(&"P1".into()), vec![Id::from("P3")]);
//! let result = LayoutEngine::new(&store)
//!     .layout(&"P1".into(), &LayoutProfile::default())
//!     .unwrap();
//! assert_eq!(result.generations.len(), 2);
//! ```

pub mod dates;
pub mod details;
pub mod entity;
pub mod error;
pub mod interface;
pub mod label;
pub mod layout;
pub mod relation;
pub mod search;
pub mod server;
pub mod settings;
pub mod source;
pub mod store;
pub mod viewport;

pub use error::{ArvoreError, Result};
