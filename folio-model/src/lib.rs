//! Entity model for Folio.
//!
//! Defines the contract every persisted content type fulfils and the
//! pieces the lifecycle layer runs against it:
//! - [`Entity`]: identity, timestamps, and the static rule set of a type
//! - [`LifecycleEvent`]: the load/save/delete notification points
//! - [`validation`]: declarative field rules and their evaluation
//! - [`PersistenceGateway`]: read-only storage access used by uniqueness rules
//! - [`Block`]: site-global reusable content, and [`blocks`] content types
//!
//! Nothing here performs storage I/O or touches hooks or caches; those
//! live in `folio-hooks`, `folio-cache`, and `folio-lifecycle`.

mod block;
pub mod blocks;
mod entity;
mod event;
mod gateway;
pub mod validation;

pub use block::Block;
pub use entity::Entity;
pub use event::LifecycleEvent;
pub use gateway::{FieldQuery, GatewayError, NullGateway, PersistenceGateway};
pub use validation::{
    GatewayErrorPolicy, RuleSet, ValidationErrors, ValidationFailure, ValidationResult,
};
