// gatt-topology Source Code File
//
// Copyright 2020 Nonpolynomial Labs LLC. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! gatt-topology is a cache of the GATT attribute hierarchy discovered on a Bluetooth LE
//! peripheral.
//!
//! A platform adapter walks the peripheral's attribute table and feeds every service,
//! characteristic and descriptor it finds into a [`ServiceCollection`], parents first. Once
//! discovery is done the collection is a read-only snapshot that can be queried by attribute
//! handle or by UUID, where 16-bit short UUIDs like `"180f"` are expanded to their full 128-bit
//! form before comparing.
//!
//! The attribute types themselves are traits ([`api::Service`], [`api::Characteristic`],
//! [`api::Descriptor`]) so that each adapter can wrap its native objects. Adapters that only
//! have plain values can use the types in [`basic`].
//!
//! ```
//! use gatt_topology::basic::{BasicCharacteristic, BasicService};
//! use gatt_topology::api::{CharPropFlags, Service};
//! use gatt_topology::ServiceCollection;
//!
//! # fn main() -> gatt_topology::Result<()> {
//! let mut collection = ServiceCollection::new();
//! collection.add_service(BasicService::new(1, "180f"));
//! collection.add_characteristic(BasicCharacteristic::new(
//!     3,
//!     "2a19",
//!     1,
//!     "180f",
//!     CharPropFlags::READ | CharPropFlags::NOTIFY,
//! ))?;
//!
//! let battery = collection.get_service("180F")?.expect("battery service");
//! assert_eq!(battery.description(), "Battery Service");
//! assert_eq!(battery.characteristics().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod basic;
pub mod collection;
mod common;
pub mod discovery;
pub mod uuids;

use std::result;
use std::time::Duration;

use crate::api::AttributeKind;

pub use crate::collection::{Attribute, Insertion, ServiceCollection};
pub use crate::common::session_cache::{CacheEvent, SessionCache};
pub use crate::discovery::discover;

/// The main error type returned by most methods in gatt-topology.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "{kind} {handle} refers to {} {parent}, which has not been added",
        .kind.parent().unwrap_or(AttributeKind::Service)
    )]
    MissingParent {
        kind: AttributeKind,
        handle: u16,
        parent: u16,
    },

    #[error("Multiple {kind}s with UUID {uuid}, refer to the desired {kind} by its handle instead")]
    AmbiguousUuid { kind: AttributeKind, uuid: String },

    #[error("Discovery failed: {0}")]
    Discovery(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Timed out after {0:?}")]
    TimedOut(Duration),

    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Convenience type for a result using the gatt-topology [`Error`] type.
pub type Result<T> = result::Result<T, Error>;
