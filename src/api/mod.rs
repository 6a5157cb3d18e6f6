// gatt-topology Source Code File
//
// Copyright 2020 Nonpolynomial Labs LLC. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! The `api` module contains the traits and types which make up the public interface shared by
//! every backend: the capability traits for the three GATT attribute kinds, the [`Discovery`]
//! trait a platform adapter implements, and the small value types used for lookups.

pub mod bleuuid;

use async_trait::async_trait;
use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_cr as serde;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::Duration;
use uuid::Uuid;

use crate::uuids;
use crate::Result;
use bleuuid::{normalize_uuid_str, uuid_matches};

/// The three kinds of attribute stored in a [`ServiceCollection`](crate::ServiceCollection).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_cr")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeKind {
    Service,
    Characteristic,
    Descriptor,
}

impl AttributeKind {
    /// The kind an attribute of this kind hangs off, `None` for services.
    pub fn parent(self) -> Option<AttributeKind> {
        match self {
            AttributeKind::Service => None,
            AttributeKind::Characteristic => Some(AttributeKind::Service),
            AttributeKind::Descriptor => Some(AttributeKind::Characteristic),
        }
    }
}

impl Display for AttributeKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            AttributeKind::Service => "service",
            AttributeKind::Characteristic => "characteristic",
            AttributeKind::Descriptor => "descriptor",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// A set of properties that indicate what operations are supported by a Characteristic.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CharPropFlags: u8 {
        const BROADCAST = 0x01;
        const READ = 0x02;
        const WRITE_WITHOUT_RESPONSE = 0x04;
        const WRITE = 0x08;
        const NOTIFY = 0x10;
        const INDICATE = 0x20;
        const AUTHENTICATED_SIGNED_WRITES = 0x40;
        const EXTENDED_PROPERTIES = 0x80;
    }
}

impl CharPropFlags {
    /// Builds a flag set from the property names some stacks report instead of the raw
    /// properties byte (BlueZ's `Flags`, for example). Names that don't map to a bit in the
    /// characteristic declaration are ignored.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        names
            .into_iter()
            .fold(CharPropFlags::empty(), |flags, name| {
                flags
                    | match name {
                        "broadcast" => CharPropFlags::BROADCAST,
                        "read" => CharPropFlags::READ,
                        "write-without-response" => CharPropFlags::WRITE_WITHOUT_RESPONSE,
                        "write" => CharPropFlags::WRITE,
                        "notify" => CharPropFlags::NOTIFY,
                        "indicate" => CharPropFlags::INDICATE,
                        "authenticated-signed-writes" => {
                            CharPropFlags::AUTHENTICATED_SIGNED_WRITES
                        }
                        "extended-properties" => CharPropFlags::EXTENDED_PROPERTIES,
                        _ => CharPropFlags::empty(),
                    }
            })
    }
}

/// Identifies an attribute either by its handle or by its UUID.
///
/// Most lookups take `impl Into<Specifier>`, so a bare `u16` handle, a UUID string (short or
/// full form, any case) or a [`Uuid`] can be passed directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Specifier {
    Handle(u16),
    Uuid(String),
}

impl From<u16> for Specifier {
    fn from(handle: u16) -> Self {
        Specifier::Handle(handle)
    }
}

impl From<&str> for Specifier {
    fn from(uuid: &str) -> Self {
        Specifier::Uuid(uuid.to_owned())
    }
}

impl From<String> for Specifier {
    fn from(uuid: String) -> Self {
        Specifier::Uuid(uuid)
    }
}

impl From<Uuid> for Specifier {
    fn from(uuid: Uuid) -> Self {
        Specifier::Uuid(uuid.to_string())
    }
}

impl From<&Uuid> for Specifier {
    fn from(uuid: &Uuid) -> Self {
        Specifier::Uuid(uuid.to_string())
    }
}

impl Display for Specifier {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Specifier::Handle(handle) => write!(f, "handle {}", handle),
            Specifier::Uuid(uuid) => write!(f, "UUID {}", normalize_uuid_str(uuid)),
        }
    }
}

/// A GATT descriptor, as exposed by a backend.
pub trait Descriptor: Debug + Send + Sync {
    /// The attribute handle of this descriptor.
    fn handle(&self) -> u16;

    /// The full, lower-case UUID of this descriptor.
    fn uuid(&self) -> &str;

    /// The handle of the characteristic this descriptor belongs to.
    fn characteristic_handle(&self) -> u16;

    /// The UUID of the characteristic this descriptor belongs to.
    fn characteristic_uuid(&self) -> &str;

    /// Human readable name of this descriptor's UUID.
    fn description(&self) -> &'static str {
        uuids::description(self.uuid())
    }
}

/// A GATT characteristic, as exposed by a backend.
pub trait Characteristic: Debug + Send + Sync {
    type Descriptor: Descriptor;

    /// The attribute handle of this characteristic.
    fn handle(&self) -> u16;

    /// The full, lower-case UUID of this characteristic.
    fn uuid(&self) -> &str;

    /// The handle of the service this characteristic belongs to.
    fn service_handle(&self) -> u16;

    /// The UUID of the service this characteristic belongs to.
    fn service_uuid(&self) -> &str;

    /// The operations this characteristic supports.
    fn properties(&self) -> CharPropFlags;

    /// Human readable name of this characteristic's UUID.
    fn description(&self) -> &'static str {
        uuids::description(self.uuid())
    }

    /// The descriptors added to this characteristic, in the order they were added.
    fn descriptors(&self) -> &[Self::Descriptor];

    /// Appends a descriptor to this characteristic.
    ///
    /// This is meant to be called while populating a
    /// [`ServiceCollection`](crate::ServiceCollection) and does not check for duplicates.
    fn add_descriptor(&mut self, descriptor: Self::Descriptor);

    /// Returns the first descriptor whose UUID matches `uuid`, if any.
    fn get_descriptor(&self, uuid: &str) -> Option<&Self::Descriptor> {
        let uuid = normalize_uuid_str(uuid);
        self.descriptors()
            .iter()
            .find(|descriptor| uuid_matches(descriptor.uuid(), &uuid))
    }
}

/// A GATT service, as exposed by a backend.
pub trait Service: Debug + Send + Sync {
    type Characteristic: Characteristic;

    /// The attribute handle of this service.
    fn handle(&self) -> u16;

    /// The full, lower-case UUID of this service.
    fn uuid(&self) -> &str;

    /// Human readable name of this service's UUID.
    fn description(&self) -> &'static str {
        uuids::description(self.uuid())
    }

    /// The characteristics added to this service, in the order they were added.
    fn characteristics(&self) -> &[Self::Characteristic];

    /// Mutable access to the characteristics of this service, used while populating a
    /// collection to attach descriptors. Implementations must return the same sequence as
    /// [`characteristics`](Service::characteristics).
    fn characteristics_mut(&mut self) -> &mut [Self::Characteristic];

    /// Appends a characteristic to this service.
    ///
    /// This is meant to be called while populating a
    /// [`ServiceCollection`](crate::ServiceCollection) and does not check for duplicates:
    /// adding the same characteristic twice lists it twice.
    fn add_characteristic(&mut self, characteristic: Self::Characteristic);

    /// Returns the first characteristic whose UUID matches `uuid`, if any.
    ///
    /// Unlike [`ServiceCollection::get_characteristic`](crate::ServiceCollection::get_characteristic)
    /// several matches are not an error here; the one added first wins.
    fn get_characteristic(&self, uuid: &str) -> Option<&Self::Characteristic> {
        let uuid = normalize_uuid_str(uuid);
        self.characteristics()
            .iter()
            .find(|characteristic| uuid_matches(characteristic.uuid(), &uuid))
    }
}

/// The characteristic type of service backend `S`.
pub type CharacteristicOf<S> = <S as Service>::Characteristic;

/// The descriptor type of service backend `S`.
pub type DescriptorOf<S> = <CharacteristicOf<S> as Characteristic>::Descriptor;

/// Options controlling a [`discover`](crate::discover) run.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_cr")
)]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Give up on the whole discovery after this long. `None` waits for the adapter.
    pub timeout: Option<Duration>,
    /// Only keep services with one of these UUIDs (short or full form). Empty keeps all.
    pub services: Vec<String>,
    /// Don't ask the adapter for descriptors.
    pub skip_descriptors: bool,
}

impl DiscoveryOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_service(mut self, uuid: impl Into<String>) -> Self {
        self.services.push(uuid.into());
        self
    }

    pub fn without_descriptors(mut self) -> Self {
        self.skip_descriptors = true;
        self
    }

    /// Whether a service with `uuid` passes the service filter.
    pub fn wants_service(&self, uuid: &str) -> bool {
        self.services.is_empty()
            || self
                .services
                .iter()
                .any(|wanted| uuid_matches(uuid, &normalize_uuid_str(wanted)))
    }
}

/// The platform side of service discovery: something that can walk a connected peripheral's
/// attribute table. Implemented outside this crate, once per transport.
///
/// [`discover`](crate::discover) calls these methods parents-first and feeds the results into a
/// fresh [`ServiceCollection`](crate::ServiceCollection).
#[async_trait]
pub trait Discovery: Send + Sync {
    type Service: Service;

    /// Returns every primary service of the peripheral.
    async fn services(&self) -> Result<Vec<Self::Service>>;

    /// Returns the characteristics of `service`.
    async fn characteristics(
        &self,
        service: &Self::Service,
    ) -> Result<Vec<CharacteristicOf<Self::Service>>>;

    /// Returns the descriptors of `characteristic`.
    async fn descriptors(
        &self,
        characteristic: &CharacteristicOf<Self::Service>,
    ) -> Result<Vec<DescriptorOf<Self::Service>>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_from_names() {
        assert_eq!(
            CharPropFlags::from_names(["read", "notify", "reliable-write"]),
            CharPropFlags::READ | CharPropFlags::NOTIFY
        );
        assert_eq!(CharPropFlags::from_names(std::iter::empty()), CharPropFlags::empty());
    }

    #[test]
    fn specifier_conversions() {
        assert_eq!(Specifier::from(42u16), Specifier::Handle(42));
        assert_eq!(Specifier::from("180F"), Specifier::Uuid("180F".into()));
        let uuid = bleuuid::uuid_from_u16(0x180f);
        assert_eq!(
            Specifier::from(uuid),
            Specifier::Uuid("0000180f-0000-1000-8000-00805f9b34fb".into())
        );
    }

    #[test]
    fn specifier_display_normalizes() {
        assert_eq!(
            Specifier::from("2A19").to_string(),
            "UUID 00002a19-0000-1000-8000-00805f9b34fb"
        );
        assert_eq!(Specifier::from(7u16).to_string(), "handle 7");
    }

    #[test]
    fn service_filter() {
        let options = DiscoveryOptions::default();
        assert!(options.wants_service("0000180f-0000-1000-8000-00805f9b34fb"));

        let options = options.with_service("180F");
        assert!(options.wants_service("0000180f-0000-1000-8000-00805f9b34fb"));
        assert!(!options.wants_service("0000180a-0000-1000-8000-00805f9b34fb"));
    }

    #[test]
    fn attribute_kind_parents() {
        assert_eq!(AttributeKind::Service.parent(), None);
        assert_eq!(
            AttributeKind::Descriptor.parent(),
            Some(AttributeKind::Characteristic)
        );
        assert_eq!(AttributeKind::Characteristic.to_string(), "characteristic");
    }
}
