// gatt-topology Source Code File
//
// Copyright 2020 Nonpolynomial Labs LLC. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! The [`ServiceCollection`], a handle and UUID indexed store of one peripheral's GATT
//! attributes.

use log::{error, trace};
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;

use crate::api::bleuuid::{normalize_uuid_str, uuid_matches};
use crate::api::{
    AttributeKind, Characteristic, CharacteristicOf, Descriptor, DescriptorOf, Service, Specifier,
};
use crate::common::handle_map::HandleMap;
use crate::{Error, Result};

/// Outcome of adding an attribute to a [`ServiceCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Insertion {
    /// The attribute was stored.
    Inserted,
    /// An attribute of the same kind with the same handle was already present. The existing
    /// entry was kept and the new one dropped.
    Duplicate,
}

impl Insertion {
    pub fn is_inserted(self) -> bool {
        self == Insertion::Inserted
    }
}

/// Where a characteristic lives: its service's position and its index in that service's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CharacteristicSlot {
    service: usize,
    index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DescriptorSlot {
    service: usize,
    characteristic: usize,
    index: usize,
}

/// Any attribute found by [`ServiceCollection::get`].
pub enum Attribute<'a, S: Service> {
    Service(&'a S),
    Characteristic(&'a CharacteristicOf<S>),
    Descriptor(&'a DescriptorOf<S>),
}

impl<'a, S: Service> Attribute<'a, S> {
    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Service(_) => AttributeKind::Service,
            Attribute::Characteristic(_) => AttributeKind::Characteristic,
            Attribute::Descriptor(_) => AttributeKind::Descriptor,
        }
    }

    pub fn handle(&self) -> u16 {
        match self {
            Attribute::Service(service) => service.handle(),
            Attribute::Characteristic(characteristic) => characteristic.handle(),
            Attribute::Descriptor(descriptor) => descriptor.handle(),
        }
    }

    pub fn uuid(&self) -> &'a str {
        match *self {
            Attribute::Service(service) => service.uuid(),
            Attribute::Characteristic(characteristic) => characteristic.uuid(),
            Attribute::Descriptor(descriptor) => descriptor.uuid(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Attribute::Service(service) => service.description(),
            Attribute::Characteristic(characteristic) => characteristic.description(),
            Attribute::Descriptor(descriptor) => descriptor.description(),
        }
    }

    pub fn as_service(&self) -> Option<&'a S> {
        match *self {
            Attribute::Service(service) => Some(service),
            _ => None,
        }
    }

    pub fn as_characteristic(&self) -> Option<&'a CharacteristicOf<S>> {
        match *self {
            Attribute::Characteristic(characteristic) => Some(characteristic),
            _ => None,
        }
    }

    pub fn as_descriptor(&self) -> Option<&'a DescriptorOf<S>> {
        match *self {
            Attribute::Descriptor(descriptor) => Some(descriptor),
            _ => None,
        }
    }
}

impl<S: Service> Clone for Attribute<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Service> Copy for Attribute<'_, S> {}

impl<S: Service> Debug for Attribute<'_, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Attribute::Service(service) => f.debug_tuple("Service").field(service).finish(),
            Attribute::Characteristic(characteristic) => f
                .debug_tuple("Characteristic")
                .field(characteristic)
                .finish(),
            Attribute::Descriptor(descriptor) => {
                f.debug_tuple("Descriptor").field(descriptor).finish()
            }
        }
    }
}

/// The GATT services, characteristics and descriptors discovered on one peripheral.
///
/// Each attribute kind is indexed by handle in its own namespace. A collection starts out empty,
/// is filled parents-first by the discovery adapter through [`add_service`],
/// [`add_characteristic`] and [`add_descriptor`], and is read-only from then on; nothing is ever
/// replaced or removed. When the peripheral disconnects the whole collection is dropped.
///
/// Characteristics are stored inside their service and descriptors inside their
/// characteristic. The flat handle indexes only record where to find them, so an attribute
/// reached by handle is the very same object listed by its parent.
///
/// [`add_service`]: ServiceCollection::add_service
/// [`add_characteristic`]: ServiceCollection::add_characteristic
/// [`add_descriptor`]: ServiceCollection::add_descriptor
#[derive(Debug, Clone)]
pub struct ServiceCollection<S: Service> {
    services: HandleMap<S>,
    characteristics: HandleMap<CharacteristicSlot>,
    descriptors: HandleMap<DescriptorSlot>,
}

impl<S: Service> Default for ServiceCollection<S> {
    fn default() -> Self {
        ServiceCollection {
            services: HandleMap::default(),
            characteristics: HandleMap::default(),
            descriptors: HandleMap::default(),
        }
    }
}

impl<S: Service> ServiceCollection<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a service.
    ///
    /// If a service with the same handle is already present it is kept, `service` is dropped
    /// and [`Insertion::Duplicate`] is returned.
    pub fn add_service(&mut self, service: S) -> Insertion {
        let handle = service.handle();
        if self.services.insert(handle, service) {
            trace!("Added service {}", handle);
            Insertion::Inserted
        } else {
            error!(
                "The service {} is already present in this collection!",
                handle
            );
            Insertion::Duplicate
        }
    }

    /// Adds a characteristic and appends it to its service's characteristics.
    ///
    /// Returns [`Error::MissingParent`] if the service named by
    /// [`service_handle`](Characteristic::service_handle) hasn't been added; nothing is stored in
    /// that case. A duplicate handle is reported like in [`add_service`](Self::add_service).
    pub fn add_characteristic(&mut self, characteristic: CharacteristicOf<S>) -> Result<Insertion> {
        let handle = characteristic.handle();
        if self.characteristics.contains(handle) {
            error!(
                "The characteristic {} is already present in this collection!",
                handle
            );
            return Ok(Insertion::Duplicate);
        }

        let parent = characteristic.service_handle();
        let missing_parent = || Error::MissingParent {
            kind: AttributeKind::Characteristic,
            handle,
            parent,
        };
        let service_position = self.services.position(parent).ok_or_else(missing_parent)?;
        let service = self
            .services
            .get_index_mut(service_position)
            .ok_or_else(missing_parent)?;
        let index = service.characteristics().len();
        service.add_characteristic(characteristic);
        self.characteristics.insert(
            handle,
            CharacteristicSlot {
                service: service_position,
                index,
            },
        );
        trace!("Added characteristic {} to service {}", handle, parent);
        Ok(Insertion::Inserted)
    }

    /// Adds a descriptor and appends it to its characteristic's descriptors.
    ///
    /// Returns [`Error::MissingParent`] if the characteristic named by
    /// [`characteristic_handle`](Descriptor::characteristic_handle) hasn't been added.
    pub fn add_descriptor(&mut self, descriptor: DescriptorOf<S>) -> Result<Insertion> {
        let handle = descriptor.handle();
        if self.descriptors.contains(handle) {
            error!(
                "The descriptor {} is already present in this collection!",
                handle
            );
            return Ok(Insertion::Duplicate);
        }

        let parent = descriptor.characteristic_handle();
        let missing_parent = || Error::MissingParent {
            kind: AttributeKind::Descriptor,
            handle,
            parent,
        };
        let slot = *self
            .characteristics
            .get(parent)
            .ok_or_else(missing_parent)?;
        let characteristic = self
            .services
            .get_index_mut(slot.service)
            .and_then(|service| service.characteristics_mut().get_mut(slot.index))
            .ok_or_else(missing_parent)?;
        let index = characteristic.descriptors().len();
        characteristic.add_descriptor(descriptor);
        self.descriptors.insert(
            handle,
            DescriptorSlot {
                service: slot.service,
                characteristic: slot.index,
                index,
            },
        );
        trace!("Added descriptor {} to characteristic {}", handle, parent);
        Ok(Insertion::Inserted)
    }

    /// Looks a service up by handle or by UUID.
    ///
    /// Several services may share a UUID. If more than one matches a UUID specifier this fails
    /// with [`Error::AmbiguousUuid`]; look the service up by handle instead.
    pub fn get_service(&self, specifier: impl Into<Specifier>) -> Result<Option<&S>> {
        match specifier.into() {
            Specifier::Handle(handle) => Ok(self.service_by_handle(handle)),
            Specifier::Uuid(uuid) => self.service_by_uuid(&uuid),
        }
    }

    pub fn service_by_handle(&self, handle: u16) -> Option<&S> {
        self.services.get(handle)
    }

    pub fn service_by_uuid(&self, uuid: &str) -> Result<Option<&S>> {
        let uuid = normalize_uuid_str(uuid);
        single_match(
            AttributeKind::Service,
            &uuid,
            self.services()
                .filter(|service| uuid_matches(service.uuid(), &uuid)),
        )
    }

    /// Looks a characteristic up by handle or by UUID, across all services.
    ///
    /// Same ambiguity rules as [`get_service`](Self::get_service). To pick the first match
    /// within one service use [`Service::get_characteristic`].
    pub fn get_characteristic(
        &self,
        specifier: impl Into<Specifier>,
    ) -> Result<Option<&CharacteristicOf<S>>> {
        match specifier.into() {
            Specifier::Handle(handle) => Ok(self.characteristic_by_handle(handle)),
            Specifier::Uuid(uuid) => self.characteristic_by_uuid(&uuid),
        }
    }

    pub fn characteristic_by_handle(&self, handle: u16) -> Option<&CharacteristicOf<S>> {
        self.characteristics
            .get(handle)
            .and_then(|slot| self.resolve_characteristic(*slot))
    }

    pub fn characteristic_by_uuid(&self, uuid: &str) -> Result<Option<&CharacteristicOf<S>>> {
        let uuid = normalize_uuid_str(uuid);
        single_match(
            AttributeKind::Characteristic,
            &uuid,
            self.characteristics()
                .filter(|characteristic| uuid_matches(characteristic.uuid(), &uuid)),
        )
    }

    /// Looks a descriptor up by handle. Descriptors can't be looked up by UUID here; go through
    /// their characteristic's [`get_descriptor`](Characteristic::get_descriptor).
    pub fn get_descriptor(&self, handle: u16) -> Option<&DescriptorOf<S>> {
        self.descriptors
            .get(handle)
            .and_then(|slot| self.resolve_descriptor(*slot))
    }

    /// Looks up any attribute: a service first, then a characteristic, then a descriptor.
    ///
    /// A handle may be taken in more than one namespace, in which case the service wins over the
    /// characteristic and the characteristic over the descriptor. A UUID never matches a
    /// descriptor. An ambiguous UUID fails as soon as the stage that sees it is reached.
    pub fn get(&self, specifier: impl Into<Specifier>) -> Result<Option<Attribute<'_, S>>> {
        match specifier.into() {
            Specifier::Handle(handle) => Ok(self
                .service_by_handle(handle)
                .map(Attribute::Service)
                .or_else(|| {
                    self.characteristic_by_handle(handle)
                        .map(Attribute::Characteristic)
                })
                .or_else(|| self.get_descriptor(handle).map(Attribute::Descriptor))),
            Specifier::Uuid(uuid) => {
                if let Some(service) = self.service_by_uuid(&uuid)? {
                    return Ok(Some(Attribute::Service(service)));
                }
                Ok(self
                    .characteristic_by_uuid(&uuid)?
                    .map(Attribute::Characteristic))
            }
        }
    }

    /// Iterates over the services in the order they were added.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter {
            inner: self.services.iter(),
        }
    }

    /// All services, in the order they were added.
    pub fn services(&self) -> impl Iterator<Item = &S> + '_ {
        self.services.values()
    }

    /// All characteristics of all services, in the order they were added.
    pub fn characteristics(&self) -> impl Iterator<Item = &CharacteristicOf<S>> + '_ {
        self.characteristics
            .values()
            .filter_map(move |slot| self.resolve_characteristic(*slot))
    }

    /// All descriptors of all characteristics, in the order they were added.
    pub fn descriptors(&self) -> impl Iterator<Item = &DescriptorOf<S>> + '_ {
        self.descriptors
            .values()
            .filter_map(move |slot| self.resolve_descriptor(*slot))
    }

    /// Number of services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.len() == 0
    }

    fn resolve_characteristic(&self, slot: CharacteristicSlot) -> Option<&CharacteristicOf<S>> {
        self.services
            .get_index(slot.service)?
            .characteristics()
            .get(slot.index)
    }

    fn resolve_descriptor(&self, slot: DescriptorSlot) -> Option<&DescriptorOf<S>> {
        self.services
            .get_index(slot.service)?
            .characteristics()
            .get(slot.characteristic)?
            .descriptors()
            .get(slot.index)
    }
}

fn single_match<'a, T>(
    kind: AttributeKind,
    uuid: &str,
    mut matches: impl Iterator<Item = &'a T>,
) -> Result<Option<&'a T>>
where
    T: ?Sized + 'a,
{
    let first = matches.next();
    if matches.next().is_some() {
        return Err(Error::AmbiguousUuid {
            kind,
            uuid: uuid.to_owned(),
        });
    }
    Ok(first)
}

/// Iterator over the services of a [`ServiceCollection`], see [`ServiceCollection::iter`].
#[derive(Debug)]
pub struct Iter<'a, S> {
    inner: std::slice::Iter<'a, (u16, S)>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<&'a S> {
        self.inner.next().map(|(_, service)| service)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, service)| service)
    }
}

impl<S> ExactSizeIterator for Iter<'_, S> {}

impl<S> FusedIterator for Iter<'_, S> {}

impl<'a, S: Service> IntoIterator for &'a ServiceCollection<S> {
    type Item = &'a S;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Iter<'a, S> {
        self.iter()
    }
}

impl<S: Service> Display for ServiceCollection<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for service in self {
            writeln!(
                f,
                "{} (Handle: {}): {}",
                service.uuid(),
                service.handle(),
                service.description()
            )?;
            for characteristic in service.characteristics() {
                writeln!(
                    f,
                    "  {} (Handle: {}): {}",
                    characteristic.uuid(),
                    characteristic.handle(),
                    characteristic.description()
                )?;
                for descriptor in characteristic.descriptors() {
                    writeln!(
                        f,
                        "    {} (Handle: {}): {}",
                        descriptor.uuid(),
                        descriptor.handle(),
                        descriptor.description()
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CharPropFlags;
    use crate::basic::{BasicCharacteristic, BasicDescriptor, BasicService};

    const GAP: &str = "00001800-0000-1000-8000-00805f9b34fb";

    fn characteristic(handle: u16, uuid: &str, service: u16) -> BasicCharacteristic {
        BasicCharacteristic::new(handle, uuid, service, "180f", CharPropFlags::READ)
    }

    /// Battery service (1) with battery level (3, CCCD 4), device information (10) with two
    /// string characteristics.
    fn populated() -> ServiceCollection<BasicService> {
        let mut collection = ServiceCollection::new();
        collection.add_service(BasicService::new(1, "180f"));
        collection.add_service(BasicService::new(10, "180a"));
        collection
            .add_characteristic(characteristic(3, "2a19", 1))
            .unwrap();
        collection
            .add_descriptor(BasicDescriptor::new(4, "2902", 3, "2a19"))
            .unwrap();
        collection
            .add_characteristic(characteristic(12, "2a29", 10))
            .unwrap();
        collection
            .add_characteristic(characteristic(14, "2a24", 10))
            .unwrap();
        collection
    }

    #[test]
    fn get_service_by_handle() {
        let collection = populated();
        let service = collection.get_service(1u16).unwrap().unwrap();
        assert_eq!(service.uuid(), "0000180f-0000-1000-8000-00805f9b34fb");
        assert!(collection.get_service(2u16).unwrap().is_none());
    }

    #[test]
    fn duplicate_service_keeps_first() {
        let mut collection = ServiceCollection::new();
        assert_eq!(
            collection.add_service(BasicService::new(1, "180f")),
            Insertion::Inserted
        );
        assert_eq!(
            collection.add_service(BasicService::new(1, "180a")),
            Insertion::Duplicate
        );
        assert_eq!(collection.len(), 1);
        assert_eq!(
            collection.service_by_handle(1).unwrap().description(),
            "Battery Service"
        );
    }

    #[test]
    fn characteristic_needs_its_service() {
        let mut collection = ServiceCollection::<BasicService>::new();
        let err = collection
            .add_characteristic(characteristic(3, "2a19", 1))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingParent {
                kind: AttributeKind::Characteristic,
                handle: 3,
                parent: 1,
            }
        ));
        assert!(collection.characteristic_by_handle(3).is_none());

        collection.add_service(BasicService::new(1, "180f"));
        collection.add_service(BasicService::new(2, "180a"));
        collection
            .add_characteristic(characteristic(5, "2a00", 1))
            .unwrap();
        assert_eq!(
            collection
                .add_characteristic(characteristic(3, "2a19", 1))
                .unwrap(),
            Insertion::Inserted
        );

        let service = collection.service_by_handle(1).unwrap();
        let handles: Vec<u16> = service
            .characteristics()
            .iter()
            .map(|c| c.handle())
            .collect();
        assert_eq!(handles, [5, 3]);
        assert!(collection.service_by_handle(2).unwrap().characteristics().is_empty());
    }

    #[test]
    fn duplicate_characteristic_is_not_listed_twice() {
        let mut collection = populated();
        assert_eq!(
            collection
                .add_characteristic(characteristic(3, "2a00", 1))
                .unwrap(),
            Insertion::Duplicate
        );
        let service = collection.service_by_handle(1).unwrap();
        assert_eq!(service.characteristics().len(), 1);
        assert_eq!(
            collection.characteristic_by_handle(3).unwrap().description(),
            "Battery Level"
        );
    }

    #[test]
    fn duplicate_check_comes_before_parent_check() {
        let mut collection = populated();
        assert_eq!(
            collection
                .add_characteristic(characteristic(3, "2a19", 99))
                .unwrap(),
            Insertion::Duplicate
        );
    }

    #[test]
    fn descriptor_needs_its_characteristic() {
        let mut collection = populated();
        let err = collection
            .add_descriptor(BasicDescriptor::new(20, "2902", 19, "2a19"))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingParent {
                kind: AttributeKind::Descriptor,
                handle: 20,
                parent: 19,
            }
        ));
        assert!(collection.get_descriptor(20).is_none());

        assert_eq!(
            collection
                .add_descriptor(BasicDescriptor::new(4, "2901", 3, "2a19"))
                .unwrap(),
            Insertion::Duplicate
        );
    }

    #[test]
    fn flat_and_nested_views_agree() {
        let mut collection = populated();
        collection
            .add_descriptor(BasicDescriptor::new(15, "2901", 14, "2a24"))
            .unwrap();

        let by_handle = collection.get_descriptor(15).unwrap();
        let nested = &collection
            .service_by_handle(10)
            .unwrap()
            .get_characteristic("2a24")
            .unwrap()
            .descriptors()[0];
        assert!(std::ptr::eq(by_handle, nested));

        let by_handle = collection.characteristic_by_handle(12).unwrap();
        let nested = &collection.service_by_handle(10).unwrap().characteristics()[0];
        assert!(std::ptr::eq(by_handle, nested));
    }

    #[test]
    fn ambiguous_service_uuid() {
        let mut collection = ServiceCollection::new();
        collection.add_service(BasicService::new(1, "1800"));
        collection.add_service(BasicService::new(2, GAP));

        let err = collection.get_service("1800").unwrap_err();
        assert!(matches!(
            err,
            Error::AmbiguousUuid { kind: AttributeKind::Service, ref uuid } if uuid == GAP
        ));
        assert_eq!(collection.get_service(1u16).unwrap().unwrap().handle(), 1);
    }

    #[test]
    fn service_uuid_lookup_is_case_insensitive() {
        let collection = populated();
        for specifier in ["180A", "180a", "0000180A-0000-1000-8000-00805F9B34FB"] {
            let service = collection.get_service(specifier).unwrap().unwrap();
            assert_eq!(service.handle(), 10);
        }
        assert!(collection.get_service("1801").unwrap().is_none());
    }

    #[test]
    fn service_lookup_by_uuid_type() {
        let collection = populated();
        let uuid = crate::api::bleuuid::uuid_from_u16(0x180a);
        assert_eq!(collection.get_service(uuid).unwrap().unwrap().handle(), 10);
    }

    #[test]
    fn characteristic_uuid_lookup() {
        let mut collection = populated();
        let found = collection.get_characteristic("2A29").unwrap().unwrap();
        assert_eq!(found.handle(), 12);

        collection
            .add_characteristic(characteristic(16, "2a29", 1))
            .unwrap();
        assert!(matches!(
            collection.get_characteristic("2a29"),
            Err(Error::AmbiguousUuid {
                kind: AttributeKind::Characteristic,
                ..
            })
        ));
        // Within one service the first match still wins.
        let service = collection.service_by_handle(10).unwrap();
        assert_eq!(service.get_characteristic("2a29").unwrap().handle(), 12);
    }

    #[test]
    fn combined_lookup_falls_through() {
        let mut collection = ServiceCollection::new();
        collection.add_service(BasicService::new(1, "180f"));
        collection
            .add_characteristic(characteristic(10, "2a19", 1))
            .unwrap();
        collection
            .add_descriptor(BasicDescriptor::new(11, "2902", 10, "2a19"))
            .unwrap();

        let found = collection.get(10u16).unwrap().unwrap();
        assert_eq!(found.kind(), AttributeKind::Characteristic);
        assert_eq!(found.as_characteristic().unwrap().handle(), 10);

        let found = collection.get(11u16).unwrap().unwrap();
        assert_eq!(found.kind(), AttributeKind::Descriptor);
        assert_eq!(found.description(), "Client Characteristic Configuration");

        let found = collection.get(1u16).unwrap().unwrap();
        assert_eq!(found.kind(), AttributeKind::Service);

        assert!(collection.get(99u16).unwrap().is_none());
    }

    #[test]
    fn combined_lookup_prefers_services() {
        let mut collection = ServiceCollection::new();
        collection.add_service(BasicService::new(1, "180f"));
        collection.add_service(BasicService::new(3, "180a"));
        collection
            .add_characteristic(characteristic(3, "2a19", 1))
            .unwrap();

        let found = collection.get(3u16).unwrap().unwrap();
        assert!(found.as_service().is_some());
        assert_eq!(found.uuid(), "0000180a-0000-1000-8000-00805f9b34fb");

        let found = collection.get("2a19").unwrap().unwrap();
        assert_eq!(found.kind(), AttributeKind::Characteristic);
    }

    #[test]
    fn combined_lookup_reports_ambiguity() {
        let mut collection = ServiceCollection::new();
        collection.add_service(BasicService::new(1, "1800"));
        collection.add_service(BasicService::new(2, "1800"));
        assert!(matches!(
            collection.get("1800"),
            Err(Error::AmbiguousUuid { .. })
        ));
    }

    #[test]
    fn descriptors_are_never_matched_by_uuid() {
        let collection = populated();
        assert!(collection.get("2902").unwrap().is_none());
        assert!(collection.get_descriptor(4).is_some());
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut collection = ServiceCollection::new();
        collection.add_service(BasicService::new(5, "180f"));
        collection.add_service(BasicService::new(2, "180a"));
        let handles: Vec<u16> = collection.iter().map(|s| s.handle()).collect();
        assert_eq!(handles, [5, 2]);

        let handles: Vec<u16> = (&collection).into_iter().rev().map(|s| s.handle()).collect();
        assert_eq!(handles, [2, 5]);
        assert_eq!(collection.iter().len(), 2);
    }

    #[test]
    fn flat_iterators() {
        let collection = populated();
        let characteristics: Vec<u16> = collection.characteristics().map(|c| c.handle()).collect();
        assert_eq!(characteristics, [3, 12, 14]);
        let descriptors: Vec<u16> = collection.descriptors().map(|d| d.handle()).collect();
        assert_eq!(descriptors, [4]);
    }

    #[test]
    fn display_renders_tree() {
        let mut collection = ServiceCollection::new();
        collection.add_service(BasicService::new(1, "180f"));
        collection
            .add_characteristic(characteristic(3, "2a19", 1))
            .unwrap();
        collection
            .add_descriptor(BasicDescriptor::new(4, "2902", 3, "2a19"))
            .unwrap();
        assert_eq!(
            collection.to_string(),
            "0000180f-0000-1000-8000-00805f9b34fb (Handle: 1): Battery Service\n\
             \x20 00002a19-0000-1000-8000-00805f9b34fb (Handle: 3): Battery Level\n\
             \x20   00002902-0000-1000-8000-00805f9b34fb (Handle: 4): Client Characteristic Configuration\n"
        );
    }

    #[test]
    fn empty_collection() {
        let collection = ServiceCollection::<BasicService>::default();
        assert!(collection.is_empty());
        assert_eq!(collection.iter().count(), 0);
        assert!(collection.get("180f").unwrap().is_none());
        assert_eq!(collection.to_string(), "");
    }
}
