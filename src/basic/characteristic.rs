// gatt-topology Source Code File
//
// Copyright 2020 Nonpolynomial Labs LLC. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

use super::descriptor::BasicDescriptor;
use crate::api::{bleuuid::normalize_uuid_str, CharPropFlags, Characteristic};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_cr as serde;
use std::fmt::{self, Display, Formatter};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_cr")
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasicCharacteristic {
    handle: u16,
    uuid: String,
    service_handle: u16,
    service_uuid: String,
    #[cfg_attr(feature = "serde", serde(with = "properties_bits"))]
    properties: CharPropFlags,
    descriptors: Vec<BasicDescriptor>,
}

impl BasicCharacteristic {
    pub fn new(
        handle: u16,
        uuid: impl AsRef<str>,
        service_handle: u16,
        service_uuid: impl AsRef<str>,
        properties: CharPropFlags,
    ) -> Self {
        BasicCharacteristic {
            handle,
            uuid: normalize_uuid_str(uuid.as_ref()),
            service_handle,
            service_uuid: normalize_uuid_str(service_uuid.as_ref()),
            properties,
            descriptors: Vec::new(),
        }
    }
}

impl Characteristic for BasicCharacteristic {
    type Descriptor = BasicDescriptor;

    fn handle(&self) -> u16 {
        self.handle
    }

    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn service_handle(&self) -> u16 {
        self.service_handle
    }

    fn service_uuid(&self) -> &str {
        &self.service_uuid
    }

    fn properties(&self) -> CharPropFlags {
        self.properties
    }

    fn descriptors(&self) -> &[BasicDescriptor] {
        &self.descriptors
    }

    fn add_descriptor(&mut self, descriptor: BasicDescriptor) {
        self.descriptors.push(descriptor);
    }
}

impl Display for BasicCharacteristic {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{} (Handle: {}): {}",
            self.uuid,
            self.handle,
            self.description()
        )
    }
}

/// Stores the properties as the raw declaration byte.
#[cfg(feature = "serde")]
mod properties_bits {
    use crate::api::CharPropFlags;
    use serde_cr::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        properties: &CharPropFlags,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(properties.bits())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<CharPropFlags, D::Error> {
        u8::deserialize(deserializer).map(CharPropFlags::from_bits_retain)
    }
}
