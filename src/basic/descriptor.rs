// gatt-topology Source Code File
//
// Copyright 2020 Nonpolynomial Labs LLC. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

use crate::api::{bleuuid::normalize_uuid_str, Descriptor};

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
pub struct BasicDescriptor {
    handle: u16,
    uuid: String,
    characteristic_handle: u16,
    characteristic_uuid: String,
}

impl BasicDescriptor {
    pub fn new(
        handle: u16,
        uuid: impl AsRef<str>,
        characteristic_handle: u16,
        characteristic_uuid: impl AsRef<str>,
    ) -> Self {
        BasicDescriptor {
            handle,
            uuid: normalize_uuid_str(uuid.as_ref()),
            characteristic_handle,
            characteristic_uuid: normalize_uuid_str(characteristic_uuid.as_ref()),
        }
    }
}

impl Descriptor for BasicDescriptor {
    fn handle(&self) -> u16 {
        self.handle
    }

    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn characteristic_handle(&self) -> u16 {
        self.characteristic_handle
    }

    fn characteristic_uuid(&self) -> &str {
        &self.characteristic_uuid
    }
}

impl Display for BasicDescriptor {
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
