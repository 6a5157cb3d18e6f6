// gatt-topology Source Code File
//
// Copyright 2020 Nonpolynomial Labs LLC. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

use super::characteristic::BasicCharacteristic;
use crate::api::{bleuuid::normalize_uuid_str, Service};

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
pub struct BasicService {
    handle: u16,
    uuid: String,
    characteristics: Vec<BasicCharacteristic>,
}

impl BasicService {
    pub fn new(handle: u16, uuid: impl AsRef<str>) -> Self {
        BasicService {
            handle,
            uuid: normalize_uuid_str(uuid.as_ref()),
            characteristics: Vec::new(),
        }
    }
}

impl Service for BasicService {
    type Characteristic = BasicCharacteristic;

    fn handle(&self) -> u16 {
        self.handle
    }

    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn characteristics(&self) -> &[BasicCharacteristic] {
        &self.characteristics
    }

    fn characteristics_mut(&mut self) -> &mut [BasicCharacteristic] {
        &mut self.characteristics
    }

    fn add_characteristic(&mut self, characteristic: BasicCharacteristic) {
        self.characteristics.push(characteristic);
    }
}

impl Display for BasicService {
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
