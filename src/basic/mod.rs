// gatt-topology Source Code File
//
// Copyright 2020 Nonpolynomial Labs LLC. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Plain-value implementations of the [`api`](crate::api) attribute traits.
//!
//! Adapters whose stack hands out nothing richer than handles, UUIDs and property bits can build
//! these directly. UUIDs are normalized on construction, so `"2A19"` and the full lower-case
//! form end up identical.

mod characteristic;
mod descriptor;
mod service;

pub use characteristic::BasicCharacteristic;
pub use descriptor::BasicDescriptor;
pub use service::BasicService;

use crate::api::{Characteristic, Descriptor, Service};
use crate::ServiceCollection;
use static_assertions::assert_impl_all;
use std::fmt::{Debug, Display};

// Ensure that the exported types implement all the expected traits.
assert_impl_all!(BasicService: Service, Clone, Debug, Display, Send, Sized, Sync);
assert_impl_all!(BasicCharacteristic: Characteristic, Clone, Debug, Display, Send, Sized, Sync);
assert_impl_all!(BasicDescriptor: Descriptor, Clone, Debug, Display, Send, Sized, Sync);
assert_impl_all!(ServiceCollection<BasicService>: Clone, Debug, Default, Display, Send, Sync);
