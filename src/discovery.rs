// gatt-topology Source Code File
//
// Copyright 2020 Nonpolynomial Labs LLC. All rights reserved.
//
// Licensed under the BSD 3-Clause license. See LICENSE file in the project root
// for full license information.

//! Drives a platform [`Discovery`] adapter and collects what it finds.

use log::{debug, trace};

use crate::api::{Discovery, DiscoveryOptions, Service};
use crate::collection::ServiceCollection;
use crate::{Error, Result};

/// Walks the attribute table through `adapter` and returns the populated collection.
///
/// Services are added before their characteristics and characteristics before their
/// descriptors. Attributes with a handle that was already seen are skipped (a skipped service
/// takes its characteristics with it). Adapter errors and broken parent references abort the
/// whole run; there is no partial result.
pub async fn discover<D: Discovery>(
    adapter: &D,
    options: &DiscoveryOptions,
) -> Result<ServiceCollection<D::Service>> {
    match options.timeout {
        Some(timeout) => tokio::time::timeout(timeout, populate(adapter, options))
            .await
            .map_err(|_| Error::TimedOut(timeout))?,
        None => populate(adapter, options).await,
    }
}

async fn populate<D: Discovery>(
    adapter: &D,
    options: &DiscoveryOptions,
) -> Result<ServiceCollection<D::Service>> {
    let mut collection = ServiceCollection::new();
    let mut skipped = 0;

    for service in adapter.services().await? {
        if !options.wants_service(service.uuid()) {
            trace!(
                "Ignoring service {} ({}), not in filter",
                service.handle(),
                service.uuid()
            );
            continue;
        }

        let characteristics = adapter.characteristics(&service).await?;
        if !collection.add_service(service).is_inserted() {
            skipped += 1 + characteristics.len();
            continue;
        }

        for characteristic in characteristics {
            let descriptors = if options.skip_descriptors {
                Vec::new()
            } else {
                adapter.descriptors(&characteristic).await?
            };
            if !collection.add_characteristic(characteristic)?.is_inserted() {
                skipped += 1 + descriptors.len();
                continue;
            }
            for descriptor in descriptors {
                if !collection.add_descriptor(descriptor)?.is_inserted() {
                    skipped += 1;
                }
            }
        }
    }

    debug!(
        "Discovered {} services, {} characteristics, {} descriptors ({} duplicates skipped)",
        collection.len(),
        collection.characteristics().count(),
        collection.descriptors().count(),
        skipped
    );
    Ok(collection)
}
