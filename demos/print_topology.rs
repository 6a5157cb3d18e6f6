use async_trait::async_trait;
use futures::stream::StreamExt;
use gatt_topology::api::{CharPropFlags, Characteristic, Discovery, DiscoveryOptions, Service};
use gatt_topology::basic::{BasicCharacteristic, BasicDescriptor, BasicService};
use gatt_topology::{discover, SessionCache};
use std::time::Duration;

/// Replays the attribute table of a typical heart rate strap.
struct RecordedPeripheral;

const SERVICES: &[(u16, &str)] = &[(1, "1800"), (8, "180d"), (16, "180f")];

const CHARACTERISTICS: &[(u16, &str, u16, &str, u8)] = &[
    (3, "2a00", 1, "1800", 0x02),
    (5, "2a01", 1, "1800", 0x02),
    (10, "2a37", 8, "180d", 0x10),
    (13, "2a38", 8, "180d", 0x02),
    (18, "2a19", 16, "180f", 0x12),
];

const DESCRIPTORS: &[(u16, &str, u16, &str)] =
    &[(11, "2902", 10, "2a37"), (19, "2902", 18, "2a19")];

#[async_trait]
impl Discovery for RecordedPeripheral {
    type Service = BasicService;

    async fn services(&self) -> gatt_topology::Result<Vec<BasicService>> {
        Ok(SERVICES
            .iter()
            .map(|(handle, uuid)| BasicService::new(*handle, uuid))
            .collect())
    }

    async fn characteristics(
        &self,
        service: &BasicService,
    ) -> gatt_topology::Result<Vec<BasicCharacteristic>> {
        Ok(CHARACTERISTICS
            .iter()
            .filter(|(_, _, parent, _, _)| *parent == service.handle())
            .map(|(handle, uuid, parent, parent_uuid, properties)| {
                BasicCharacteristic::new(
                    *handle,
                    uuid,
                    *parent,
                    parent_uuid,
                    CharPropFlags::from_bits_truncate(*properties),
                )
            })
            .collect())
    }

    async fn descriptors(
        &self,
        characteristic: &BasicCharacteristic,
    ) -> gatt_topology::Result<Vec<BasicDescriptor>> {
        Ok(DESCRIPTORS
            .iter()
            .filter(|(_, _, parent, _)| *parent == characteristic.handle())
            .map(|(handle, uuid, parent, parent_uuid)| {
                BasicDescriptor::new(*handle, uuid, *parent, parent_uuid)
            })
            .collect())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cache = SessionCache::new();
    let mut events = cache.events();

    let options = DiscoveryOptions::default().with_timeout(Duration::from_secs(5));
    let collection = discover(&RecordedPeripheral, &options).await?;
    let services = cache.insert("C4:7C:8D:6A:5B:10", collection);
    println!("{:?}", events.next().await);

    print!("{}", services);

    if let Some(battery) = services.get_service("180F")? {
        for characteristic in battery.characteristics() {
            println!(
                "{} properties: {:?}",
                characteristic.description(),
                characteristic.properties()
            );
        }
    }

    match services.get(10u16)? {
        Some(attribute) => println!(
            "Handle 10 is the {} {}",
            attribute.description(),
            attribute.kind()
        ),
        None => println!("Nothing at handle 10"),
    }

    // Disconnected: the whole snapshot goes away.
    cache.invalidate(&"C4:7C:8D:6A:5B:10");
    println!("{:?}", events.next().await);
    Ok(())
}
