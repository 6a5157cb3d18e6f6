//! Human readable names for well-known GATT UUIDs.
//!
//! Covers the Bluetooth SIG assigned numbers for the common services, characteristics and
//! descriptors, plus a few widely deployed vendor UUIDs. Anything else describes as
//! [`UNKNOWN`].

use uuid::Uuid;

use crate::api::bleuuid::{normalize_uuid_str, BleUuid};

/// Returned by [`description`] for UUIDs that aren't in the table.
pub const UNKNOWN: &str = "Unknown";

/// Vendor specific 128-bit UUIDs, keyed by their canonical lower-case form.
const VENDOR_UUIDS: &[(&str, &str)] = &[
    (
        "6e400001-b5a3-f393-e0a9-e50e24dcca9e",
        "Nordic UART Service",
    ),
    ("6e400002-b5a3-f393-e0a9-e50e24dcca9e", "Nordic UART RX"),
    ("6e400003-b5a3-f393-e0a9-e50e24dcca9e", "Nordic UART TX"),
    (
        "8d53dc1d-1db7-4cd3-868b-8a527460aa84",
        "SMP Service",
    ),
    (
        "da2e7828-fbce-4e01-ae9e-261174997c48",
        "SMP Characteristic",
    ),
];

/// Looks up the name of a UUID given in either short or full form, in any case.
pub fn description(uuid: &str) -> &'static str {
    let uuid = normalize_uuid_str(uuid);
    if let Some(name) = Uuid::parse_str(&uuid)
        .ok()
        .and_then(|uuid| uuid.to_ble_u16())
        .and_then(assigned_number_name)
    {
        return name;
    }
    VENDOR_UUIDS
        .iter()
        .find(|(vendor_uuid, _)| *vendor_uuid == uuid)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN)
}

/// Name of a 16-bit UUID from the Bluetooth SIG assigned numbers.
pub fn assigned_number_name(uuid: u16) -> Option<&'static str> {
    let name = match uuid {
        // Services
        0x1800 => "Generic Access Profile",
        0x1801 => "Generic Attribute Profile",
        0x1802 => "Immediate Alert",
        0x1803 => "Link Loss",
        0x1804 => "Tx Power",
        0x1805 => "Current Time Service",
        0x1806 => "Reference Time Update Service",
        0x1807 => "Next DST Change Service",
        0x1808 => "Glucose",
        0x1809 => "Health Thermometer",
        0x180a => "Device Information",
        0x180d => "Heart Rate",
        0x180e => "Phone Alert Status Service",
        0x180f => "Battery Service",
        0x1810 => "Blood Pressure",
        0x1811 => "Alert Notification Service",
        0x1812 => "Human Interface Device",
        0x1813 => "Scan Parameters",
        0x1814 => "Running Speed and Cadence",
        0x1815 => "Automation IO",
        0x1816 => "Cycling Speed and Cadence",
        0x1818 => "Cycling Power",
        0x1819 => "Location and Navigation",
        0x181a => "Environmental Sensing",
        0x181b => "Body Composition",
        0x181c => "User Data",
        0x181d => "Weight Scale",
        0x181e => "Bond Management Service",
        0x181f => "Continuous Glucose Monitoring",
        0x1820 => "Internet Protocol Support Service",
        0x1821 => "Indoor Positioning",
        0x1822 => "Pulse Oximeter Service",
        0x1823 => "HTTP Proxy",
        0x1824 => "Transport Discovery",
        0x1825 => "Object Transfer Service",
        0x1826 => "Fitness Machine",
        0x1827 => "Mesh Provisioning Service",
        0x1828 => "Mesh Proxy Service",

        // Descriptors
        0x2900 => "Characteristic Extended Properties",
        0x2901 => "Characteristic User Description",
        0x2902 => "Client Characteristic Configuration",
        0x2903 => "Server Characteristic Configuration",
        0x2904 => "Characteristic Presentation Format",
        0x2905 => "Characteristic Aggregate Format",
        0x2906 => "Valid Range",
        0x2907 => "External Report Reference",
        0x2908 => "Report Reference",
        0x290b => "Environmental Sensing Configuration",
        0x290c => "Environmental Sensing Measurement",
        0x290d => "Environmental Sensing Trigger Setting",

        // Characteristics
        0x2a00 => "Device Name",
        0x2a01 => "Appearance",
        0x2a02 => "Peripheral Privacy Flag",
        0x2a03 => "Reconnection Address",
        0x2a04 => "Peripheral Preferred Connection Parameters",
        0x2a05 => "Service Changed",
        0x2a06 => "Alert Level",
        0x2a07 => "Tx Power Level",
        0x2a08 => "Date Time",
        0x2a19 => "Battery Level",
        0x2a1c => "Temperature Measurement",
        0x2a1d => "Temperature Type",
        0x2a23 => "System ID",
        0x2a24 => "Model Number String",
        0x2a25 => "Serial Number String",
        0x2a26 => "Firmware Revision String",
        0x2a27 => "Hardware Revision String",
        0x2a28 => "Software Revision String",
        0x2a29 => "Manufacturer Name String",
        0x2a2a => "IEEE 11073-20601 Regulatory Cert. Data List",
        0x2a2b => "Current Time",
        0x2a37 => "Heart Rate Measurement",
        0x2a38 => "Body Sensor Location",
        0x2a39 => "Heart Rate Control Point",
        0x2a4a => "HID Information",
        0x2a4b => "Report Map",
        0x2a4c => "HID Control Point",
        0x2a4d => "Report",
        0x2a4e => "Protocol Mode",
        0x2a50 => "PnP ID",
        0x2a6e => "Temperature",
        0x2a6f => "Humidity",
        0x2aa6 => "Central Address Resolution",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_full_forms_describe_the_same() {
        assert_eq!(description("180a"), "Device Information");
        assert_eq!(
            description("0000180A-0000-1000-8000-00805F9B34FB"),
            "Device Information"
        );
        assert_eq!(description("2902"), "Client Characteristic Configuration");
    }

    #[test]
    fn vendor_uuids() {
        assert_eq!(
            description("6E400001-B5A3-F393-E0A9-E50E24DCCA9E"),
            "Nordic UART Service"
        );
    }

    #[test]
    fn unknown_uuids() {
        assert_eq!(description("ffff"), UNKNOWN);
        assert_eq!(description("12345678-9abc-def0-1234-56789abcdef0"), UNKNOWN);
        assert_eq!(description("garbage"), UNKNOWN);
    }
}
