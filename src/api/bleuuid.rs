//! Utilities for dealing with BLE UUIDs, converting to and from their short formats.
//!
//! Lookups accept UUIDs as strings in any case, either as the 4 character 16-bit short form
//! (`"180f"`) or the full 128-bit form. [`normalize_uuid_str`] brings both into the canonical
//! lower-case 128-bit form before anything is compared.

use uuid::Uuid;

const BLUETOOTH_BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805f9b34fb;
const BLUETOOTH_BASE_MASK: u128 = 0x00000000_ffff_ffff_ffff_ffffffffffff;
const BLUETOOTH_BASE_MASK_16: u128 = 0xffff0000_ffff_ffff_ffff_ffffffffffff;

/// Everything after the short UUID in the string form of the Bluetooth Base UUID.
const BLUETOOTH_BASE_SUFFIX: &str = "-0000-1000-8000-00805f9b34fb";

/// Convert a 32-bit BLE short UUID to a full 128-bit UUID by filling in the standard Bluetooth Base
/// UUID.
pub const fn uuid_from_u32(short: u32) -> Uuid {
    Uuid::from_u128(BLUETOOTH_BASE_UUID | ((short as u128) << 96))
}

/// Convert a 16-bit BLE short UUID to a full 128-bit UUID by filling in the standard Bluetooth Base
/// UUID.
pub const fn uuid_from_u16(short: u16) -> Uuid {
    uuid_from_u32(short as u32)
}

/// Brings a UUID string into the form attributes are compared in.
///
/// A 4 character string is taken to be a 16-bit short UUID and expanded with the Bluetooth Base
/// UUID; anything else is only lower-cased. The input is not validated.
pub fn normalize_uuid_str(uuid: &str) -> String {
    let uuid = uuid.to_ascii_lowercase();
    if uuid.len() == 4 {
        format!("0000{}{}", uuid, BLUETOOTH_BASE_SUFFIX)
    } else {
        uuid
    }
}

/// Renders a 16-bit short UUID in the canonical string form.
pub fn normalize_uuid_16(short: u16) -> String {
    uuid_from_u16(short).to_string()
}

/// Renders a 32-bit short UUID in the canonical string form.
pub fn normalize_uuid_32(short: u32) -> String {
    uuid_from_u32(short).to_string()
}

/// Compares an attribute's UUID against an already normalized one.
pub(crate) fn uuid_matches(candidate: &str, normalized: &str) -> bool {
    candidate.eq_ignore_ascii_case(normalized)
}

/// An extension trait for `Uuid` which provides BLE-specific methods.
pub trait BleUuid {
    /// If the UUID is a valid BLE short UUID then return its short form, otherwise return `None`.
    fn to_ble_u32(&self) -> Option<u32>;

    /// If the UUID is a valid 16-bit BLE short UUID then return its short form, otherwise return
    /// `None`.
    fn to_ble_u16(&self) -> Option<u16>;

    /// Convert the UUID to a string, using short format if applicable.
    fn to_short_string(&self) -> String;
}

impl BleUuid for Uuid {
    fn to_ble_u32(&self) -> Option<u32> {
        let value = self.as_u128();
        if value & BLUETOOTH_BASE_MASK == BLUETOOTH_BASE_UUID {
            Some((value >> 96) as u32)
        } else {
            None
        }
    }

    fn to_ble_u16(&self) -> Option<u16> {
        let value = self.as_u128();
        if value & BLUETOOTH_BASE_MASK_16 == BLUETOOTH_BASE_UUID {
            Some((value >> 96) as u16)
        } else {
            None
        }
    }

    fn to_short_string(&self) -> String {
        if let Some(uuid16) = self.to_ble_u16() {
            format!("{:#04x}", uuid16)
        } else if let Some(uuid32) = self.to_ble_u32() {
            format!("{:#06x}", uuid32)
        } else {
            self.to_string()
        }
    }
}
