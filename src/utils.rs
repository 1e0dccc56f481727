//! Small conversion helpers.

use std::net::Ipv4Addr;

/// Converts the driver's raw address word to an `Ipv4Addr`.
///
/// The service reports the address least-significant octet first, so the
/// first dotted-decimal octet lives in the low byte of the word.
pub(crate) fn ipv4_from_raw(raw: u32) -> Ipv4Addr {
    Ipv4Addr::new(
        (raw & 0xff) as u8,
        ((raw >> 8) & 0xff) as u8,
        ((raw >> 16) & 0xff) as u8,
        ((raw >> 24) & 0xff) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_byte_is_first_octet() {
        assert_eq!(ipv4_from_raw(0x0164_a8c0).to_string(), "192.168.100.1");
    }

    #[test]
    fn all_zero_and_all_one_words() {
        assert_eq!(ipv4_from_raw(0).to_string(), "0.0.0.0");
        assert_eq!(ipv4_from_raw(u32::MAX).to_string(), "255.255.255.255");
    }
}
