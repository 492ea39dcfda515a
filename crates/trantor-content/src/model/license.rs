//! Creative Commons licenses for published media.

/// License attached to a media record, stored as a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum License {
    /// CC0 1.0 public domain dedication.
    #[default]
    Cc0 = 0x00,
    /// Peer Production License, Attribution-NonCommercial-ShareAlike.
    PeerProductionByNcSa = 0x01,
    /// Attribution-NonCommercial-NoDerivs 4.0 International.
    ByNcNd40 = 0x02,
    /// Attribution-NonCommercial-ShareAlike 4.0 International.
    ByNcSa40 = 0x03,
    /// Attribution-NonCommercial 4.0 International.
    ByNc40 = 0x04,
    /// Attribution-ShareAlike 4.0 International.
    BySa40 = 0x05,
    /// Attribution-NoDerivs 4.0 International.
    ByNd40 = 0x06,
    /// Attribution 4.0 International.
    By40 = 0x07,
}

impl License {
    /// Creates a License from its wire representation.
    pub fn from_u8(v: u8) -> Option<License> {
        match v {
            0x00 => Some(License::Cc0),
            0x01 => Some(License::PeerProductionByNcSa),
            0x02 => Some(License::ByNcNd40),
            0x03 => Some(License::ByNcSa40),
            0x04 => Some(License::ByNc40),
            0x05 => Some(License::BySa40),
            0x06 => Some(License::ByNd40),
            0x07 => Some(License::By40),
            _ => None,
        }
    }

    /// Returns the SPDX-style short name.
    pub fn name(&self) -> &'static str {
        match self {
            License::Cc0 => "CC0-1.0",
            License::PeerProductionByNcSa => "PPL-BY-NC-SA",
            License::ByNcNd40 => "CC-BY-NC-ND-4.0",
            License::ByNcSa40 => "CC-BY-NC-SA-4.0",
            License::ByNc40 => "CC-BY-NC-4.0",
            License::BySa40 => "CC-BY-SA-4.0",
            License::ByNd40 => "CC-BY-ND-4.0",
            License::By40 => "CC-BY-4.0",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        for v in 0u8..=7 {
            let license = License::from_u8(v).unwrap();
            assert_eq!(license as u8, v);
        }
        assert_eq!(License::from_u8(0x08), None);
        assert_eq!(License::By40.name(), "CC-BY-4.0");
    }
}
