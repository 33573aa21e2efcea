//! Sensor channel vocabulary shared by the bridge and the host

/// A sensor channel the host can select for sampling
///
/// The wire value doubles as the selector byte the host writes. The
/// vocabulary is the full four-channel set; boards without the ESC taps
/// simply leave those channels unwired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorChannel {
    /// Power-sense module voltage output
    PsmVoltage,
    /// Power-sense module current output
    PsmCurrent,
    /// ESC 1 current tap
    Esc1Current,
    /// ESC 2 current tap
    Esc2Current,
}

// Wire format values
const CHANNEL_PSM_VOLTAGE: u8 = 0;
const CHANNEL_PSM_CURRENT: u8 = 1;
const CHANNEL_ESC1_CURRENT: u8 = 2;
const CHANNEL_ESC2_CURRENT: u8 = 3;

impl SensorChannel {
    /// Number of channels in the vocabulary
    pub const COUNT: usize = 4;

    /// All channels, in wire-value order
    pub const ALL: [SensorChannel; Self::COUNT] = [
        SensorChannel::PsmVoltage,
        SensorChannel::PsmCurrent,
        SensorChannel::Esc1Current,
        SensorChannel::Esc2Current,
    ];

    /// Parse a channel from its selector byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CHANNEL_PSM_VOLTAGE => Some(SensorChannel::PsmVoltage),
            CHANNEL_PSM_CURRENT => Some(SensorChannel::PsmCurrent),
            CHANNEL_ESC1_CURRENT => Some(SensorChannel::Esc1Current),
            CHANNEL_ESC2_CURRENT => Some(SensorChannel::Esc2Current),
            _ => None,
        }
    }

    /// Convert to the selector byte
    pub fn to_byte(self) -> u8 {
        match self {
            SensorChannel::PsmVoltage => CHANNEL_PSM_VOLTAGE,
            SensorChannel::PsmCurrent => CHANNEL_PSM_CURRENT,
            SensorChannel::Esc1Current => CHANNEL_ESC1_CURRENT,
            SensorChannel::Esc2Current => CHANNEL_ESC2_CURRENT,
        }
    }

    /// Returns true if this channel belongs to the power-sense module
    pub fn is_psm(&self) -> bool {
        matches!(self, SensorChannel::PsmVoltage | SensorChannel::PsmCurrent)
    }

    /// Returns true if this channel is an ESC current tap
    pub fn is_esc(&self) -> bool {
        matches!(self, SensorChannel::Esc1Current | SensorChannel::Esc2Current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_roundtrip() {
        for channel in SensorChannel::ALL {
            let byte = channel.to_byte();
            let parsed = SensorChannel::from_byte(byte).unwrap();
            assert_eq!(channel, parsed);
        }
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(SensorChannel::PsmVoltage.to_byte(), 0);
        assert_eq!(SensorChannel::PsmCurrent.to_byte(), 1);
        assert_eq!(SensorChannel::Esc1Current.to_byte(), 2);
        assert_eq!(SensorChannel::Esc2Current.to_byte(), 3);
    }

    #[test]
    fn test_unknown_selector() {
        assert!(SensorChannel::from_byte(4).is_none());
        assert!(SensorChannel::from_byte(5).is_none());
        assert!(SensorChannel::from_byte(0xFF).is_none());
    }

    #[test]
    fn test_is_psm() {
        assert!(SensorChannel::PsmVoltage.is_psm());
        assert!(SensorChannel::PsmCurrent.is_psm());
        assert!(!SensorChannel::Esc1Current.is_psm());
    }

    #[test]
    fn test_is_esc() {
        assert!(SensorChannel::Esc1Current.is_esc());
        assert!(SensorChannel::Esc2Current.is_esc());
        assert!(!SensorChannel::PsmVoltage.is_esc());
    }
}
