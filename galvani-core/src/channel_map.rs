//! Channel map: which physical input serves each sensor channel

use heapless::Vec;

use galvani_protocol::SensorChannel;

use crate::traits::AnalogInput;

/// Association from sensor channel to the physical input wired for it
///
/// Built once at startup and handed to the responder; a board supports a
/// channel by assigning it an input and drops one by leaving it out.
/// Capacity matches the channel vocabulary, so assignment cannot overflow.
#[derive(Debug, Clone, Default)]
pub struct ChannelMap {
    entries: Vec<(SensorChannel, AnalogInput), { SensorChannel::COUNT }>,
}

impl ChannelMap {
    /// Create an empty map (no channels wired)
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Wire `channel` to `input`, replacing any previous assignment
    pub fn assign(&mut self, channel: SensorChannel, input: AnalogInput) {
        if let Some(entry) = self.entries.iter_mut().find(|(c, _)| *c == channel) {
            entry.1 = input;
        } else {
            // One slot per vocabulary entry, so this cannot fail
            let _ = self.entries.push((channel, input));
        }
    }

    /// The input wired for `channel`, if any
    pub fn lookup(&self, channel: SensorChannel) -> Option<AnalogInput> {
        self.entries
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|&(_, input)| input)
    }

    /// Number of wired channels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no channel is wired
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_assigned() {
        let mut map = ChannelMap::new();
        map.assign(SensorChannel::PsmVoltage, AnalogInput::new(0));
        map.assign(SensorChannel::PsmCurrent, AnalogInput::new(1));

        assert_eq!(
            map.lookup(SensorChannel::PsmVoltage),
            Some(AnalogInput::new(0))
        );
        assert_eq!(
            map.lookup(SensorChannel::PsmCurrent),
            Some(AnalogInput::new(1))
        );
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_lookup_unwired() {
        let mut map = ChannelMap::new();
        map.assign(SensorChannel::PsmVoltage, AnalogInput::new(0));

        assert_eq!(map.lookup(SensorChannel::Esc1Current), None);
    }

    #[test]
    fn test_reassign_replaces() {
        let mut map = ChannelMap::new();
        map.assign(SensorChannel::PsmVoltage, AnalogInput::new(0));
        map.assign(SensorChannel::PsmVoltage, AnalogInput::new(3));

        assert_eq!(
            map.lookup(SensorChannel::PsmVoltage),
            Some(AnalogInput::new(3))
        );
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_full_vocabulary_fits() {
        let mut map = ChannelMap::new();
        for (i, channel) in SensorChannel::ALL.into_iter().enumerate() {
            map.assign(channel, AnalogInput::new(i as u8));
        }

        assert_eq!(map.len(), SensorChannel::COUNT);
        for (i, channel) in SensorChannel::ALL.into_iter().enumerate() {
            assert_eq!(map.lookup(channel), Some(AnalogInput::new(i as u8)));
        }
    }

    #[test]
    fn test_empty_map() {
        let map = ChannelMap::new();
        assert!(map.is_empty());
        assert_eq!(map.lookup(SensorChannel::PsmVoltage), None);
    }
}
