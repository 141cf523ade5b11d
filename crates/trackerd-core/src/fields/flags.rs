use super::bits;

pub const MODE_MASK: u8 = 0xC0;
pub const MODE_SHIFT: u8 = 6;
pub const LED_BIT: u8 = 5;
pub const MOVEMENT_BIT: u8 = 4;
pub const BACKGROUND_BIT: u8 = 3;

/// Status byte carried at the end of most uplinks.
///
/// Bits 7..6 hold the working mode, bit 5 the LED state, bit 4 movement and
/// bit 3 the background (timestamped) upload flag. Bits 2..0 are unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFlags(pub u8);

impl StatusFlags {
    /// Mode shifted down to `0..=3`.
    pub fn mode(self) -> u8 {
        bits::field(self.0, MODE_MASK, MODE_SHIFT)
    }

    /// Mode bits left in place (`0`, `64`, `128` or `192`).
    pub fn mode_unshifted(self) -> u8 {
        self.0 & MODE_MASK
    }

    pub fn led_on(self) -> bool {
        bits::bit(self.0, LED_BIT)
    }

    pub fn moving(self) -> bool {
        bits::bit(self.0, MOVEMENT_BIT)
    }

    pub fn background(self) -> bool {
        bits::bit(self.0, BACKGROUND_BIT)
    }

    pub fn led_label(self) -> &'static str {
        if self.led_on() { "ON" } else { "OFF" }
    }

    pub fn movement_label(self) -> &'static str {
        if self.moving() { "MOVE" } else { "STILL" }
    }
}
