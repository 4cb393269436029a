/*
    Visual feedback boundary. The dispatchers flag a pad as active or
    inactive through this port and never touch the renderer, so the
    dispatch core runs headless in tests.
*/

pub trait IndicatorPort {
    fn set_active(&mut self, pad: u8);
    fn set_inactive(&mut self, pad: u8);
}

pub struct NullIndicator;

impl IndicatorPort for NullIndicator {
    fn set_active(&mut self, _pad: u8) {}

    fn set_inactive(&mut self, _pad: u8) {}
}
