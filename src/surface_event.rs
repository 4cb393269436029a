use crate::envelope::EnvelopeParam;

/*
    Raw input events as they arrive from whatever frontend is attached,
    one enum so the whole surface dispatches through a single funnel.
*/

#[derive(PartialEq, Debug)]
pub enum SurfaceEvent {
    KeyDown(char),
    KeyUp(char),
    PadPress(u8),
    PadRelease(u8),
    PadLeave(u8),
    // A slider reporting its new raw (unclamped) value
    EnvelopeSet { param: EnvelopeParam, value: f32 },
    // Stepped adjustment relative to the current value, for frontends
    // without continuous sliders
    EnvelopeAdjust { param: EnvelopeParam, steps: i32 },
    WaveformSelect(String),
    TextEntryFocus(bool),
}
