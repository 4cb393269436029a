use itertools::Itertools;
use log::warn;

use crate::command_port::CommandPort;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::Triangle,
    ];

    // Labels double as the wire values in /set_waveform
    pub fn label(&self) -> &'static str {
        match self {
            Waveform::Sine => "Sine",
            Waveform::Square => "Square",
            Waveform::Sawtooth => "Sawtooth",
            Waveform::Triangle => "Triangle",
        }
    }

    pub fn from_label(label: &str) -> Option<Waveform> {
        Waveform::ALL.into_iter().find(|w| w.label() == label)
    }
}

/*
    Oscillator shape selection. Exactly one shape is selected at all
    times; an unrecognized label is a configuration error on the
    caller's side and leaves both the selection and the engine alone.
*/

pub struct WaveformSelector {
    selected: Waveform,
}

impl WaveformSelector {
    pub fn new() -> WaveformSelector {
        WaveformSelector {
            selected: Waveform::Sine,
        }
    }

    pub fn selected(&self) -> Waveform {
        self.selected
    }

    pub fn set(&mut self, label: &str, port: &mut dyn CommandPort) -> bool {
        match Waveform::from_label(label) {
            Some(waveform) => {
                self.selected = waveform;
                port.set_waveform(waveform.label());
                true
            }
            None => {
                warn!(
                    "ignoring unknown waveform '{}' (expected one of {})",
                    label,
                    Waveform::ALL.iter().map(|w| w.label()).join(", ")
                );
                false
            }
        }
    }
}
