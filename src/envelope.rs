use crate::command_port::CommandPort;

/*
    ADSR parameter store. Raw slider values arrive unclamped; the store
    clamps into the parameter's range, keeps the clamped value, tells
    the engine, and hands back the display string for the UI.

    Construction emits nothing: the engine already boots with these
    defaults, so commands only fire for user changes.
*/

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EnvelopeParam {
    Attack,
    Decay,
    Sustain,
    Release,
}

pub struct ParamSpec {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl EnvelopeParam {
    pub const ALL: [EnvelopeParam; 4] = [
        EnvelopeParam::Attack,
        EnvelopeParam::Decay,
        EnvelopeParam::Sustain,
        EnvelopeParam::Release,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EnvelopeParam::Attack => "attack",
            EnvelopeParam::Decay => "decay",
            EnvelopeParam::Sustain => "sustain",
            EnvelopeParam::Release => "release",
        }
    }

    pub fn spec(&self) -> ParamSpec {
        match self {
            EnvelopeParam::Attack => ParamSpec {
                min: 0.0,
                max: 5.0,
                step: 0.1,
                default: 0.1,
            },
            EnvelopeParam::Decay => ParamSpec {
                min: 0.0,
                max: 5.0,
                step: 0.1,
                default: 0.2,
            },
            EnvelopeParam::Sustain => ParamSpec {
                min: 0.0,
                max: 1.0,
                step: 0.01,
                default: 0.7,
            },
            EnvelopeParam::Release => ParamSpec {
                min: 0.0,
                max: 5.0,
                step: 0.1,
                default: 0.3,
            },
        }
    }
}

pub struct EnvelopeParameterStore {
    attack: f32,
    decay: f32,
    sustain: f32,
    release: f32,
}

impl EnvelopeParameterStore {
    pub fn new() -> EnvelopeParameterStore {
        EnvelopeParameterStore {
            attack: EnvelopeParam::Attack.spec().default,
            decay: EnvelopeParam::Decay.spec().default,
            sustain: EnvelopeParam::Sustain.spec().default,
            release: EnvelopeParam::Release.spec().default,
        }
    }

    pub fn value(&self, param: EnvelopeParam) -> f32 {
        match param {
            EnvelopeParam::Attack => self.attack,
            EnvelopeParam::Decay => self.decay,
            EnvelopeParam::Sustain => self.sustain,
            EnvelopeParam::Release => self.release,
        }
    }

    pub fn set(&mut self, param: EnvelopeParam, raw: f32, port: &mut dyn CommandPort) -> String {
        let spec = param.spec();
        let value = raw.clamp(spec.min, spec.max);

        match param {
            EnvelopeParam::Attack => self.attack = value,
            EnvelopeParam::Decay => self.decay = value,
            EnvelopeParam::Sustain => self.sustain = value,
            EnvelopeParam::Release => self.release = value,
        }

        port.set_envelope(param, value);

        format_value(param, value)
    }

    // Display for the current value without touching the engine,
    // used when first populating the UI.
    pub fn display(&self, param: EnvelopeParam) -> String {
        format_value(param, self.value(param))
    }
}

pub fn format_value(param: EnvelopeParam, value: f32) -> String {
    match param {
        // Sustain is a level, the others are times in seconds
        EnvelopeParam::Sustain => format!("{:.2}", value),
        _ => format!("{:.1}s", value),
    }
}
