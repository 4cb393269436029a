use rosc::{OscMessage, OscPacket, OscType};

use crate::envelope::EnvelopeParam;

/*
    Constructors for the outbound command vocabulary. Addresses mirror
    the engine's handler names one to one.

    Note: /stop_midi_note carries no note argument. The engine is
    single-voice and tracks the most recent note itself; if it ever
    goes polyphonic this message needs the note number added.
*/

pub fn play_midi_note(midi_value: i32) -> OscPacket {
    OscPacket::Message(OscMessage {
        addr: "/play_midi_note".to_string(),
        args: vec![OscType::Int(midi_value)],
    })
}

pub fn stop_midi_note() -> OscPacket {
    OscPacket::Message(OscMessage {
        addr: "/stop_midi_note".to_string(),
        args: vec![],
    })
}

pub fn set_envelope(param: EnvelopeParam, value: f32) -> OscPacket {
    let addr = match param {
        EnvelopeParam::Attack => "/set_attack",
        EnvelopeParam::Decay => "/set_decay",
        EnvelopeParam::Sustain => "/set_sustain",
        EnvelopeParam::Release => "/set_release",
    };

    OscPacket::Message(OscMessage {
        addr: addr.to_string(),
        args: vec![OscType::Float(value)],
    })
}

pub fn set_waveform(label: &str) -> OscPacket {
    OscPacket::Message(OscMessage {
        addr: "/set_waveform".to_string(),
        args: vec![OscType::String(label.to_string())],
    })
}
