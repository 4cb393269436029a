use std::net::{SocketAddrV4, UdpSocket};
use std::time::Duration;

use log::warn;
use rosc::encoder;
use rosc::OscPacket;
use thiserror::Error;

use crate::command_model;
use crate::envelope::EnvelopeParam;

/*
    Outbound boundary to the audio engine. Everything the surface
    ever says to the engine goes through this capability set, so
    tests can swap in a recording fake and the dispatch core never
    touches a socket directly.

    Delivery is fire-and-forget: a failed send is logged and dropped,
    and never rolls back the pad state that triggered it.
*/

pub trait CommandPort {
    fn play_midi_note(&mut self, midi_value: i32);
    fn stop_midi_note(&mut self);
    fn set_envelope(&mut self, param: EnvelopeParam, value: f32);
    fn set_waveform(&mut self, label: &str);
}

#[derive(Debug, Error)]
pub enum CommandPortError {
    #[error("failed to set up command socket: {0}")]
    Socket(#[from] std::io::Error),
}

pub struct OscCommandPort {
    socket: UdpSocket,
    target_addr: SocketAddrV4,
}

impl OscCommandPort {
    pub fn new(
        local_addr: SocketAddrV4,
        target_addr: SocketAddrV4,
    ) -> Result<OscCommandPort, CommandPortError> {
        let socket = UdpSocket::bind(local_addr)?;
        socket.set_nonblocking(true)?;
        socket.set_write_timeout(Some(Duration::from_millis(1)))?;

        Ok(OscCommandPort {
            socket,
            target_addr,
        })
    }

    fn send(&mut self, packet: OscPacket) {
        match encoder::encode(&packet) {
            Ok(msg_buf) => {
                if let Err(err) = self.socket.send_to(&msg_buf, self.target_addr) {
                    warn!("command send failed: {}", err);
                }
            }
            Err(err) => warn!("could not encode command: {:?}", err),
        }
    }
}

impl CommandPort for OscCommandPort {
    fn play_midi_note(&mut self, midi_value: i32) {
        self.send(command_model::play_midi_note(midi_value));
    }

    fn stop_midi_note(&mut self) {
        self.send(command_model::stop_midi_note());
    }

    fn set_envelope(&mut self, param: EnvelopeParam, value: f32) {
        self.send(command_model::set_envelope(param, value));
    }

    fn set_waveform(&mut self, label: &str) {
        self.send(command_model::set_waveform(label));
    }
}

#[cfg(test)]
pub mod recording {
    use super::CommandPort;
    use crate::envelope::EnvelopeParam;

    #[derive(Debug, PartialEq, Clone)]
    pub enum Sent {
        PlayMidiNote(i32),
        StopMidiNote,
        SetEnvelope(EnvelopeParam, f32),
        SetWaveform(String),
    }

    pub struct RecordingPort {
        pub sent: Vec<Sent>,
    }

    impl RecordingPort {
        pub fn new() -> RecordingPort {
            RecordingPort { sent: Vec::new() }
        }
    }

    impl CommandPort for RecordingPort {
        fn play_midi_note(&mut self, midi_value: i32) {
            self.sent.push(Sent::PlayMidiNote(midi_value));
        }

        fn stop_midi_note(&mut self) {
            self.sent.push(Sent::StopMidiNote);
        }

        fn set_envelope(&mut self, param: EnvelopeParam, value: f32) {
            self.sent.push(Sent::SetEnvelope(param, value));
        }

        fn set_waveform(&mut self, label: &str) {
            self.sent.push(Sent::SetWaveform(label.to_string()));
        }
    }
}
