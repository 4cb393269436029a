use crate::command_port::CommandPort;
use crate::envelope::{EnvelopeParam, EnvelopeParameterStore};
use crate::indicator::IndicatorPort;
use crate::key_dispatch::KeyInputDispatcher;
use crate::pad_session::PadNoteSession;
use crate::pad_table::PAD_COUNT;
use crate::pointer_dispatch::PointerInputDispatcher;
use crate::surface_event::SurfaceEvent;
use crate::waveform::{Waveform, WaveformSelector};

/*
    The whole control surface behind one handle() funnel. Owns the
    sixteen pad sessions, both dispatchers, the envelope store and the
    waveform selector; every raw event is routed here synchronously,
    one at a time, which is what serializes each pad's acquire/release
    pairs.

    handle() returns the display feedback a frontend should show, if
    the event produced any. Pad highlighting goes through the injected
    indicator port instead since it is per-pad, not per-event.
*/

#[derive(PartialEq, Debug)]
pub enum Feedback {
    Param { param: EnvelopeParam, text: String },
    Waveform(&'static str),
}

pub struct ControlSurface<C: CommandPort, I: IndicatorPort> {
    sessions: Vec<PadNoteSession>,
    keys: KeyInputDispatcher,
    pointer: PointerInputDispatcher,
    envelope: EnvelopeParameterStore,
    waveform: WaveformSelector,
    port: C,
    indicator: I,
}

impl<C: CommandPort, I: IndicatorPort> ControlSurface<C, I> {
    pub fn new(port: C, indicator: I) -> ControlSurface<C, I> {
        ControlSurface {
            sessions: (0..PAD_COUNT)
                .map(|pad| PadNoteSession::new(pad as u8))
                .collect(),
            keys: KeyInputDispatcher::new(),
            pointer: PointerInputDispatcher::new(),
            envelope: EnvelopeParameterStore::new(),
            waveform: WaveformSelector::new(),
            port,
            indicator,
        }
    }

    // Default displays for first render. Emits no commands: nothing
    // was changed by the user yet.
    pub fn initial_displays(&self) -> Vec<Feedback> {
        let mut displays: Vec<Feedback> = EnvelopeParam::ALL
            .iter()
            .map(|&param| Feedback::Param {
                param,
                text: self.envelope.display(param),
            })
            .collect();

        displays.push(Feedback::Waveform(self.waveform.selected().label()));
        displays
    }

    pub fn handle(&mut self, event: SurfaceEvent) -> Option<Feedback> {
        match event {
            SurfaceEvent::KeyDown(key) => {
                self.keys.key_down(
                    key,
                    &mut self.sessions,
                    &mut self.port,
                    &mut self.indicator,
                );
                None
            }
            SurfaceEvent::KeyUp(key) => {
                self.keys.key_up(
                    key,
                    &mut self.sessions,
                    &mut self.port,
                    &mut self.indicator,
                );
                None
            }
            SurfaceEvent::PadPress(pad) => {
                self.pointer.press(
                    pad,
                    &mut self.sessions,
                    &mut self.port,
                    &mut self.indicator,
                );
                None
            }
            SurfaceEvent::PadRelease(pad) => {
                self.pointer.release(
                    pad,
                    &mut self.sessions,
                    &mut self.port,
                    &mut self.indicator,
                );
                None
            }
            SurfaceEvent::PadLeave(pad) => {
                self.pointer.leave(
                    pad,
                    &mut self.sessions,
                    &mut self.port,
                    &mut self.indicator,
                );
                None
            }
            SurfaceEvent::EnvelopeSet { param, value } => {
                let text = self.envelope.set(param, value, &mut self.port);
                Some(Feedback::Param { param, text })
            }
            SurfaceEvent::EnvelopeAdjust { param, steps } => {
                let raw = self.envelope.value(param) + steps as f32 * param.spec().step;
                let text = self.envelope.set(param, raw, &mut self.port);
                Some(Feedback::Param { param, text })
            }
            SurfaceEvent::WaveformSelect(label) => {
                if self.waveform.set(&label, &mut self.port) {
                    Some(Feedback::Waveform(self.waveform.selected().label()))
                } else {
                    None
                }
            }
            SurfaceEvent::TextEntryFocus(focused) => {
                self.keys.set_text_entry_focus(focused);
                None
            }
        }
    }

    pub fn is_sounding(&self, pad: u8) -> bool {
        self.sessions
            .get(pad as usize)
            .map(|s| s.sounding())
            .unwrap_or(false)
    }

    pub fn is_key_held(&self, key: char) -> bool {
        self.keys.is_held(key)
    }

    pub fn selected_waveform(&self) -> Waveform {
        self.waveform.selected()
    }

    pub fn command_port(&self) -> &C {
        &self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_port::recording::{RecordingPort, Sent};
    use crate::indicator::NullIndicator;

    fn surface() -> ControlSurface<RecordingPort, NullIndicator> {
        ControlSurface::new(RecordingPort::new(), NullIndicator)
    }

    #[test]
    fn repeated_key_down_plays_pad_once() {
        let mut surface = surface();

        // 'e' is pad 4, note 68; the second down is a key-repeat
        surface.handle(SurfaceEvent::KeyDown('e'));
        surface.handle(SurfaceEvent::KeyDown('e'));
        surface.handle(SurfaceEvent::KeyUp('e'));

        assert_eq!(
            surface.command_port().sent,
            vec![Sent::PlayMidiNote(68), Sent::StopMidiNote]
        );
    }

    #[test]
    fn pointer_and_key_share_a_pad() {
        let mut surface = surface();

        surface.handle(SurfaceEvent::KeyDown('3'));
        surface.handle(SurfaceEvent::PadPress(0));
        surface.handle(SurfaceEvent::PadRelease(0));

        // Key still holds the pad, so no note-off yet
        assert!(surface.is_sounding(0));

        surface.handle(SurfaceEvent::KeyUp('3'));
        assert!(!surface.is_sounding(0));

        assert_eq!(
            surface.command_port().sent,
            vec![Sent::PlayMidiNote(64), Sent::StopMidiNote]
        );
    }

    #[test]
    fn trailing_pointer_leave_is_absorbed() {
        let mut surface = surface();

        surface.handle(SurfaceEvent::PadPress(5));
        surface.handle(SurfaceEvent::PadRelease(5));
        // Some devices fire a leave after the up already released
        surface.handle(SurfaceEvent::PadLeave(5));

        assert_eq!(
            surface.command_port().sent,
            vec![Sent::PlayMidiNote(69), Sent::StopMidiNote]
        );
    }

    #[test]
    fn sustain_slider_clamps_and_reports() {
        let mut surface = surface();

        let feedback = surface.handle(SurfaceEvent::EnvelopeSet {
            param: EnvelopeParam::Sustain,
            value: 1.5,
        });

        assert_eq!(
            feedback,
            Some(Feedback::Param {
                param: EnvelopeParam::Sustain,
                text: "1.00".to_string(),
            })
        );
        assert_eq!(
            surface.command_port().sent,
            vec![Sent::SetEnvelope(EnvelopeParam::Sustain, 1.0)]
        );
    }

    #[test]
    fn text_entry_swallows_pad_keys() {
        let mut surface = surface();

        surface.handle(SurfaceEvent::TextEntryFocus(true));
        surface.handle(SurfaceEvent::KeyDown('e'));

        assert!(surface.command_port().sent.is_empty());
        assert!(!surface.is_key_held('e'));
    }

    #[test]
    fn envelope_adjust_steps_from_current_value() {
        let mut surface = surface();

        // attack defaults to 0.1 with step 0.1
        let feedback = surface.handle(SurfaceEvent::EnvelopeAdjust {
            param: EnvelopeParam::Attack,
            steps: 2,
        });

        assert_eq!(
            feedback,
            Some(Feedback::Param {
                param: EnvelopeParam::Attack,
                text: "0.3s".to_string(),
            })
        );

        // Stepping far below min clamps at the bottom
        surface.handle(SurfaceEvent::EnvelopeAdjust {
            param: EnvelopeParam::Attack,
            steps: -100,
        });

        match surface.command_port().sent.last() {
            Some(Sent::SetEnvelope(EnvelopeParam::Attack, value)) => {
                assert_eq!(*value, 0.0)
            }
            other => panic!("expected an attack update, got {:?}", other),
        }
    }

    #[test]
    fn bogus_waveform_produces_no_feedback_or_command() {
        let mut surface = surface();

        surface.handle(SurfaceEvent::WaveformSelect("Sine".to_string()));
        let feedback = surface.handle(SurfaceEvent::WaveformSelect("Bogus".to_string()));

        assert_eq!(feedback, None);
        assert_eq!(surface.selected_waveform(), Waveform::Sine);
        assert_eq!(
            surface.command_port().sent,
            vec![Sent::SetWaveform("Sine".to_string())]
        );
    }

    #[test]
    fn initial_displays_emit_no_commands() {
        let surface = surface();

        let displays = surface.initial_displays();

        assert_eq!(displays.len(), 5);
        assert!(displays.contains(&Feedback::Waveform("Sine")));
        assert!(surface.command_port().sent.is_empty());
    }
}
