use std::collections::HashSet;

use crate::command_port::CommandPort;
use crate::indicator::IndicatorPort;
use crate::pad_session::{HolderId, PadNoteSession};
use crate::pad_table;

/*
    Keyboard side of the pad input. Maps raw key-down/key-up through
    the pad table and drives the pad's session with the character
    itself as the holder id, so key-repeat collapses into the session's
    acquire debounce.

    Key-downs are dropped wholesale while a text-entry field has focus:
    typing elsewhere must never trigger pads. Key-ups are still
    processed so a key held across a focus change cannot strand its
    pad in Sounding.
*/

pub struct KeyInputDispatcher {
    held_keys: HashSet<char>,
    text_entry_focused: bool,
}

impl KeyInputDispatcher {
    pub fn new() -> KeyInputDispatcher {
        KeyInputDispatcher {
            held_keys: HashSet::new(),
            text_entry_focused: false,
        }
    }

    pub fn set_text_entry_focus(&mut self, focused: bool) {
        self.text_entry_focused = focused;
    }

    pub fn is_held(&self, key: char) -> bool {
        self.held_keys.contains(&key)
    }

    pub fn key_down(
        &mut self,
        key: char,
        sessions: &mut [PadNoteSession],
        port: &mut dyn CommandPort,
        indicator: &mut dyn IndicatorPort,
    ) {
        if self.text_entry_focused {
            return;
        }

        if let Some(pad) = pad_table::key_to_pad(key) {
            self.held_keys.insert(key);
            sessions[pad as usize].acquire(HolderId::Key(key), port);
            indicator.set_active(pad);
        }
    }

    pub fn key_up(
        &mut self,
        key: char,
        sessions: &mut [PadNoteSession],
        port: &mut dyn CommandPort,
        indicator: &mut dyn IndicatorPort,
    ) {
        if let Some(pad) = pad_table::key_to_pad(key) {
            self.held_keys.remove(&key);
            sessions[pad as usize].release(HolderId::Key(key), port);
            indicator.set_inactive(pad);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_port::recording::{RecordingPort, Sent};
    use crate::indicator::recording::RecordingIndicator;
    use crate::pad_table::PAD_COUNT;

    fn sessions() -> Vec<PadNoteSession> {
        (0..PAD_COUNT).map(|p| PadNoteSession::new(p as u8)).collect()
    }

    #[test]
    fn key_repeat_sounds_once() {
        let mut dispatcher = KeyInputDispatcher::new();
        let mut sessions = sessions();
        let mut port = RecordingPort::new();
        let mut indicator = RecordingIndicator::new();

        dispatcher.key_down('e', &mut sessions, &mut port, &mut indicator);
        dispatcher.key_down('e', &mut sessions, &mut port, &mut indicator);
        dispatcher.key_up('e', &mut sessions, &mut port, &mut indicator);

        assert_eq!(port.sent, vec![Sent::PlayMidiNote(68), Sent::StopMidiNote]);
        assert!(!dispatcher.is_held('e'));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut dispatcher = KeyInputDispatcher::new();
        let mut sessions = sessions();
        let mut port = RecordingPort::new();
        let mut indicator = RecordingIndicator::new();

        dispatcher.key_down('z', &mut sessions, &mut port, &mut indicator);
        dispatcher.key_up('z', &mut sessions, &mut port, &mut indicator);

        assert!(port.sent.is_empty());
        assert!(indicator.toggles.is_empty());
    }

    #[test]
    fn text_entry_focus_suppresses_key_down() {
        let mut dispatcher = KeyInputDispatcher::new();
        let mut sessions = sessions();
        let mut port = RecordingPort::new();
        let mut indicator = RecordingIndicator::new();

        dispatcher.set_text_entry_focus(true);
        dispatcher.key_down('e', &mut sessions, &mut port, &mut indicator);

        assert!(port.sent.is_empty());
        assert!(!dispatcher.is_held('e'));

        dispatcher.set_text_entry_focus(false);
        dispatcher.key_down('e', &mut sessions, &mut port, &mut indicator);
        assert!(dispatcher.is_held('e'));
    }

    #[test]
    fn key_up_still_releases_during_text_entry() {
        let mut dispatcher = KeyInputDispatcher::new();
        let mut sessions = sessions();
        let mut port = RecordingPort::new();
        let mut indicator = RecordingIndicator::new();

        dispatcher.key_down('d', &mut sessions, &mut port, &mut indicator);
        dispatcher.set_text_entry_focus(true);
        dispatcher.key_up('d', &mut sessions, &mut port, &mut indicator);

        assert_eq!(port.sent, vec![Sent::PlayMidiNote(72), Sent::StopMidiNote]);
        assert!(!sessions[8].sounding());
    }

    #[test]
    fn indicator_follows_key_state() {
        let mut dispatcher = KeyInputDispatcher::new();
        let mut sessions = sessions();
        let mut port = RecordingPort::new();
        let mut indicator = RecordingIndicator::new();

        dispatcher.key_down('3', &mut sessions, &mut port, &mut indicator);
        dispatcher.key_up('3', &mut sessions, &mut port, &mut indicator);

        assert_eq!(indicator.toggles, vec![(0, true), (0, false)]);
    }
}
