use crate::command_port::CommandPort;
use crate::indicator::IndicatorPort;
use crate::pad_session::{HolderId, PadNoteSession};

/*
    Pointer side of the pad input: mouse-down/touch-start acquires,
    mouse-up/touch-end/mouse-leave releases. All pointer activity on a
    pad shares the single Pointer holder, and the same pad can still be
    held by a key at the same time. A leave that trails an up is
    absorbed by the session's unrecorded-release no-op.

    Pad indices outside the table are dropped silently.
*/

pub struct PointerInputDispatcher;

impl PointerInputDispatcher {
    pub fn new() -> PointerInputDispatcher {
        PointerInputDispatcher
    }

    pub fn press(
        &mut self,
        pad: u8,
        sessions: &mut [PadNoteSession],
        port: &mut dyn CommandPort,
        indicator: &mut dyn IndicatorPort,
    ) {
        if let Some(session) = sessions.get_mut(pad as usize) {
            session.acquire(HolderId::Pointer, port);
            indicator.set_active(pad);
        }
    }

    pub fn release(
        &mut self,
        pad: u8,
        sessions: &mut [PadNoteSession],
        port: &mut dyn CommandPort,
        indicator: &mut dyn IndicatorPort,
    ) {
        if let Some(session) = sessions.get_mut(pad as usize) {
            session.release(HolderId::Pointer, port);
            indicator.set_inactive(pad);
        }
    }

    // mouse-leave behaves like a release, it just may arrive late
    pub fn leave(
        &mut self,
        pad: u8,
        sessions: &mut [PadNoteSession],
        port: &mut dyn CommandPort,
        indicator: &mut dyn IndicatorPort,
    ) {
        self.release(pad, sessions, port, indicator);
    }
}
