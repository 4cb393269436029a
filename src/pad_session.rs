use crate::command_port::CommandPort;
use crate::pad_table;

/*
    Per-pad note state machine.

    A pad sounds while at least one holder is pressing it. A holder is
    one input source: a specific keyboard character, or the pointer.
    Exactly one note-on crosses the engine boundary when the first
    holder arrives and exactly one note-off when the last one leaves,
    no matter how many raw events the input device produced in between.

    Re-acquiring with a holder that is already recorded is a no-op,
    which is what absorbs key-repeat. Releasing a holder that was never
    recorded is also a no-op, which is what absorbs a pointer-leave
    arriving after the pointer-up already released.
*/

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HolderId {
    Key(char),
    Pointer,
}

#[derive(PartialEq, Debug)]
pub enum Transition {
    NoteOn,
    NoteOff,
    None,
}

pub struct PadNoteSession {
    pad: u8,
    holders: Vec<HolderId>,
}

impl PadNoteSession {
    pub fn new(pad: u8) -> PadNoteSession {
        PadNoteSession {
            pad,
            holders: Vec::new(),
        }
    }

    pub fn sounding(&self) -> bool {
        !self.holders.is_empty()
    }

    pub fn acquire(&mut self, holder: HolderId, port: &mut dyn CommandPort) -> Transition {
        if self.holders.contains(&holder) {
            return Transition::None;
        }

        self.holders.push(holder);

        if self.holders.len() == 1 {
            port.play_midi_note(pad_table::pad_to_note(self.pad) as i32);
            return Transition::NoteOn;
        }

        Transition::None
    }

    pub fn release(&mut self, holder: HolderId, port: &mut dyn CommandPort) -> Transition {
        match self.holders.iter().position(|&h| h == holder) {
            Some(index) => {
                self.holders.remove(index);

                if self.holders.is_empty() {
                    port.stop_midi_note();
                    return Transition::NoteOff;
                }

                Transition::None
            }
            None => Transition::None,
        }
    }
}
