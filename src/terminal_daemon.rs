use std::sync::{Arc, Mutex};
use std::time::Duration;

use notcurses::*;
use ringbuf::storage::Heap;
use ringbuf::traits::{Consumer, Producer};
use ringbuf::wrap::caching::Caching;
use ringbuf::SharedRb;

use crate::envelope::EnvelopeParam;
use crate::indicator::IndicatorPort;
use crate::pad_table;
use crate::surface_event::SurfaceEvent;
use crate::waveform::Waveform;

/*
    Terminal frontend. Reads notcurses key and mouse events, turns them
    into SurfaceEvents for the dispatch loop, and prints whatever
    feedback the dispatch loop pipes back.

    The pad grid is printed in the startup banner; mouse hits are
    resolved against its fixed position, so a click on a printed key
    cell behaves like a pointer press on that pad.
*/

pub type EventProducer = Caching<Arc<SharedRb<Heap<SurfaceEvent>>>, true, false>;
pub type UiProducer = Caching<Arc<SharedRb<Heap<UiUpdate>>>, true, false>;
pub type UiConsumer = Caching<Arc<SharedRb<Heap<UiUpdate>>>, false, true>;

pub enum UiUpdate {
    Pad { pad: u8, active: bool },
    Text(String),
}

// Grid geometry inside the banner, see the putstrln below
const GRID_X: i32 = 0;
const GRID_Y: i32 = 2;
const CELL_W: i32 = 3;
const CELL_H: i32 = 1;

const PARAM_UP_KEYS: [(char, EnvelopeParam); 4] = [
    ('q', EnvelopeParam::Attack),
    ('w', EnvelopeParam::Decay),
    ('o', EnvelopeParam::Sustain),
    ('p', EnvelopeParam::Release),
];

const PARAM_DOWN_KEYS: [(char, EnvelopeParam); 4] = [
    ('a', EnvelopeParam::Attack),
    ('s', EnvelopeParam::Decay),
    ('k', EnvelopeParam::Sustain),
    ('l', EnvelopeParam::Release),
];

const WAVEFORM_KEYS: [(char, Waveform); 4] = [
    ('1', Waveform::Sine),
    ('2', Waveform::Square),
    ('7', Waveform::Sawtooth),
    ('8', Waveform::Triangle),
];

// Pushes pad highlight changes from the dispatch loop back into the
// terminal's update pipe.
pub struct PipeIndicator {
    ui: Arc<Mutex<UiProducer>>,
}

impl PipeIndicator {
    pub fn new(ui: Arc<Mutex<UiProducer>>) -> PipeIndicator {
        PipeIndicator { ui }
    }

    fn push(&mut self, pad: u8, active: bool) {
        if let Ok(mut ui) = self.ui.lock() {
            ui.try_push(UiUpdate::Pad { pad, active })
                .unwrap_or_else(|_| {});
        }
    }
}

impl IndicatorPort for PipeIndicator {
    fn set_active(&mut self, pad: u8) {
        self.push(pad, true);
    }

    fn set_inactive(&mut self, pad: u8) {
        self.push(pad, false);
    }
}

pub struct TerminalDaemon {
    events: EventProducer,
    ui: UiConsumer,
    text_entry: bool,
    pressed_pad: Option<u8>,
}

impl TerminalDaemon {
    pub fn new(events: EventProducer, ui: UiConsumer) -> TerminalDaemon {
        TerminalDaemon {
            events,
            ui,
            text_entry: false,
            pressed_pad: None,
        }
    }

    pub fn begin(mut self) -> NotcursesResult<()> {
        let mut nc = Notcurses::new()?;
        nc.mice_enable(MiceEvents::All)?;

        let mut plane = Plane::new(&mut nc)?;
        plane.set_scrolling(true);

        putstrln!(+render plane,
            "pad-keys-backend\n\
             \n \
             3  4  5  6\n \
             e  r  t  y\n \
             d  f  g  h\n \
             c  v  b  n\n\
             \n\
             pads: hold a mapped key or click a cell above\n\
             envelope: q/a attack, w/s decay, o/k sustain, p/l release\n\
             waveform: 1 sine, 2 square, 7 saw, 8 triangle\n\
             tab toggles text-entry mode, F1 quits\n"
        )?;

        loop {
            while let Some(update) = self.ui.try_pop() {
                let line = match update {
                    UiUpdate::Pad { pad, active } => {
                        format!("pad {} {}", pad, if active { "on" } else { "off" })
                    }
                    UiUpdate::Text(text) => text,
                };
                putstrln!(+render plane, "{}", line)?;
            }

            let event = nc.poll_event()?;

            if !event.received() {
                std::thread::sleep(Duration::from_millis(1));
                continue;
            }

            self.handle_pad_keys(&event);
            self.handle_control_keys(&event, &mut plane)?;
            self.handle_mouse(&event);

            if event.is_key(Key::F01) {
                break;
            }
        }

        Ok(())
    }

    fn push(&mut self, event: SurfaceEvent) {
        self.events.try_push(event).unwrap_or_else(|_| {});
    }

    fn handle_pad_keys(&mut self, event: &Event) {
        for key in pad_table::PAD_KEYS {
            // Repeats are forwarded on purpose: the dispatcher's
            // debounce is what absorbs them
            if event.is_char(key) && (event.is_press() || event.is_repeat()) {
                self.push(SurfaceEvent::KeyDown(key));
            }

            if event.is_char(key) && event.is_release() {
                self.push(SurfaceEvent::KeyUp(key));
            }
        }
    }

    fn handle_control_keys(&mut self, event: &Event, plane: &mut Plane) -> NotcursesResult<()> {
        if !event.is_press() {
            return Ok(());
        }

        for (key, param) in PARAM_UP_KEYS {
            if event.is_char(key) {
                self.push(SurfaceEvent::EnvelopeAdjust { param, steps: 1 });
            }
        }

        for (key, param) in PARAM_DOWN_KEYS {
            if event.is_char(key) {
                self.push(SurfaceEvent::EnvelopeAdjust { param, steps: -1 });
            }
        }

        for (key, waveform) in WAVEFORM_KEYS {
            if event.is_char(key) {
                self.push(SurfaceEvent::WaveformSelect(waveform.label().to_string()));
            }
        }

        if event.is_key(Key::Tab) {
            self.text_entry = !self.text_entry;
            self.push(SurfaceEvent::TextEntryFocus(self.text_entry));
            putstrln!(+render plane,
                "text-entry mode {}",
                if self.text_entry { "on (pad keys suppressed)" } else { "off" }
            )?;
        }

        Ok(())
    }

    fn handle_mouse(&mut self, event: &Event) {
        if !event.is_key(Key::Button1) {
            return;
        }

        if event.is_press() {
            if let Some(pad) = hit_test(event) {
                self.pressed_pad = Some(pad);
                self.push(SurfaceEvent::PadPress(pad));
            }
        } else if event.is_release() {
            if let Some(pad) = self.pressed_pad.take() {
                self.push(SurfaceEvent::PadRelease(pad));
            }
        }
    }
}

fn hit_test(event: &Event) -> Option<u8> {
    let position = event.cell?;

    let col = (position.x() - GRID_X) / CELL_W;
    let row = (position.y() - GRID_Y) / CELL_H;

    if (0..4).contains(&col) && (0..4).contains(&row) {
        Some((row * 4 + col) as u8)
    } else {
        None
    }
}
