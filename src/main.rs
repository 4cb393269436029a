use std::error::Error;
use std::net::SocketAddrV4;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::thread;
use std::thread::sleep;
use std::time::Duration;

use ringbuf::traits::{Consumer, Producer, Split};
use ringbuf::HeapRb;

use crate::command_port::OscCommandPort;
use crate::surface::{ControlSurface, Feedback};
use crate::surface_event::SurfaceEvent;
use crate::terminal_daemon::{PipeIndicator, TerminalDaemon, UiProducer, UiUpdate};

mod command_model;
mod command_port;
mod envelope;
mod indicator;
mod key_dispatch;
mod pad_session;
mod pad_table;
mod pointer_dispatch;
mod surface;
mod surface_event;
mod terminal_daemon;
mod waveform;

// TODO: make the ports configurable
const LOCAL_ADDR: &str = "127.0.0.1:15459";
const ENGINE_ADDR: &str = "127.0.0.1:13331";

fn main() {
    env_logger::init();

    match run() {
        Ok(_) => (),
        Err(err) => println!("Error: {}", err),
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    // Terminal -> dispatch: raw input events
    let (event_pub, mut event_sub) = HeapRb::<SurfaceEvent>::new(100).split();

    // Dispatch -> terminal: pad highlights and display strings. The
    // producer end is shared between the indicator port and the
    // feedback pushes in the dispatch loop.
    let (ui_pub, ui_sub) = HeapRb::<UiUpdate>::new(100).split();
    let ui_pub = Arc::new(Mutex::new(ui_pub));

    let port = OscCommandPort::new(
        SocketAddrV4::from_str(LOCAL_ADDR)?,
        SocketAddrV4::from_str(ENGINE_ADDR)?,
    )?;

    let indicator = PipeIndicator::new(ui_pub.clone());
    let mut surface = ControlSurface::new(port, indicator);

    // Show the defaults before any input arrives
    for feedback in surface.initial_displays() {
        push_feedback(&ui_pub, feedback);
    }

    let loop_ui_pub = ui_pub.clone();

    // Dispatch loop
    thread::spawn(move || loop {
        while let Some(event) = event_sub.try_pop() {
            if let Some(feedback) = surface.handle(event) {
                push_feedback(&loop_ui_pub, feedback);
            }
        }

        sleep(Duration::from_nanos(500000));
    });

    TerminalDaemon::new(event_pub, ui_sub).begin()?;

    Ok(())
}

fn push_feedback(ui: &Arc<Mutex<UiProducer>>, feedback: Feedback) {
    let line = match feedback {
        Feedback::Param { param, text } => format!("{} {}", param.name(), text),
        Feedback::Waveform(label) => format!("waveform {}", label),
    };

    if let Ok(mut producer) = ui.lock() {
        producer.try_push(UiUpdate::Text(line)).unwrap_or_else(|_| {});
    }
}
