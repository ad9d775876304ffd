use std::time::{Duration, Instant};

use anyhow::Context;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use tracing::info;

use display::{Beeper, Display};
use emu8::{Interpreter, Signal, CLOCK_SPEED, KEY_COUNT};

use crate::keymap::keymap;
use crate::Args;

pub fn run(args: &Args) -> anyhow::Result<()> {
    let rom = std::fs::read(&args.rom)
        .with_context(|| format!("unable to read ROM {}", args.rom.display()))?;

    let mut interpreter = Interpreter::new();
    interpreter
        .load(&rom)
        .with_context(|| format!("unable to load ROM {}", args.rom.display()))?;
    info!(rom = %args.rom.display(), bytes = rom.len(), "loaded ROM");

    // Get SDL2 context
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let mut display = Display::new(&sdl, args.scale)?;
    let mut beeper = if args.mute {
        None
    } else {
        Some(Beeper::new(&sdl)?)
    };
    let mut events = sdl.event_pump().map_err(anyhow::Error::msg)?;

    // Set initial timing
    let cycle_time = match args.hz {
        Some(hz) => Duration::from_nanos(1_000_000_000 / u64::from(hz.max(1))),
        None => Duration::from_nanos(CLOCK_SPEED),
    };
    let mut last_cycle = Instant::now();

    let mut keys = [false; KEY_COUNT];
    // Whether or not the default clock speed should be respected
    let mut fast_forward = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(Keycode::Backspace),
                    ..
                } => {
                    info!("restarting");
                    interpreter.initialize();
                    interpreter.load(&rom)?;
                    keys = [false; KEY_COUNT];
                }
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(index)) => keys[index] = true,
                    (Keycode::Space, _) => fast_forward = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(index)) => keys[index] = false,
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        interpreter.set_keys(keys);
        if interpreter.step()? == Signal::Beep {
            if let Some(beeper) = beeper.as_mut() {
                beeper.beep();
            }
        }
        if let Some(beeper) = beeper.as_mut() {
            beeper.update();
        }

        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = interpreter.take_frame() {
            display.render(&frame)?;
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    info!("exiting");
    Ok(())
}
