use std::thread;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use c8_core::{Interpreter, Rom};
use c8_display::Display;

use crate::keymap::keymap;
use crate::Args;

pub fn run(args: &Args, rom: &Rom) -> Result<()> {
    let config = args.config();
    let mut interpreter = match args.seed {
        Some(seed) => Interpreter::seeded(config, seed),
        None => Interpreter::with_config(config),
    };
    interpreter
        .load_program(rom.bytes())
        .context("unable to load ROM")?;
    let keys = interpreter.key_sender();

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display = Display::new(&sdl, args.scale)?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    let cycle_time = config.cycle_interval();
    let mut last_cycle = Instant::now();
    let mut cycles: u64 = 0;

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
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(kc) = keymap(key) {
                        keys.press(kc);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        keys.release(kc);
                    }
                }
                _ => continue,
            }
        }

        // Update state
        let cycle = interpreter
            .execute_cycle()
            .with_context(|| format!("halted after {} cycles", cycles))?;
        cycles += 1;
        if cycle.beep {
            log::info!("beep at cycle {}", cycles);
        }

        if let Some(frame) = interpreter.take_frame() {
            display.render(&frame)?;
        }

        // Handle timing
        let elapsed_cycle_time = last_cycle.elapsed();
        if cycle_time > elapsed_cycle_time {
            thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    log::debug!("stopped after {} cycles", cycles);
    Ok(())
}
