//! Standalone demo: opens a window with the color picker, password
//! generator, and number generator.
//!
//! Logs go to `toolbox.log` in the working directory.

use std::fs::File;

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_toolbox::toolbox;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    let log_file = File::create("toolbox.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    floem::Application::new()
        .window(
            move |_| {
                toolbox().on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((760.0, 900.0))
                    .title("floem-toolbox"),
            ),
        )
        .run();
    Ok(())
}
