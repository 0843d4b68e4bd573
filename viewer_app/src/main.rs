//! Demo viewer application
//!
//! Opens a window through the shell, builds a small raw-OpenGL renderer
//! once the context is current, and runs the event loop until quit. Any
//! setup failure is fatal: the error is logged to stderr and the process
//! exits with a failure status.

mod gl_renderer;

use gl_renderer::GlRenderer;
use gl_shell::{Config, Shell, ShellConfig};

/// Optional configuration file, read when present. There are no CLI flags.
const CONFIG_PATH: &str = "shell.toml";

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting GL shell viewer");

    let config = if std::path::Path::new(CONFIG_PATH).exists() {
        match ShellConfig::load_from_file(CONFIG_PATH) {
            Ok(config) => {
                log::info!("Loaded configuration from {CONFIG_PATH}");
                config
            }
            Err(e) => fatal("Unable to load configuration", &e),
        }
    } else {
        ShellConfig::default()
    };

    // Setup order is fixed: window and context first, renderer second
    let mut shell = match Shell::new(&config) {
        Ok(shell) => shell,
        Err(e) => fatal("Unable to initialize the application shell", &e),
    };

    let (width, height) = shell.framebuffer_size();
    let mut renderer = GlRenderer::new(|name| shell.get_proc_address(name), width, height);

    match shell.run(&mut renderer) {
        Ok(()) => log::info!("Clean exit"),
        Err(e) => fatal("Main loop failed", &e),
    }
}

/// Log the message and the underlying platform error, then exit non-zero.
fn fatal(message: &str, error: &dyn std::error::Error) -> ! {
    log::error!("{message}");
    log::error!("{error}");
    std::process::exit(1);
}
