// protostage: clickable-prototype player for the terminal

mod parser;
mod prototype;
mod session;
mod ui;

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("protostage");
        eprintln!("Error: No prototype file provided");
        eprintln!();
        eprintln!("Usage: {} <file.stage>", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!(
            "  {} demos/tour.stage          # Play the bundled tour",
            program_name
        );
        eprintln!(
            "  {} myprototype.stage         # Play your own prototype",
            program_name
        );
        eprintln!();
        eprintln!("Inside the player: click triggers to switch frames,");
        eprintln!("double-tap any key to reveal them, Escape to reset, Ctrl+Q to quit.");
        std::process::exit(1);
    }

    let stage_file = &args[1];

    if !Path::new(stage_file).exists() {
        eprintln!("Error: File '{}' not found", stage_file);
        eprintln!(
            "Usage: {} [file.stage]",
            args.get(0).map(|s| s.as_str()).unwrap_or("protostage")
        );
        std::process::exit(1);
    }

    // Read the declaration source
    let source = fs::read_to_string(stage_file)?;

    // Parse it into a prototype document
    eprintln!("Parsing {}...", stage_file);
    let prototype = match parser::parse(&source) {
        Ok(prototype) => prototype,
        Err(e) => {
            eprintln!("Parser error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "Parsed successfully. Found {} frame(s), starting at '{}'.",
        prototype.frames().len(),
        prototype.initial()
    );

    // Set up terminal; mouse capture makes triggers clickable
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(prototype);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
