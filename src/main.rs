//! The CLI interface for displayctl
//!
//! Run without a subcommand for the interactive menu, or use the
//! subcommands for scripting. Use the `--help` flag to see the available
//! options.
use structopt::StructOpt;

/// CLI arguments
#[derive(StructOpt, Debug)]
#[structopt(
    name = "displayctl",
    about = "Manage monitor layouts and HDR signaling on Windows."
)]
struct Opts {
    /// Subcommand to run; omit for the interactive menu
    #[structopt(subcommand)]
    cmd: Option<SubCommands>,
    /// Output debug info
    #[structopt(short, long, global = true)]
    verbose: bool,
}

/// Subcommands to select the mode of operation
#[derive(StructOpt, Debug)]
enum SubCommands {
    /// Lists the active monitors
    #[structopt(alias = "ls")]
    List,
    /// Tiles the desktop across all monitors, left to right
    Extend,
    /// Mirrors the primary monitor's settings onto all others
    Clone,
    /// Keeps only the selected monitor active
    Activate {
        /// 1-based monitor number in the active-monitor listing
        #[structopt(short, long)]
        id: u32,
    },
    /// Toggles HDR signaling on an external output
    Hdr {
        /// 1-based output number in the external-output listing
        #[structopt(short, long)]
        id: u32,
        /// Disable HDR instead of enabling it
        #[structopt(short, long)]
        disable: bool,
    },
    /// Lists the external outputs eligible for HDR
    Outputs,
}

/// Entry point for `displayctl`.
fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    let log_level = if opts.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level.as_str()))
        .init();

    log::debug!("Parsed Opts:\n{:#?}", opts);

    run(opts)
}

#[cfg(not(target_os = "windows"))]
fn run(_opts: Opts) -> color_eyre::eyre::Result<()> {
    eprintln!("displayctl only supports Windows");
    std::process::exit(1)
}

#[cfg(target_os = "windows")]
fn run(opts: Opts) -> color_eyre::eyre::Result<()> {
    use displayctl::Layout;

    match opts.cmd {
        Some(SubCommands::List) => app::show_monitors(),
        Some(SubCommands::Extend) => app::run_layout(Layout::Extend),
        Some(SubCommands::Clone) => app::run_layout(Layout::Clone),
        Some(SubCommands::Activate { id }) => app::activate(id),
        Some(SubCommands::Hdr { id, disable }) => app::toggle_hdr(id, !disable),
        Some(SubCommands::Outputs) => app::show_outputs(),
        None => app::menu_loop(),
    }
}

#[cfg(target_os = "windows")]
mod app {
    use std::fmt;
    use std::io::{self, Write};
    use std::str::FromStr;

    use color_eyre::eyre::{Result, eyre};
    use displayctl::{
        ActiveOrdinal, Layout, MenuChoice, OutputOrdinal, activate_only, apply_layout,
        query_monitors, query_outputs, set_hdr,
    };

    /// Runs the interactive menu until the user exits.
    ///
    /// Malformed input is reported and re-prompted; a failed operation is
    /// reported and control returns to the menu. Only "exit" terminates.
    pub fn menu_loop() -> Result<()> {
        loop {
            println!();
            println!("=== Monitor Management ===");
            println!("1. Show monitor information");
            println!("2. Extend displays");
            println!("3. Clone displays");
            println!("4. Activate a single monitor");
            println!("5. Toggle HDR");
            println!("6. Exit");
            println!();

            let choice: MenuChoice = match prompt("Select an option: ")?.parse() {
                Ok(choice) => choice,
                Err(e) => {
                    println!("Please enter a valid number: {}", e);
                    continue;
                }
            };

            let result = match choice {
                MenuChoice::ShowMonitors => show_monitors(),
                MenuChoice::Extend => run_layout(Layout::Extend),
                MenuChoice::Clone => run_layout(Layout::Clone),
                MenuChoice::ActivateOne => activate_interactive(),
                MenuChoice::ToggleHdr => toggle_hdr_interactive(),
                MenuChoice::Exit => return Ok(()),
            };

            if let Err(e) = result {
                println!("Error: {:#}", e);
            }
        }
    }

    pub fn show_monitors() -> Result<()> {
        let set = query_monitors()?;
        println!("Monitors detected: {}", set.len());

        for (i, monitor) in set.monitors().enumerate() {
            println!();
            println!("Monitor {}:", i + 1);
            println!("  Name: {}", monitor.device_name);
            println!("  Description: {}", monitor.display_name);
            println!("  Primary: {}", monitor.is_primary);
            println!("  Active: {}", monitor.is_active);
        }

        Ok(())
    }

    pub fn run_layout(layout: Layout) -> Result<()> {
        apply_layout(layout)?;
        println!("Monitors configured in {} mode", layout);
        Ok(())
    }

    pub fn activate(id: u32) -> Result<()> {
        let ordinal = ActiveOrdinal::new(id).ok_or_else(|| eyre!("Monitor numbers start at 1"))?;
        activate_only(ordinal)?;
        println!("Monitor {} is now the only active monitor", ordinal);
        Ok(())
    }

    pub fn toggle_hdr(id: u32, enable: bool) -> Result<()> {
        let ordinal = OutputOrdinal::new(id).ok_or_else(|| eyre!("Output numbers start at 1"))?;
        set_hdr(ordinal, enable)?;
        println!(
            "HDR {} for output {}",
            if enable { "enabled" } else { "disabled" },
            ordinal
        );
        Ok(())
    }

    pub fn show_outputs() -> Result<()> {
        let outputs = query_outputs()?;
        if outputs.is_empty() {
            println!("No external outputs found");
            return Ok(());
        }

        for output in &outputs {
            println!("{}", output);
        }

        Ok(())
    }

    fn activate_interactive() -> Result<()> {
        let set = query_monitors()?;
        if set.is_empty() {
            println!("No monitors detected");
            return Ok(());
        }

        println!("Monitors available: {}", set.len());
        for (i, monitor) in set.monitors().enumerate() {
            println!("{}: {}", i + 1, monitor.display_name);
        }

        let ordinal: ActiveOrdinal = prompt_parse("Enter the number of the monitor to activate: ")?;
        activate_only(ordinal)?;
        println!("Monitor {} is now the only active monitor", ordinal);
        Ok(())
    }

    fn toggle_hdr_interactive() -> Result<()> {
        // the HDR numbering counts only external outputs, so list that
        // domain rather than the active-monitor listing
        let outputs = query_outputs()?;
        if outputs.is_empty() {
            println!("No external outputs found");
            return Ok(());
        }

        println!("Outputs available:");
        for output in &outputs {
            println!("{}", output);
        }

        let ordinal: OutputOrdinal = prompt_parse("Enter the number of the output to toggle: ")?;
        let enable = prompt_yes_no("Enable HDR? (y/n): ")?;

        set_hdr(ordinal, enable)?;
        println!(
            "HDR {} for output {}",
            if enable { "enabled" } else { "disabled" },
            ordinal
        );
        Ok(())
    }

    fn prompt(message: &str) -> Result<String> {
        print!("{}", message);
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Prompts until the input parses
    fn prompt_parse<T>(message: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        loop {
            match prompt(message)?.parse() {
                Ok(value) => return Ok(value),
                Err(e) => println!("Please enter a valid number: {}", e),
            }
        }
    }

    /// Prompts until the input is a recognizable yes or no
    fn prompt_yes_no(message: &str) -> Result<bool> {
        loop {
            match prompt(message)?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                other => println!("Please answer y or n, got: {}", other),
            }
        }
    }
}
