use clap::Parser;
use sma_quarantine::{
    Cli, Credentials, Result, SmaClient, TimeWindow, cleanup_files, is_quit, prompt_line,
    release_message, report_all,
};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    let username = match &cli.username {
        Some(username) => username.clone(),
        None => prompt_line(&mut input, &mut out, "Username: ")?,
    };
    out.flush()?;
    let password = rpassword::prompt_password("Password: ")?;
    let credentials = Credentials::new(username, password);

    let client = SmaClient::new(&cli.base_url, credentials, &cli.client_options())?;
    let window = TimeWindow::last_hours(cli.window_hours);
    info!(
        "Window {} .. {} across {} appliance(s)",
        window.start_param(),
        window.end_param(),
        cli.appliances.len()
    );

    let summary = report_all(&client, &window, &cli.appliances, &cli.output_dir, &mut out)?;
    info!(
        "{} listed, {} reported, {} body files written",
        summary.listed,
        summary.reported.len(),
        summary.files.len()
    );

    let choice = prompt_line(
        &mut input,
        &mut out,
        "Input the Mail id you want to release or type quit to exit: ",
    )?;

    if is_quit(&choice) {
        cleanup_files(&cli.output_dir, &mut input, &mut out)?;
        writeln!(out, "Goodbye!")?;
        return Ok(());
    }

    if let Err(e) = release_message(&client, &choice, &mut out) {
        warn!("Release request failed: {e}");
        writeln!(out, "Failed to release the email: {e}")?;
    }
    cleanup_files(&cli.output_dir, &mut input, &mut out)?;
    Ok(())
}
