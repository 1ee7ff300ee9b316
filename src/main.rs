use anyhow::{Context, anyhow};
use shoplist::bot;
use shoplist::core::cli::CliArgs;
use shoplist::core::context::AppContext;
use shoplist::core::types::RunMode;
use shoplist::logging::LogTarget;
use shoplist::prompter::flows::desk_flow::DeskFlow;
use shoplist::prompter::prompter::Prompter;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Secrets may come from a .env next to the binary's working directory.
    dotenvy::dotenv().ok();

    let args = CliArgs::from_env().map_err(|msg| anyhow!(msg))?;
    let mut ctx = AppContext::new_with_paths(args.config_path.clone(), args.logs_dir.clone())
        .with_context(|| format!("Could not start with config '{}'", args.config_path.display()))?;

    let outcome = match args.mode {
        RunMode::Desk => Prompter::new().run(DeskFlow::new(&mut ctx)),
        RunMode::Bot => bot::run(&mut ctx),
    };
    if let Err(err) = outcome {
        ctx.logger
            .error(format!("{err}"), LogTarget::FileOnly);
        return Err(err).with_context(|| format!("{} mode stopped", args.mode));
    }
    Ok(())
}
