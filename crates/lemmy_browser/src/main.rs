use std::process::ExitCode;

use lemmy_browser::config::BrowserConfig;
use lemmy_browser::context::NavigationContext;
use lemmy_browser::gateway::LemmyGateway;
use lemmy_browser::navigator::{Navigator, Outcome};
use lemmy_tui::logging::init_from_env;
use lemmy_tui::{EnvConfig, ProcessTerminal, TerminalMenu};
use log::{error, info};

fn main() -> ExitCode {
    let env = EnvConfig::from_env();
    if let Err(err) = init_from_env(&env) {
        eprintln!("lemmy-browser: cannot open log file: {err}");
        return ExitCode::from(1);
    }

    let config = match BrowserConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("lemmy-browser: {err}");
            return ExitCode::from(1);
        }
    };
    let gateway = match LemmyGateway::new(config.api_config()) {
        Ok(gateway) => gateway,
        Err(err) => {
            eprintln!("lemmy-browser: {err}");
            return ExitCode::from(1);
        }
    };
    let context = match NavigationContext::new(config.communities.clone(), config.start.root_kind())
    {
        Ok(context) => context,
        Err(err) => {
            eprintln!("lemmy-browser: {err}");
            return ExitCode::from(1);
        }
    };
    info!(
        "starting at {} against {}",
        context.root(),
        gateway.client().api_base()
    );

    let menu = TerminalMenu::new(ProcessTerminal::new()).with_preview_rows(env.preview_rows);
    let mut navigator = Navigator::new(context, gateway, menu);
    let result = navigator.run();

    let (_, _, mut menu) = navigator.into_parts();
    if let Err(err) = menu.close() {
        error!("failed to restore terminal: {err}");
    }

    match result {
        Ok(outcome) => {
            match &outcome {
                Outcome::Closed => info!("session closed"),
                Outcome::RootFailure(err) => eprintln!("lemmy-browser: {err}"),
            }
            ExitCode::from(outcome.exit_code())
        }
        Err(err) => {
            error!("{err}");
            eprintln!("lemmy-browser: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
