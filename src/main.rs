//! Signon CLI - interactive register/login/logout loop.
//!
//! The text surface mirrors the controller's state: while
//! unauthenticated it accepts `register` and `login`; once a session
//! exists it shows the authenticated email and accepts `logout`. The
//! status line always reflects the latest completed operation.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use signon::adapters::{ConsoleNotifier, RestIdentityProvider, RestProviderConfig};
use signon::application::AuthSessionController;
use signon::config::AppConfig;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("configuration error: {err}");
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let provider_config = RestProviderConfig::new(config.provider.api_key())
        .with_base_url(config.provider.base_url.clone())
        .with_timeout(config.provider.timeout());
    let provider = Arc::new(RestIdentityProvider::new(provider_config));
    let notifier = Arc::new(ConsoleNotifier::new());
    let mut controller = AuthSessionController::new(provider, notifier);

    println!("signon - commands: register <email> <password> | login <email> <password> | logout | status | quit");

    let stdin = io::stdin();
    loop {
        print_prompt(&controller);
        let Some(Ok(line)) = stdin.lock().lines().next() else {
            break;
        };
        let mut words = line.split_whitespace();
        match words.next() {
            Some("register") => {
                set_inputs(&mut controller, words.next(), words.next());
                let _ = controller.register().await;
            }
            Some("login") => {
                set_inputs(&mut controller, words.next(), words.next());
                let _ = controller.login().await;
            }
            Some("logout") => {
                let _ = controller.logout().await;
            }
            Some("status") => match controller.session() {
                Some(session) => println!("authenticated as {}", session.email()),
                None => println!("not authenticated"),
            },
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }
        if let Some(status) = controller.status_message() {
            println!("status: {status}");
        }
    }
}

fn print_prompt(controller: &AuthSessionController) {
    match controller.session() {
        Some(session) => print!("[{}]> ", session.email()),
        None => print!("> "),
    }
    let _ = io::stdout().flush();
}

fn set_inputs(controller: &mut AuthSessionController, email: Option<&str>, password: Option<&str>) {
    controller.set_email(email.unwrap_or_default());
    controller.set_password(password.unwrap_or_default());
}
