extern crate dotenv;

extern crate savings_challenge_registration;

use std::env;
use std::fs;
use std::process;

use dotenv::dotenv;

use savings_challenge_registration::client::HttpClient;
use savings_challenge_registration::config::Config;
use savings_challenge_registration::logger::get_logger;
use savings_challenge_registration::request::RegistrationDraft;
use savings_challenge_registration::service::Registrar;
use savings_challenge_registration::wizard::{RegistrationWizard, WizardError};

fn get_env() -> String {
    match env::var("ENV") {
        Ok(ref v) if v == &"test".to_string() => String::from("testing"),
        Ok(v) => v.to_lowercase(),
        Err(_) => String::from("development"),
    }
}

fn load_draft(path: &str) -> Result<RegistrationDraft, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path, e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {}", path, e))
}

fn run(path: &str) -> Result<(), String> {
    let name = get_env();
    let config = Config::from(name.as_str())?;
    let logger = get_logger(&config).map_err(|e| e.to_string())?;

    let draft = load_draft(path)?;
    let client = HttpClient::new(&config).map_err(|e| e.to_string())?;
    let registrar = Registrar::new(&client, &logger);

    let mut wizard =
        RegistrationWizard::new(config.registration_surface, &logger);
    for (field, value) in serde_json::to_value(&draft)
        .map_err(|e| e.to_string())?
        .as_object()
        .into_iter()
        .flatten()
    {
        if let Some(v) = value.as_str() {
            wizard.set_field(field, v).map_err(|e| e.to_string())?;
        }
    }

    while !wizard.step().is_last() {
        let step = wizard.step();
        if let Err(WizardError::Invalid(errors)) = wizard.advance() {
            eprintln!("Step {}:", step);
            for e in errors {
                eprintln!("  {}: {}", e.field, e.messages.join(", "));
            }
            return Err(format!("Step {} is invalid", step));
        }
    }

    let submitted = wizard.submit(&registrar).map(|_| ());
    match submitted {
        Ok(()) => {
            if let Some(confirmation) = wizard.confirmation() {
                println!("{}", confirmation);
            }
            wizard.dismiss_confirmation().map_err(|e| e.to_string())
        },
        Err(WizardError::Invalid(errors)) => {
            for e in errors {
                eprintln!("  {}: {}", e.field, e.messages.join(", "));
            }
            Err("The registration is invalid".to_string())
        },
        Err(e) => {
            match wizard.take_notification() {
                Some(n) => Err(n.message),
                None => Err(e.to_string()),
            }
        },
    }
}

fn main() {
    dotenv().ok();

    let path = match env::args().nth(1) {
        Some(v) => v,
        None => {
            eprintln!("usage: savings-challenge-register <draft.json>");
            process::exit(2);
        },
    };

    if let Err(e) = run(&path) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
