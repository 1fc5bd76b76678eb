use std::env;

use crate::model::surface::Surface;

#[derive(Clone, Debug)]
pub struct Config {
    pub env_name: &'static str,
    pub registration_api_url: String,
    pub registration_surface: Surface,
}

impl Config {
    pub const DEFAULT_TEST_REGISTRATION_API_URL: &'static str =
        "http://127.0.0.1:3000/api/auth/register";

    pub fn from(config_name: &str) -> Result<Config, String> {
        match config_name {
            "production" => Config::production_config(),
            "testing" => Config::testing_config(),
            "development" => Config::development_config(),
            _ => Err(format!("Invalid config_name: '{}'", &config_name)),
        }
    }

    fn production_config() -> Result<Config, String> {
        Ok(Config {
            env_name: "production",
            registration_api_url: require("REGISTRATION_API_URL")?,
            registration_surface: surface("REGISTRATION_SURFACE")?,
        })
    }

    fn testing_config() -> Result<Config, String> {
        let registration_api_url = env::var("TEST_REGISTRATION_API_URL")
            .unwrap_or_else(|_| {
                Self::DEFAULT_TEST_REGISTRATION_API_URL.to_string()
            });

        Ok(Config {
            env_name: "testing",
            registration_api_url,
            registration_surface: surface("TEST_REGISTRATION_SURFACE")?,
        })
    }

    fn development_config() -> Result<Config, String> {
        Ok(Config {
            env_name: "development",
            registration_api_url: require("REGISTRATION_API_URL")?,
            registration_surface: surface("REGISTRATION_SURFACE")?,
        })
    }
}

fn require(key: &str) -> Result<String, String> {
    match env::var(key) {
        Ok(ref v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(format!("{} is not set", key)),
    }
}

// modal is the default surface if nothing is given
fn surface(key: &str) -> Result<Surface, String> {
    match env::var(key) {
        Ok(v) => v.parse::<Surface>(),
        Err(_) => Ok(Surface::Modal),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::collections::HashMap;
    use std::panic::{self, AssertUnwindSafe};

    use parking_lot::Mutex;

    use crate::hashmap;

    fn with<T>(keys: &'static str, test: T)
    where T: FnOnce() + panic::UnwindSafe {
        lazy_static! {
            static ref ENV_LOCK: Mutex<()> = Mutex::new(());
            static ref TESTS: HashMap<&'static str, &'static str> = hashmap! {
                "REGISTRATION_API_URL" =>
                    "https://api.example.org/api/auth/register",
                "REGISTRATION_SURFACE" => "page",

                "TEST_REGISTRATION_API_URL" =>
                    "http://127.0.0.1:8080/api/auth/register",
                "TEST_REGISTRATION_SURFACE" => "modal"
            };
        }

        let _lock = ENV_LOCK.lock();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut origins: HashMap<&str, Result<String, env::VarError>> =
                HashMap::new();

            for (key, var) in TESTS.iter() {
                origins.insert(key, env::var(key));

                if !keys.split('\n').any(|x| &x == key) {
                    env::remove_var(key);
                } else {
                    env::set_var(key, var);
                }
            }

            test();

            for (key, origin) in origins {
                match origin {
                    Ok(v) => env::set_var(key, v),
                    Err(_) => env::remove_var(key),
                }
            }
        }));
        assert!(result.is_ok());
    }

    #[test]
    fn test_from_unknown_without_env_vars() {
        let c = Config::from("unknown");
        assert!(c.is_err());
    }

    rusty_fork_test! {
        #[test]
        fn test_from_production_without_valid_env_vars() {
            with(r#"
TEST_REGISTRATION_API_URL
TEST_REGISTRATION_SURFACE
"#, || {
                let c = Config::from("production");
                assert_eq!(
                    Err("REGISTRATION_API_URL is not set".to_string()),
                    c.map(|c| c.registration_api_url)
                );
            })
        }
    }

    rusty_fork_test! {
        #[test]
        fn test_from_development_without_valid_env_vars() {
            with(r#"
TEST_REGISTRATION_API_URL
"#, || {
                let c = Config::from("development");
                assert!(c.is_err());
            })
        }
    }

    rusty_fork_test! {
        #[test]
        fn test_from_testing_without_env_vars() {
            with("", || {
                let c = Config::from("testing").unwrap();
                assert_eq!("testing", c.env_name);
                assert_eq!(
                    Config::DEFAULT_TEST_REGISTRATION_API_URL,
                    c.registration_api_url
                );
                assert_eq!(Surface::Modal, c.registration_surface);
            })
        }
    }

    rusty_fork_test! {
        #[test]
        fn test_from_production() {
            with(r#"
REGISTRATION_API_URL
REGISTRATION_SURFACE
"#, || {
                let c = Config::from("production").unwrap();
                assert_eq!("production", c.env_name);
                assert_eq!(
                    "https://api.example.org/api/auth/register",
                    c.registration_api_url
                );
                assert_eq!(Surface::Page, c.registration_surface);
            })
        }
    }

    rusty_fork_test! {
        #[test]
        fn test_from_development_with_default_surface() {
            with(r#"
REGISTRATION_API_URL
"#, || {
                let c = Config::from("development").unwrap();
                assert_eq!("development", c.env_name);
                assert_eq!(Surface::Modal, c.registration_surface);
            })
        }
    }

    rusty_fork_test! {
        #[test]
        fn test_from_testing() {
            with(r#"
TEST_REGISTRATION_API_URL
TEST_REGISTRATION_SURFACE
"#, || {
                let c = Config::from("testing").unwrap();
                assert_eq!(
                    "http://127.0.0.1:8080/api/auth/register",
                    c.registration_api_url
                );
                assert_eq!(Surface::Modal, c.registration_surface);
            })
        }
    }
}
