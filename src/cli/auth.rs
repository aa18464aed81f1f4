use serde_json::json;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::TasklyError;
use crate::output;
use crate::session::{SessionStatus, SessionStore};

pub fn run_signup(
    email: &str,
    name: &str,
    password: &str,
    json_output: bool,
    api_url: Option<&str>,
) -> i32 {
    let result = (|| -> Result<_, TasklyError> {
        let config = Config::resolve(api_url)?;
        let mut store = SessionStore::open(&config)?;
        // Registration carries no bearer, even when a stale token exists.
        let api = ApiClient::new(&config.api_url, None);
        store.signup(&api, email, password, name)
    })();

    match result {
        Ok(user) => {
            if json_output {
                print_envelope(output::json::success(json!({
                    "user": output::json::user_json(&user)
                })));
            } else {
                println!("Signed up as {} <{}>", user.name, user.email);
            }
            0
        }
        Err(e) => fail(&e, json_output),
    }
}

pub fn run_login(email: &str, password: &str, json_output: bool, api_url: Option<&str>) -> i32 {
    let result = (|| -> Result<_, TasklyError> {
        let config = Config::resolve(api_url)?;
        let mut store = SessionStore::open(&config)?;
        let api = ApiClient::new(&config.api_url, None);
        store.login(&api, email, password)
    })();

    match result {
        Ok(user) => {
            if json_output {
                print_envelope(output::json::success(json!({
                    "user": output::json::user_json(&user)
                })));
            } else {
                println!("Logged in as {} <{}>", user.name, user.email);
            }
            0
        }
        Err(e) => fail(&e, json_output),
    }
}

pub fn run_logout(json_output: bool, api_url: Option<&str>) -> i32 {
    let result = (|| -> Result<_, TasklyError> {
        let config = Config::resolve(api_url)?;
        let mut store = SessionStore::open(&config)?;
        store.logout()?;
        Ok(store.current())
    })();

    match result {
        Ok(session) => {
            if json_output {
                print_envelope(output::json::success(
                    output::json::session_json(&session),
                ));
            } else {
                println!("Logged out.");
            }
            0
        }
        Err(e) => fail(&e, json_output),
    }
}

pub fn run_whoami(json_output: bool, api_url: Option<&str>) -> i32 {
    let result = (|| -> Result<_, TasklyError> {
        let config = Config::resolve(api_url)?;
        let mut store = SessionStore::open(&config)?;
        let api = ApiClient::new(&config.api_url, store.token().map(String::from));
        store.resolve_identity(&api)?;
        Ok(store.current())
    })();

    match result {
        Ok(session) => {
            if json_output {
                print_envelope(output::json::success(
                    output::json::session_json(&session),
                ));
            } else {
                match (session.status, session.user) {
                    (SessionStatus::Authenticated, Some(user)) => {
                        output::text::print_user(&user)
                    }
                    _ => println!("Not logged in."),
                }
            }
            0
        }
        Err(e) => fail(&e, json_output),
    }
}

fn print_envelope(v: serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(&v).unwrap());
}

fn fail(e: &TasklyError, json_output: bool) -> i32 {
    if json_output {
        print_envelope(output::json::error(e));
    } else {
        eprintln!("Error: {}", e.message);
    }
    1
}
