use serde_json::json;

use crate::api::ApiClient;
use crate::cli::commands::TaskCommands;
use crate::config::Config;
use crate::error::TasklyError;
use crate::models::{TaskCreate, TaskUpdate};
use crate::output;
use crate::session::{SessionStatus, SessionStore};

pub fn run(cmd: TaskCommands, json_output: bool, api_url: Option<&str>) -> i32 {
    let result = match cmd {
        TaskCommands::Add { title, description } => {
            run_add(&title, description.as_deref(), json_output, api_url)
        }
        TaskCommands::List => run_list(json_output, api_url),
        TaskCommands::Show { id } => run_show(id, json_output, api_url),
        TaskCommands::Edit {
            id,
            title,
            description,
        } => run_edit(id, title.as_deref(), description.as_deref(), json_output, api_url),
        TaskCommands::Done { id } => run_toggle(id, true, json_output, api_url),
        TaskCommands::Undone { id } => run_toggle(id, false, json_output, api_url),
        TaskCommands::Delete { id } => run_delete(id, json_output, api_url),
    };
    match result {
        Ok(code) => code,
        Err(e) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::error(&e)).unwrap()
                );
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

/// Resolve the persisted session and hand back a gateway carrying its token.
/// Anonymous (including a just-invalidated token) means the data request is
/// never issued.
fn authenticated_client(api_url: Option<&str>) -> Result<ApiClient, TasklyError> {
    let config = Config::resolve(api_url)?;
    let mut store = SessionStore::open(&config)?;
    let api = ApiClient::new(&config.api_url, store.token().map(String::from));
    store.resolve_identity(&api)?;
    match store.current().status {
        SessionStatus::Authenticated => Ok(api),
        _ => Err(TasklyError::not_authenticated()),
    }
}

fn run_add(
    title: &str,
    description: Option<&str>,
    json_output: bool,
    api_url: Option<&str>,
) -> Result<i32, TasklyError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TasklyError::validation("Task title must not be empty"));
    }

    let api = authenticated_client(api_url)?;
    let task = api.create_task(&TaskCreate {
        title: title.to_string(),
        description: description.map(str::to_string),
    })?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "task": output::json::task_json(&task)
            })))
            .unwrap()
        );
    } else {
        println!("Added task {}: {}", task.id, task.title);
    }
    Ok(0)
}

fn run_list(json_output: bool, api_url: Option<&str>) -> Result<i32, TasklyError> {
    let api = authenticated_client(api_url)?;
    let tasks = api.list_tasks()?;

    if json_output {
        let tasks_json: Vec<_> = tasks.iter().map(output::json::task_json).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "tasks": tasks_json
            })))
            .unwrap()
        );
    } else {
        output::text::print_task_list(&tasks);
    }
    Ok(0)
}

fn run_show(id: i64, json_output: bool, api_url: Option<&str>) -> Result<i32, TasklyError> {
    let api = authenticated_client(api_url)?;
    let task = api.get_task(id)?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "task": output::json::task_json(&task)
            })))
            .unwrap()
        );
    } else {
        output::text::print_task(&task);
    }
    Ok(0)
}

fn run_edit(
    id: i64,
    title: Option<&str>,
    description: Option<&str>,
    json_output: bool,
    api_url: Option<&str>,
) -> Result<i32, TasklyError> {
    if title.is_none() && description.is_none() {
        return Err(TasklyError::validation(
            "Nothing to update: pass --title and/or --description",
        ));
    }
    let title = title.map(str::trim);
    if title == Some("") {
        return Err(TasklyError::validation("Task title must not be empty"));
    }

    let api = authenticated_client(api_url)?;
    let task = api.update_task(
        id,
        &TaskUpdate {
            title: title.map(str::to_string),
            description: description.map(str::to_string),
        },
    )?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "task": output::json::task_json(&task)
            })))
            .unwrap()
        );
    } else {
        println!("Updated task {}: {}", task.id, task.title);
    }
    Ok(0)
}

fn run_toggle(
    id: i64,
    complete: bool,
    json_output: bool,
    api_url: Option<&str>,
) -> Result<i32, TasklyError> {
    let api = authenticated_client(api_url)?;
    let task = if complete {
        api.mark_complete(id)?
    } else {
        api.mark_incomplete(id)?
    };

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "task": output::json::task_json(&task)
            })))
            .unwrap()
        );
    } else {
        println!(
            "Task {} marked {}.",
            task.id,
            if task.completed { "complete" } else { "incomplete" }
        );
    }
    Ok(0)
}

fn run_delete(id: i64, json_output: bool, api_url: Option<&str>) -> Result<i32, TasklyError> {
    let api = authenticated_client(api_url)?;
    let resp = api.delete_task(id)?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "message": resp.message
            })))
            .unwrap()
        );
    } else {
        println!("{}", resp.message);
    }
    Ok(0)
}
