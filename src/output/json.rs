use serde_json::{json, Value};

use crate::error::TasklyError;
use crate::models::{Task, User};
use crate::session::Session;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TasklyError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn user_json(u: &User) -> Value {
    json!({
        "id": u.id,
        "email": u.email,
        "name": u.name
    })
}

pub fn session_json(s: &Session) -> Value {
    let mut v = json!({
        "status": s.status.as_str()
    });
    if let Some(ref user) = s.user {
        v["user"] = user_json(user);
    }
    v
}

pub fn task_json(t: &Task) -> Value {
    json!({
        "id": t.id,
        "title": t.title,
        "description": t.description,
        "completed": t.completed
    })
}
