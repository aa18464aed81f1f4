use crate::models::{Task, User};

pub fn print_user(u: &User) {
    println!("{} <{}> ({})", u.name, u.email, u.id);
}

pub fn print_task(t: &Task) {
    println!("Task {}: {}", t.id, t.title);
    if !t.description.is_empty() {
        println!("  Description: {}", t.description);
    }
    println!(
        "  Status: {}",
        if t.completed { "completed" } else { "pending" }
    );
}

pub fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for t in tasks {
        println!(
            "  [{}] {} - {}",
            if t.completed { "x" } else { " " },
            t.id,
            t.title
        );
    }
}
