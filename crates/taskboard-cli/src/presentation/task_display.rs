//! Task display utilities for CLI output.

use taskboard_core::Task;

use super::tables::{format_timestamp, print_separator, status_marker, truncate_string};

const TABLE_WIDTH: usize = 78;

/// Print tasks as a table, one row per task.
pub fn display_task_table(tasks: &[Task]) {
    println!(
        "{:<5} {:<3} {:<32} {:<9} {:<16}",
        "#", "", "Name", "Category", "Updated"
    );
    print_separator(TABLE_WIDTH);

    for task in tasks {
        println!(
            "{:<5} {:<3} {:<32} {:<9} {:<16}",
            task.numero,
            status_marker(task.completed),
            truncate_string(&task.nombre, 31),
            task.tipo.as_str(),
            format_timestamp(&task.updated_at),
        );
    }
}

/// Print every field of a single task.
pub fn display_task_details(task: &Task, title: Option<&str>) {
    if let Some(title) = title {
        println!("{title}");
    }

    println!("  #{} {}", task.numero, task.nombre);
    println!("  ID: {}", task.id);
    println!("  Category: {}", task.tipo);
    println!(
        "  Status: {}",
        if task.completed { "completed" } else { "pending" }
    );
    println!("  Description: {}", task.descripcion);
    println!("  Created: {}", format_timestamp(&task.created_at));
    println!("  Updated: {}", format_timestamp(&task.updated_at));
}
