use sauron::{html::attributes::*, html::*, prelude::*};
use shared::Task;

use crate::Msg;

/// One row of the task list: checkbox, text, delete button.
pub fn view_task(task: &Task) -> Node<Msg> {
    let task_id = task.id;

    div(
        [
            key(task.id.to_string()),
            class("flex items-center justify-between p-4 bg-ctp-surface0 rounded-lg shadow-sm mb-2 border border-ctp-surface1 hover:shadow-md transition-shadow"),
        ],
        [
            div([class("flex items-center space-x-3")], [
                input([
                    r#type("checkbox"),
                    id(&format!("checkbox-{}", task.id)),
                    checked(task.completed),
                    on_click(move |_| Msg::ToggleTask(task_id)),
                    class("w-5 h-5 rounded accent-ctp-blue"),
                ], []),
                span([class(&format!(
                    "text-ctp-text {}",
                    if task.completed {
                        "line-through text-ctp-overlay1"
                    } else {
                        ""
                    }
                ))], [text(&task.text)]),
            ]),
            button([
                on_click(move |_| Msg::DeleteTask(task_id)),
                r#type("button"),
                class("text-ctp-red hover:text-ctp-maroon focus:outline-none"),
            ], [text("🗑️")]),
        ],
    )
}
