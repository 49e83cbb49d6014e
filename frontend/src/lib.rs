use sauron::{
    html::{attributes::*, *},
    prelude::*,
};
use shared::{email::SEND_EMAIL_PATH, ErrorResponse, SendEmailRequest, TaskList};
use uuid::Uuid;
use wasm_bindgen_futures::JsFuture;
use web_sys::{console, window, Request, RequestInit, Response};

mod task_item;

const SEND_SUCCESS_MESSAGE: &str = "Tasks sent to your email successfully!";
const SEND_FAILURE_MESSAGE: &str = "Failed to send tasks to email. Please try again.";

#[derive(Debug, Clone)]
pub enum Msg {
    SetNewTaskText(String),
    AddTask,
    NewTaskKeyDown(String),
    ToggleTask(Uuid),
    DeleteTask(Uuid),
    SetEmail(String),
    SendToEmail,
    EmailSent(Result<(), String>),
}

#[derive(Debug, Clone, Default)]
pub struct Model {
    list: TaskList,
}

impl Application for Model {
    type MSG = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        Cmd::none()
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::SetNewTaskText(text) => {
                self.list.set_new_task_text(text);
                Cmd::none()
            }
            Msg::AddTask => {
                if let Some(id) = self.list.submit_new_task() {
                    console::log_1(&format!("[DEBUG] Added task {} ({} total)", id, self.list.len()).into());
                }
                Cmd::none()
            }
            Msg::NewTaskKeyDown(key) => {
                if let Some(id) = self.list.new_task_key(&key) {
                    console::log_1(&format!("[DEBUG] Added task {} ({} total)", id, self.list.len()).into());
                }
                Cmd::none()
            }
            Msg::ToggleTask(id) => {
                self.list.toggle_task(id);
                Cmd::none()
            }
            Msg::DeleteTask(id) => {
                self.list.delete_task(id);
                Cmd::none()
            }
            Msg::SetEmail(email) => {
                self.list.set_email(email);
                Cmd::none()
            }
            Msg::SendToEmail => match self.list.begin_send(local_date()) {
                Some(request) => {
                    console::log_1(&format!("[DEBUG] Sending {} tasks", request.tasks.len()).into());
                    Cmd::new(async move { Msg::EmailSent(send_tasks(request).await) })
                }
                None => Cmd::none(),
            },
            Msg::EmailSent(outcome) => {
                self.list.finish_send(&outcome);
                match outcome {
                    Ok(()) => alert(SEND_SUCCESS_MESSAGE),
                    Err(e) => {
                        console::log_1(&format!("Send error: {}", e).into());
                        alert(SEND_FAILURE_MESSAGE);
                    }
                }
                Cmd::none()
            }
        }
    }

    fn view(&self) -> Node<Msg> {
        div(
            [class("min-h-screen bg-ctp-base text-ctp-text py-8 px-4")],
            [div(
                [class("max-w-2xl mx-auto")],
                [
                    h1([class("text-3xl font-bold text-ctp-text mb-8 text-center")], [text("Daily Task Tracker")]),
                    self.view_create_form(),
                    self.view_task_list(),
                    if self.list.is_empty() {
                        span([], [])
                    } else {
                        self.view_email_form()
                    },
                ],
            )],
        )
    }
}

impl Model {
    fn view_create_form(&self) -> Node<Msg> {
        div([class("mb-8")], [
            div([class("flex gap-2")], [
                input([
                    r#type("text"),
                    placeholder("Add a new task..."),
                    value(self.list.new_task_text().to_string()),
                    on_input(|event| Msg::SetNewTaskText(event.value())),
                    on_keydown(|event| Msg::NewTaskKeyDown(event.key())),
                    class("flex-1 p-3 rounded-lg bg-ctp-surface0 border border-ctp-surface2 text-ctp-text placeholder-ctp-subtext0 focus:outline-none focus:ring-2 focus:ring-ctp-blue"),
                ], []),
                button([
                    on_click(|_| Msg::AddTask),
                    r#type("button"),
                    class("px-6 py-3 bg-ctp-blue hover:bg-ctp-sapphire text-ctp-base font-medium rounded-lg transition-colors duration-200"),
                ], [text("Add Task")]),
            ]),
        ])
    }

    fn view_task_list(&self) -> Node<Msg> {
        if self.list.is_empty() {
            return p([class("text-center text-ctp-subtext0 py-4")], [text("No tasks yet. Add one above!")]);
        }

        div([class("mb-8")], [
            p([class("text-sm text-ctp-subtext0 mb-2")], [text(&format!(
                "{} pending, {} completed",
                self.list.pending_count(),
                self.list.completed_count()
            ))]),
            div(
                [class("space-y-2")],
                self.list.tasks().iter().map(task_item::view_task).collect::<Vec<_>>(),
            ),
        ])
    }

    fn view_email_form(&self) -> Node<Msg> {
        let enabled = self.list.can_send();

        div([class("bg-ctp-surface0 p-4 rounded-lg shadow-sm border border-ctp-surface1")], [
            h2([class("text-lg font-semibold text-ctp-text mb-4")], [text("Email Your Tasks")]),
            div([class("flex gap-2")], [
                input([
                    r#type("email"),
                    placeholder("Enter your email address"),
                    value(self.list.email().to_string()),
                    on_input(|event| Msg::SetEmail(event.value())),
                    class("flex-1 p-3 rounded-lg bg-ctp-surface1 border border-ctp-surface2 text-ctp-text placeholder-ctp-subtext0 focus:outline-none focus:ring-2 focus:ring-ctp-blue"),
                ], []),
                button([
                    on_click(|_| Msg::SendToEmail),
                    r#type("button"),
                    disabled(!enabled),
                    class(&format!(
                        "px-6 py-3 rounded-lg font-medium transition-colors duration-200 {}",
                        if enabled {
                            "bg-ctp-green hover:bg-ctp-teal text-ctp-base"
                        } else {
                            "bg-ctp-surface2 text-ctp-overlay0 cursor-not-allowed"
                        }
                    )),
                ], [
                    if self.list.is_sending() {
                        text("Sending...")
                    } else {
                        text("Send to Email")
                    }
                ]),
            ]),
        ])
    }
}

fn local_date() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

async fn send_tasks(request: SendEmailRequest) -> Result<(), String> {
    let body = serde_json::to_string(&request).map_err(|_| "Failed to serialize request")?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(SEND_EMAIL_PATH, &opts)
        .map_err(|_| "Failed to create request")?;

    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| "Failed to set header")?;

    let promise = window().ok_or("No window available")?.fetch_with_request(&request);

    let response: Response = JsFuture::from(promise)
        .await
        .map_err(|_| "Failed to send request")?
        .into();

    if response.ok() {
        return Ok(());
    }

    let text_promise = response.text().map_err(|_| "Failed to read response")?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| "Failed to get text")?
        .as_string()
        .unwrap_or_default();
    let error = serde_json::from_str::<ErrorResponse>(&text)
        .map(|e| e.error)
        .unwrap_or(text);
    console::log_1(&format!("Server error: {}", error).into());

    Err(format!("Server responded with status {}", response.status()))
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    Program::mount_to_body(Model::default());
}
