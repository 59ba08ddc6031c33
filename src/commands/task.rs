//! Task Commands
//!
//! Frontend bindings for the task endpoints.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

use super::{api_url, response_error, CommandError};
use crate::models::{Task, TaskBody, TasksBody};

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct CreateTaskArgs<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct UpdateTaskArgs {
    completed: bool,
}

fn task_url(id: &str) -> String {
    api_url(&format!("/tasks/{}", utf8_percent_encode(id, NON_ALPHANUMERIC)))
}

fn task_from_body(body: TaskBody) -> Result<Task, CommandError> {
    body.task.ok_or_else(|| {
        CommandError::Other(body.error.unwrap_or_else(|| "response carried no task".to_string()))
    })
}

// ========================
// Commands
// ========================

pub async fn list_tasks() -> Result<Vec<Task>, CommandError> {
    let resp = reqwest::Client::new()
        .get(api_url("/tasks"))
        .send()
        .await?;
    if !resp.status().is_success() {
        return Err(response_error(resp).await);
    }
    let body: TasksBody = resp.json().await?;
    Ok(body.tasks)
}

pub async fn create_task(title: &str) -> Result<Task, CommandError> {
    let resp = reqwest::Client::new()
        .post(api_url("/tasks"))
        .json(&CreateTaskArgs { title })
        .send()
        .await?;
    if !resp.status().is_success() {
        return Err(response_error(resp).await);
    }
    let body: TaskBody = resp.json().await?;
    task_from_body(body)
}

pub async fn set_task_completed(id: &str, completed: bool) -> Result<Task, CommandError> {
    let resp = reqwest::Client::new()
        .patch(task_url(id))
        .json(&UpdateTaskArgs { completed })
        .send()
        .await?;
    if !resp.status().is_success() {
        return Err(response_error(resp).await);
    }
    let body: TaskBody = resp.json().await?;
    task_from_body(body)
}

pub async fn delete_task(id: &str) -> Result<(), CommandError> {
    let resp = reqwest::Client::new()
        .delete(task_url(id))
        .send()
        .await?;
    if !resp.status().is_success() {
        return Err(response_error(resp).await);
    }
    Ok(())
}
