//! Text rendering of the current page.

use client_core::{Content, Control, NavItem, ViewController};
use serde::Serialize;
use shared::{
    domain::{Mode, Topic, TopicId},
    error::StatusError,
};

pub fn render_page(title: &str, controller: &ViewController) -> String {
    let mut out = format!("# {title}\n");

    for item in controller.nav() {
        let marker = if item.selected { '>' } else { ' ' };
        out.push_str(&format!(
            "{marker} {}. {} ({})\n",
            item.id, item.title, item.href
        ));
    }
    out.push('\n');

    let content = match controller.content() {
        Content::Welcome(welcome) => format!("## {}\n{}\n", welcome.title, welcome.body),
        Content::Article(topic) => format!("## {}\n{}\n", topic.title, topic.body),
        Content::CreateForm(draft) => {
            format!("## Create\ntitle: {}\nbody:  {}\n", draft.title, draft.body)
        }
        Content::UpdateForm { id, draft } => format!(
            "## Update {id}\ntitle: {}\nbody:  {}\n",
            draft.title, draft.body
        ),
    };
    out.push_str(&content);

    let controls: Vec<String> = controller
        .controls()
        .into_iter()
        .map(|control| format!("[{}]", control.label()))
        .collect();
    out.push_str(&controls.join(" "));
    out.push('\n');
    out
}

pub fn render_status(err: &StatusError) -> String {
    format!("error[{}]: {}", err.code.as_str(), err.message)
}

pub fn render_list(controller: &ViewController) -> String {
    controller
        .topics()
        .iter()
        .map(|topic| format!("{}\t{}\n", topic.id, topic.title))
        .collect()
}

/// Machine-readable view of the page printed by `export`.
#[derive(Debug, Serialize)]
pub struct PageState {
    pub mode: Mode,
    pub selected_id: Option<TopicId>,
    pub nav: Vec<NavItem>,
    pub controls: Vec<Control>,
    pub topics: Vec<Topic>,
}

impl PageState {
    pub fn capture(controller: &ViewController) -> Self {
        Self {
            mode: controller.mode(),
            selected_id: controller.selected_id(),
            nav: controller.nav(),
            controls: controller.controls(),
            topics: controller.topics().to_vec(),
        }
    }
}
