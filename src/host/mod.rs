use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod stdio;

/// An event dispatched by the launcher.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The user typed (or cleared) text after the plugin's keyword.
    KeywordQuery {
        #[serde(default)]
        argument: Option<String>,
    },
}

/// What the host should do when an item is activated. The host executes
/// the action; the plugin never touches the clipboard itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "text", rename_all = "snake_case")]
pub enum ItemAction {
    Copy(String),
    Nothing,
}

/// A selectable row in the launcher's result list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub icon: PathBuf,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub on_enter: ItemAction,
}

/// The render action returned to the host, one per handled event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Render {
    RenderResultList { items: Vec<ResultItem> },
}
