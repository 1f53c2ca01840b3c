use crate::backend::{generate::parse_choices, Client, GenerateRequest};
use crate::config::Config;
use crate::host::{Event, ItemAction, Render, ResultItem};
use crate::wrap::wrap;

pub const EMPTY_PROMPT_TITLE: &str = "Type in a prompt...";
pub const CHOICE_TITLE: &str = "Assistant";

/// Turns launcher events into render actions, one backend round trip per
/// non-empty query.
#[derive(Debug)]
pub struct PromptAdapter {
    config: Config,
    client: Client,
}

impl PromptAdapter {
    pub fn new(config: Config, client: Client) -> Self {
        PromptAdapter { config, client }
    }

    /// Handle one query event.
    ///
    /// Every failure folds into a selectable item whose activation copies
    /// the error text, so this always returns a renderable list.
    pub fn handle_query(&self, event: &Event) -> Render {
        let Event::KeywordQuery { argument } = event;

        let Some(prompt) = argument.as_deref().filter(|s| !s.is_empty()) else {
            tracing::info!("empty query, rendering placeholder");
            return render(vec![self.item(EMPTY_PROMPT_TITLE, None, ItemAction::Nothing)]);
        };

        tracing::info!(prompt, "handling query");

        let request = GenerateRequest::new(prompt, &self.config.generation);
        tracing::debug!(request = ?request, "request body");

        let body = match self.client.generate(&request) {
            Ok(body) => body,
            Err(err) => {
                tracing::error!(%err, "request failed");
                let err = err.to_string();
                return render(vec![self.item(
                    format!("Request failed: {err}"),
                    None,
                    ItemAction::Copy(err),
                )]);
            }
        };

        let choices = match parse_choices(&body) {
            Ok(choices) => choices,
            Err(err) => {
                tracing::error!(%err, body, "failed to parse response");
                return render(vec![self.item(
                    format!("Failed to parse response: {body}"),
                    None,
                    ItemAction::Copy(err.to_string()),
                )]);
            }
        };

        let items: Vec<ResultItem> = choices
            .into_iter()
            .map(|choice| {
                let wrapped = wrap(&choice.text, self.config.wrap_width);
                self.item(CHOICE_TITLE, Some(wrapped.clone()), ItemAction::Copy(wrapped))
            })
            .collect();

        log_results(&items);

        render(items)
    }

    fn item(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        on_enter: ItemAction,
    ) -> ResultItem {
        ResultItem {
            icon: self.config.icon.clone(),
            title: title.into(),
            description,
            on_enter,
        }
    }
}

fn render(items: Vec<ResultItem>) -> Render {
    Render::RenderResultList { items }
}

// best effort; must never affect the returned list
fn log_results(items: &[ResultItem]) {
    let joined = items
        .iter()
        .filter_map(|item| item.description.as_deref())
        .collect::<Vec<_>>()
        .join(" | ");
    tracing::info!(results = %joined);
}
