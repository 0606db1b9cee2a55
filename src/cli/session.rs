//! Interactive catalog session
//!
//! Reads commands line by line and writes responses to any async writer, so
//! the same loop serves stdin/stdout and in-memory pipes in tests.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tokio::sync::mpsc;
use tracing::debug;

use crate::catalog::{ClassCatalog, ClassDraft, ClassType};
use crate::config::SearchConfig;
use crate::image_search::ImageSearchClient;
use crate::search_controller::{SearchController, SearchEvent, SearchState};

use super::commands::{CatalogCommand, PickerInput, parse_catalog_command, parse_picker_input};

const HELP: &str = "\
Commands:
  list            list all classes
  show <id>       preview a class
  delete <id>     delete a class
  create          create a class (opens the image picker)
  help            show this help
  quit            exit";

const PICKER_HELP: &str = "\
Image picker: type a search, then
  :more           load more results
  :pick <n>       use result n as the featured image
  :retry          retry a failed search
  :skip           continue without an image";

pub struct Session<C: ImageSearchClient> {
    catalog: ClassCatalog,
    client: Arc<C>,
    config: SearchConfig,
}

impl<C: ImageSearchClient> Session<C> {
    pub fn new(catalog: ClassCatalog, client: C, config: SearchConfig) -> Self {
        Self {
            catalog,
            client: Arc::new(client),
            config,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &ClassCatalog {
        &self.catalog
    }

    /// Run until `quit` or end of input
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        write_line(&mut output, "Welcome to RookieCookie! Type 'help' for commands.").await?;

        loop {
            write_prompt(&mut output, "> ").await?;
            let Some(line) = lines.next_line().await.context("Failed to read command")? else {
                break;
            };

            match parse_catalog_command(&line) {
                CatalogCommand::Empty => {}
                CatalogCommand::Help => write_line(&mut output, HELP).await?,
                CatalogCommand::Quit => break,
                CatalogCommand::List => self.list(&mut output).await?,
                CatalogCommand::Show(id) => {
                    let text = match self.catalog.get(id) {
                        Ok(record) => record.summary(),
                        Err(e) => e.to_string(),
                    };
                    write_line(&mut output, &text).await?;
                }
                CatalogCommand::Delete(id) => {
                    let text = match self.catalog.delete(id) {
                        Ok(record) => format!("Deleted '{}'", record.title),
                        Err(e) => e.to_string(),
                    };
                    write_line(&mut output, &text).await?;
                }
                CatalogCommand::Create => {
                    if !self.create(&mut lines, &mut output).await? {
                        break;
                    }
                }
                CatalogCommand::Invalid(message) => {
                    write_line(&mut output, &format!("{message} (try 'help')")).await?;
                }
            }
        }

        output.flush().await?;
        Ok(())
    }

    async fn list<W: AsyncWrite + Unpin>(&self, output: &mut W) -> Result<()> {
        if self.catalog.is_empty() {
            return write_line(output, "No classes yet. Use 'create' to add one.").await;
        }
        for record in self.catalog.list() {
            write_line(output, &record.card_line()).await?;
        }
        Ok(())
    }

    /// Walk through the class form; returns `false` if input ended
    async fn create<R, W>(&mut self, lines: &mut Lines<R>, output: &mut W) -> Result<bool>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut draft = ClassDraft::new();

        let Some(title) = prompt(lines, output, "Title: ").await? else {
            return Ok(false);
        };
        draft.title = title;
        let Some(instructor) = prompt(lines, output, "Instructor: ").await? else {
            return Ok(false);
        };
        draft.instructor = instructor;
        let Some(description) = prompt(lines, output, "Description: ").await? else {
            return Ok(false);
        };
        draft.description = description;

        loop {
            let Some(raw) = prompt(lines, output, "Duration (mins): ").await? else {
                return Ok(false);
            };
            match raw.parse::<u32>() {
                Ok(minutes) => {
                    draft.duration_minutes = minutes;
                    break;
                }
                Err(_) => write_line(output, "Duration must be a whole number of minutes").await?,
            }
        }

        loop {
            let Some(raw) = prompt(lines, output, "Class type [on-demand/live]: ").await? else {
                return Ok(false);
            };
            if raw.is_empty() {
                draft.class_type = ClassType::default();
                break;
            }
            match raw.parse::<ClassType>() {
                Ok(kind) => {
                    draft.class_type = kind;
                    break;
                }
                Err(message) => write_line(output, &message).await?,
            }
        }

        write_line(output, PICKER_HELP).await?;
        let (picked, input_open) = self.pick_image(lines, output).await?;
        if let Some(url) = picked {
            draft.set_featured_image(url);
        }

        match self.catalog.create(draft) {
            Ok(record) => write_line(output, &format!("Created class #{}", record.id)).await?,
            Err(e) => write_line(output, &e.to_string()).await?,
        }
        Ok(input_open)
    }

    /// Run the image picker until a result is picked or the user skips
    ///
    /// Returns the picked URL and whether input is still open.
    async fn pick_image<R, W>(
        &self,
        lines: &mut Lines<R>,
        output: &mut W,
    ) -> Result<(Option<String>, bool)>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let (selection_sender, mut selection_receiver) = mpsc::unbounded_channel();
        let mut picker = SearchController::with_client(Arc::clone(&self.client), &self.config)
            .on_select(move |url| {
                let _ = selection_sender.send(url);
            });

        loop {
            write_prompt(output, "search> ").await?;
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.context("Failed to read picker input")? else {
                        picker.close();
                        return Ok((None, false));
                    };
                    match parse_picker_input(&line) {
                        PickerInput::Text(text) => picker.on_query_text_change(text),
                        PickerInput::More => {
                            if !picker.on_load_more_requested() {
                                write_line(output, "No more results to load").await?;
                            }
                        }
                        PickerInput::Retry => {
                            if !picker.on_retry_requested() {
                                write_line(output, "Nothing to retry").await?;
                            }
                        }
                        PickerInput::Pick(index) => {
                            let url = picker
                                .state()
                                .results
                                .get(index - 1)
                                .map(|result| result.image_url.clone());
                            let Some(url) = url else {
                                write_line(output, &format!("No result {index}")).await?;
                                continue;
                            };
                            picker.on_image_selected(url);
                            let picked = selection_receiver.try_recv().ok();
                            if let Some(url) = &picked {
                                write_line(output, &format!("Selected {url}")).await?;
                            }
                            return Ok((picked, true));
                        }
                        PickerInput::Skip => {
                            picker.close();
                            return Ok((None, true));
                        }
                        PickerInput::Invalid(message) => write_line(output, &message).await?,
                    }
                }
                event = picker.next_event() => {
                    let Some(event) = event else {
                        return Ok((None, true));
                    };
                    render_event(picker.state(), &event, output).await?;
                }
            }
        }
    }
}

async fn render_event<W>(state: &SearchState, event: &SearchEvent, output: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    match event {
        SearchEvent::QueryCommitted { query } if query.is_empty() => {
            write_line(output, "\nSearch cleared").await?;
        }
        SearchEvent::QueryCommitted { query } => {
            write_line(output, &format!("\nSearching for '{query}'...")).await?;
        }
        SearchEvent::PageLoaded {
            page,
            total_pages,
            received,
        } => {
            if state.results.is_empty() {
                write_line(output, "\nNo images found").await?;
                return Ok(());
            }
            let first_new = state.results.len() - received;
            write_line(output, "").await?;
            for (offset, result) in state.results[first_new..].iter().enumerate() {
                let alt = if result.alt_text.is_empty() {
                    "untitled"
                } else {
                    result.alt_text.as_str()
                };
                let line = format!("{:>3}. {alt}  {}", first_new + offset + 1, result.image_url);
                write_line(output, &line).await?;
            }
            let footer = if state.has_more() {
                format!("page {page} of {total_pages}, ':more' for more")
            } else {
                format!("page {page} of {total_pages}")
            };
            write_line(output, &footer).await?;
        }
        SearchEvent::FetchFailed { failure, .. } => {
            let hint = if failure.retryable { " (':retry' to try again)" } else { "" };
            write_line(output, &format!("\nSearch failed: {}{hint}", failure.message)).await?;
        }
        SearchEvent::StaleResponseDiscarded { seq } => {
            debug!(seq, "Stale response not rendered");
        }
    }
    Ok(())
}

async fn prompt<R, W>(lines: &mut Lines<R>, output: &mut W, label: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_prompt(output, label).await?;
    let line = lines.next_line().await.context("Failed to read form input")?;
    Ok(line.map(|l| l.trim().to_string()))
}

async fn write_prompt<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    Ok(())
}
