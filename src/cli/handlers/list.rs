//! Generic list command handler
//!
//! Reusable lifecycle for list commands: create the command context, fetch
//! the complete collection, apply the client-side limit, convert to the
//! display type, and print in the requested format.
//!
//! The fetch is all-or-nothing: the fetcher either resolves to the complete
//! ordered sequence or the whole command fails with a normalized error.

use std::future::Future;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::GraphClient;
use crate::error::Result;
use crate::output::{json, table};

/// Run a standard list command with the fetch → limit → display → print flow.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher
/// * `D` - The display type implementing `From<T>` and `Tabled`
///
/// The fetcher receives the client and the configured page-size hint.
/// Table output renders `D` rows; JSON output serializes the raw models.
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    limit: Option<usize>,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    T: Serialize + 'static,
    D: From<T> + Tabled,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(Arc<GraphClient>, usize) -> Fut,
{
    let ctx = CommandContext::new(opts)?;

    debug!("fetching {}", resource_name);
    let items = fetcher(ctx.client.clone(), ctx.page_size()).await?;
    debug!("fetched {} {}", items.len(), resource_name);

    // Apply limit if specified
    let items: Vec<T> = if let Some(limit) = limit {
        items.into_iter().take(limit).collect()
    } else {
        items
    };

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<D> = items.into_iter().map(D::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&items)?);
        }
    }

    Ok(())
}
