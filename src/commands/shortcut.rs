//! Web shortcut subcommands.
//!
//! `use` opens the shortcut in the browser and stamps it as used, which
//! is what flips a red button back to green until the next refresh.

use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::libs::engine::{self, parse_time_of_day};
use crate::libs::launcher;
use crate::libs::messages::Message;
use crate::libs::shortcut::WebShortcut;
use crate::libs::store::TaskStore;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print, msg_success, msg_warning};

#[derive(Debug, Args)]
pub struct ShortcutArgs {
    #[command(subcommand)]
    command: ShortcutCommand,
}

#[derive(Debug, Subcommand)]
enum ShortcutCommand {
    #[command(about = "Add a shortcut (interactive when no name is given)")]
    Add(AddArgs),
    #[command(about = "Edit a shortcut's fields")]
    Edit(EditArgs),
    #[command(about = "Delete a shortcut")]
    Delete(NameArg),
    #[command(about = "List shortcuts with their button state")]
    List,
    #[command(name = "use", about = "Open a shortcut and mark it used")]
    Use(NameArg),
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Shortcut name
    name: Option<String>,
    /// Target URL
    #[arg(long)]
    url: Option<String>,
    /// Daily refresh time (HH:MM)
    #[arg(long)]
    refresh_time: Option<String>,
}

#[derive(Debug, Args)]
struct EditArgs {
    /// Name of the shortcut to edit
    name: String,
    /// New shortcut name
    #[arg(long)]
    rename: Option<String>,
    /// Target URL
    #[arg(long)]
    url: Option<String>,
    /// Daily refresh time, HH:MM (empty string clears)
    #[arg(long)]
    refresh_time: Option<String>,
}

#[derive(Debug, Args)]
struct NameArg {
    /// Shortcut name
    name: String,
}

pub fn cmd(args: ShortcutArgs) -> Result<()> {
    match args.command {
        ShortcutCommand::Add(add) => cmd_add(add),
        ShortcutCommand::Edit(edit) => cmd_edit(edit),
        ShortcutCommand::Delete(arg) => cmd_delete(arg),
        ShortcutCommand::List => cmd_list(),
        ShortcutCommand::Use(arg) => cmd_use(arg),
    }
}

fn cmd_add(args: AddArgs) -> Result<()> {
    let mut store = TaskStore::load()?;

    let shortcut = match (args.name, args.url) {
        (Some(name), Some(url)) => {
            let mut shortcut = WebShortcut::new(&name, &url);
            shortcut.refresh_time = validate_optional_time(args.refresh_time)?;
            shortcut
        }
        _ => build_interactive()?,
    };

    let name = shortcut.name.clone();
    if store.add_shortcut(shortcut) {
        msg_success!(Message::ShortcutCreated(name));
    } else {
        msg_warning!(Message::StoreChangeNotPersisted);
    }
    Ok(())
}

fn build_interactive() -> Result<WebShortcut> {
    let theme = ColorfulTheme::default();

    let name: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptShortcutName.to_string())
        .interact_text()?;
    let url: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptShortcutUrl.to_string())
        .interact_text()?;

    let mut shortcut = WebShortcut::new(&name, &url);

    let refresh: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptRefreshTime.to_string())
        .allow_empty(true)
        .interact_text()?;
    shortcut.refresh_time = validate_optional_time(Some(refresh))?;

    Ok(shortcut)
}

fn cmd_edit(args: EditArgs) -> Result<()> {
    let mut store = TaskStore::load()?;
    let mut shortcut = match store.find_shortcut_by_name(&args.name) {
        Some(shortcut) => shortcut.clone(),
        None => msg_bail_anyhow!(Message::ShortcutNotFound(args.name)),
    };

    let mut changed = false;
    if let Some(rename) = args.rename {
        shortcut.name = rename;
        changed = true;
    }
    if let Some(url) = args.url {
        shortcut.url = url;
        changed = true;
    }
    if let Some(refresh_time) = args.refresh_time {
        // An empty value clears the refresh schedule; the store then also
        // drops the last-use stamp.
        shortcut.refresh_time = if refresh_time.is_empty() {
            None
        } else {
            validate_optional_time(Some(refresh_time))?
        };
        changed = true;
    }

    if !changed {
        msg_print!(Message::NoChangesDetected);
        return Ok(());
    }

    let name = shortcut.name.clone();
    if store.update_shortcut(shortcut) {
        msg_success!(Message::ShortcutUpdated(name));
    } else {
        msg_warning!(Message::StoreChangeNotPersisted);
    }
    Ok(())
}

fn cmd_delete(args: NameArg) -> Result<()> {
    let mut store = TaskStore::load()?;
    let id = match store.find_shortcut_by_name(&args.name) {
        Some(shortcut) => shortcut.id.clone(),
        None => msg_bail_anyhow!(Message::ShortcutNotFound(args.name)),
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteShortcut(args.name.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    if store.remove_shortcut(&id) {
        msg_success!(Message::ShortcutDeleted(args.name));
    } else {
        msg_warning!(Message::StoreChangeNotPersisted);
    }
    Ok(())
}

fn cmd_list() -> Result<()> {
    let store = TaskStore::load()?;
    if store.shortcuts.is_empty() {
        msg_print!(Message::ShortcutsEmpty);
        return Ok(());
    }

    let now = Local::now().naive_local();
    let rows: Vec<_> = store
        .shortcuts
        .iter()
        .map(|shortcut| (shortcut, engine::determine_button_state(shortcut, now)))
        .collect();

    View::shortcuts(&rows)
}

fn cmd_use(args: NameArg) -> Result<()> {
    let mut store = TaskStore::load()?;
    let (id, url) = match store.find_shortcut_by_name(&args.name) {
        Some(shortcut) => (shortcut.id.clone(), shortcut.url.clone()),
        None => msg_bail_anyhow!(Message::ShortcutNotFound(args.name)),
    };

    launcher::open_url(&url)?;

    if store.touch_last_reset(&id, Local::now()) {
        msg_success!(Message::ShortcutOpened(args.name));
    } else {
        msg_warning!(Message::StoreChangeNotPersisted);
    }
    Ok(())
}

fn validate_optional_time(value: Option<String>) -> Result<Option<String>> {
    match value {
        Some(value) if !value.is_empty() => {
            if parse_time_of_day(&value).is_none() {
                msg_bail_anyhow!(Message::InvalidTimeOfDay(value));
            }
            Ok(Some(value))
        }
        _ => Ok(None),
    }
}
