//! Global settings editor.
//!
//! Prompts through every setting with the current value as default.
//! Toggling `run_on_startup` also registers or removes the autostart
//! entry so the stored flag and the system state stay in step.

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::libs::autostart;
use crate::libs::engine::parse_time_of_day;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_bail_anyhow, msg_print, msg_success, msg_warning};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Print the current settings instead of editing them
    #[arg(long)]
    show: bool,
}

pub fn cmd(args: SettingsArgs) -> Result<()> {
    let mut store = TaskStore::load()?;

    if args.show {
        msg_print!(Message::SettingsHeader);
        println!("sleep window:        {} - {}", store.settings.sleep_start, store.settings.sleep_end);
        println!("sleep reminder:      {}h before", store.settings.sleep_advance_notify_hours);
        println!("deadline heads-up:   {}h before", store.settings.cycle_deadline_advance_notify_hours);
        println!("run on startup:      {}", store.settings.run_on_startup);
        println!("launch as admin:     {}", store.settings.launch_as_admin);
        println!("always on top:       {}", store.settings.always_on_top);
        return Ok(());
    }

    let theme = ColorfulTheme::default();
    let current = store.settings.clone();

    let sleep_start: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptSleepStart.to_string())
        .default(current.sleep_start.clone())
        .interact_text()?;
    if parse_time_of_day(&sleep_start).is_none() {
        msg_bail_anyhow!(Message::InvalidTimeOfDay(sleep_start));
    }

    let sleep_end: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptSleepEnd.to_string())
        .default(current.sleep_end.clone())
        .interact_text()?;
    if parse_time_of_day(&sleep_end).is_none() {
        msg_bail_anyhow!(Message::InvalidTimeOfDay(sleep_end));
    }

    let sleep_advance: f64 = Input::with_theme(&theme)
        .with_prompt(Message::PromptSleepAdvance.to_string())
        .default(current.sleep_advance_notify_hours)
        .interact_text()?;

    let deadline_advance: f64 = Input::with_theme(&theme)
        .with_prompt(Message::PromptDeadlineAdvance.to_string())
        .default(current.cycle_deadline_advance_notify_hours)
        .interact_text()?;

    let run_on_startup = Confirm::with_theme(&theme)
        .with_prompt(Message::PromptRunOnStartup.to_string())
        .default(current.run_on_startup)
        .interact()?;

    let launch_as_admin = Confirm::with_theme(&theme)
        .with_prompt(Message::PromptLaunchAsAdmin.to_string())
        .default(current.launch_as_admin)
        .interact()?;

    let always_on_top = Confirm::with_theme(&theme)
        .with_prompt(Message::PromptAlwaysOnTop.to_string())
        .default(current.always_on_top)
        .interact()?;

    store.settings.sleep_start = sleep_start;
    store.settings.sleep_end = sleep_end;
    store.settings.sleep_advance_notify_hours = sleep_advance.max(0.0);
    store.settings.cycle_deadline_advance_notify_hours = deadline_advance.max(0.0);
    store.settings.run_on_startup = run_on_startup;
    store.settings.launch_as_admin = launch_as_admin;
    store.settings.always_on_top = always_on_top;

    if !store.save_settings() {
        msg_warning!(Message::StoreChangeNotPersisted);
        return Ok(());
    }

    if run_on_startup != current.run_on_startup {
        let result = if run_on_startup { autostart::enable() } else { autostart::disable() };
        if let Err(e) = result {
            let message = if run_on_startup {
                Message::AutostartEnableFailed(e.to_string())
            } else {
                Message::AutostartDisableFailed(e.to_string())
            };
            msg_warning!(message);
        }
    }

    msg_success!(Message::SettingsSaved);
    Ok(())
}
