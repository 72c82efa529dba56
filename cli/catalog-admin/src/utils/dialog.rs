use std::fmt::Display;
use std::time::{Duration, Instant};

use crossterm::tty::IsTty;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::ui::{Attributes, RenderConfig, StyleSheet, Styled};

use super::TERMINAL_STDERR;

#[derive(Debug, Clone)]
pub struct Confirm {
    pub default: Option<bool>,
}

/// A free-text prompt, optionally prefilled with a default answer.
#[derive(Debug, Clone)]
pub struct Text {
    pub default: Option<String>,
}

pub struct Spinner<F>(F);
impl<F: FnOnce() -> T + Send, T: Send> Spinner<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[derive(Debug, Clone)]
pub struct Dialog<'a, Type> {
    pub message: &'a str,
    pub help_message: Option<&'a str>,
    pub typed: Type,
}

impl Dialog<'_, Confirm> {
    pub async fn prompt(self) -> inquire::error::InquireResult<bool> {
        let message = self.message.to_owned();
        let help_message: Option<String> = self.help_message.map(ToOwned::to_owned);
        let default = self.typed.default;

        tokio::task::spawn_blocking(move || {
            let _stderr_lock = TERMINAL_STDERR.lock();

            let mut dialog = inquire::Confirm::new(&message).with_render_config(admin_theme());

            if let Some(default) = default {
                dialog = dialog.with_default(default);
            }

            if let Some(ref help_message) = help_message {
                dialog = dialog.with_help_message(help_message);
            }

            dialog.prompt()
        })
        .await
        .expect("Failed to join blocking dialog")
    }
}

impl Dialog<'_, Text> {
    pub async fn prompt(self) -> inquire::error::InquireResult<String> {
        let message = self.message.to_owned();
        let help_message: Option<String> = self.help_message.map(ToOwned::to_owned);
        let default = self.typed.default;

        tokio::task::spawn_blocking(move || {
            let _stderr_lock = TERMINAL_STDERR.lock();

            let mut dialog = inquire::Text::new(&message).with_render_config(admin_theme());

            if let Some(ref default) = default {
                dialog = dialog.with_default(default);
            }

            if let Some(ref help_message) = help_message {
                dialog = dialog.with_help_message(help_message);
            }

            dialog.prompt()
        })
        .await
        .expect("Failed to join blocking dialog")
    }
}

impl<F: FnOnce() -> T + Send, T: Send> Dialog<'_, Spinner<F>> {
    /// Run the wrapped operation, showing a spinner if it takes longer
    /// than `start_spinning_after`. The spinner is cleared on every
    /// exit path, whether the operation succeeded or not.
    pub fn spin_with_delay(self, start_spinning_after: Duration) -> T {
        let handle = tokio::runtime::Handle::current();
        std::thread::scope(|s| {
            let y = s.spawn(move || {
                // self.typed.0 may be a function that requires tokio
                let _guard = handle.enter();
                (self.typed.0)()
            });
            let mut dialog: Option<ProgressBar> = None;
            let started = Instant::now();
            loop {
                if y.is_finished() {
                    break;
                }

                if Instant::now() - started < start_spinning_after {
                    std::thread::sleep(Duration::from_millis(100));
                    continue;
                }

                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::with_template("{spinner} {wide_msg} {prefix:>}").unwrap(),
                );
                spinner.set_message(self.message.to_string());
                if let Some(help_message) = self.help_message {
                    spinner.set_prefix(help_message.to_string())
                }
                spinner.enable_steady_tick(Duration::from_millis(100));
                dialog = Some(spinner);

                break;
            }
            let res = y.join().unwrap();

            if let Some(dialog) = dialog {
                dialog.finish_and_clear();
            }

            res
        })
    }

    #[allow(unused)]
    pub fn spin(self) -> T {
        self.spin_with_delay(Duration::from_millis(0))
    }
}

impl Dialog<'_, ()> {
    /// True if stderr, stdin and stdout are ttys
    pub fn can_prompt() -> bool {
        if std::env::var("_CATALOG_ADMIN_NO_PROMPT").is_ok_and(|v| v == "1") {
            return false;
        }
        std::io::stderr().is_tty() && std::io::stdin().is_tty() && std::io::stdout().is_tty()
    }
}

pub fn admin_theme() -> RenderConfig<'static> {
    let mut render_config = RenderConfig::default_colored();

    render_config.answered_prompt_prefix = Styled::new(">");
    render_config.highlighted_option_prefix = Styled::new(">");
    render_config.prompt_prefix = Styled::new("?");
    render_config.prompt = StyleSheet::new().with_attr(Attributes::BOLD);

    render_config
}

/// Prompt for each field of a [crate::form::CatalogForm], prefilled
/// with the form's current values when editing.
pub async fn prompt_catalog_form(
    form: &crate::form::CatalogForm,
) -> inquire::error::InquireResult<crate::form::CatalogForm> {
    let text = |message: &'static str, current: &str, help: &'static str| {
        let default = if current.is_empty() {
            None
        } else {
            Some(current.to_string())
        };
        Dialog {
            message,
            help_message: Some(help),
            typed: Text { default },
        }
    };

    Ok(crate::form::CatalogForm {
        name: text("Name:", &form.name, "up to 30 characters")
            .prompt()
            .await?,
        description: text("Description:", &form.description, "up to 50 characters")
            .prompt()
            .await?,
        start_date: text("Start date:", &form.start_date, "YYYY-MM-DD")
            .prompt()
            .await?,
        end_date: text("End date:", &form.end_date, "YYYY-MM-DD")
            .prompt()
            .await?,
        status: text(
            "Status:",
            &form.status,
            "active, inactive, upcoming or expired",
        )
        .prompt()
        .await?,
    })
}
