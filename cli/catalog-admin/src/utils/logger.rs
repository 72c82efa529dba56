use once_cell::sync::OnceCell;
use tracing::error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload::Handle;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::commands::Verbosity;
use crate::utils::TERMINAL_STDERR;

struct LockingTerminalStderr;
impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LockingTerminalStderr {
    type Writer = LockingTerminalStderr;

    fn make_writer(&'a self) -> Self::Writer {
        LockingTerminalStderr
    }
}

impl std::io::Write for LockingTerminalStderr {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let buf_vec = buf.to_vec();
        if let Ok(mut guard) = TERMINAL_STDERR.lock() {
            guard.write_all(buf_vec.as_slice())?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if let Ok(mut guard) = TERMINAL_STDERR.lock() {
            guard.flush()?
        }
        Ok(())
    }
}

static LOGGER_HANDLE: OnceCell<Handle<EnvFilter, Registry>> = OnceCell::new();

/// Initialize the logger, or update its filter if already running.
///
/// Called once with defaults before argument parsing, and again once
/// the actual verbosity is known; updating the filter is cheap.
pub(crate) fn init_logger(verbosity: Option<Verbosity>) {
    let verbosity = verbosity.unwrap_or_default();

    let log_filter = match verbosity {
        // Show only errors
        Verbosity::Quiet => "off,catalog_admin=error,catalog_client=error",
        // Only show warnings
        Verbosity::Verbose(0) => "off,catalog_admin=warn,catalog_client=warn",
        // Show our own info logs
        Verbosity::Verbose(1) => "off,catalog_admin=info,catalog_client=info",
        // Also show debug from our libraries
        Verbosity::Verbose(2) => "off,catalog_admin=debug,catalog_client=debug",
        // Also show trace from our libraries
        Verbosity::Verbose(3) => "off,catalog_admin=trace,catalog_client=trace",
        Verbosity::Verbose(_) => "trace",
    };

    let filter_handle = LOGGER_HANDLE.get_or_init(|| {
        let (subscriber, reload_handle) = create_registry_and_filter_reload_handle();
        subscriber.init();
        reload_handle
    });

    update_filters(filter_handle, log_filter);
}

fn update_filters(filter_handle: &Handle<EnvFilter, Registry>, log_filter: &str) {
    let result = filter_handle.modify(|layer| {
        match EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_filter)) {
            Ok(new_filter) => *layer = new_filter,
            Err(err) => {
                error!("Updating logger filter failed: {}", err);
            },
        };
    });
    if let Err(err) = result {
        error!("Updating logger filter failed: {}", err);
    }
}

fn create_registry_and_filter_reload_handle() -> (
    impl tracing_subscriber::layer::SubscriberExt + tracing_subscriber::util::SubscriberInitExt,
    Handle<EnvFilter, Registry>,
) {
    // The filter starts wide open and is narrowed by `update_filters`
    // once the verbosity is known.
    let filter = EnvFilter::try_new("trace").unwrap();
    let (filter, filter_reload_handle) = tracing_subscriber::reload::Layer::new(filter);
    let log_layer = tracing_subscriber::fmt::layer()
        .with_writer(LockingTerminalStderr)
        .event_format(tracing_subscriber::fmt::format())
        .with_filter(filter);

    let registry = tracing_subscriber::registry().with(log_layer);

    (registry, filter_reload_handle)
}
