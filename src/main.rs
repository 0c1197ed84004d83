mod app;
mod args;
mod cancel;
mod config;
mod entry;
mod error;
mod http;
mod logger;
mod round;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
