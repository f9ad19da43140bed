//! Thin async client for the Bale messenger bot API.
//!
//! Every endpoint method is one HTTP exchange against
//! `{base_url}/bot{token}/{method}`: parameters are assembled, the JSON
//! envelope `{ok, result, description}` is unwrapped, and the raw `result`
//! comes back as [`serde_json::Value`]. There is no retry policy, no
//! offset bookkeeping and no background machinery; callers drive everything.
//!
//! ```no_run
//! use balevibe::{BaleBot, Params};
//!
//! # async fn run() -> balevibe::Result<()> {
//! let bot = BaleBot::new("123456:token");
//! bot.send_message(42, "hello", Params::new()).await?;
//!
//! let sent = bot
//!     .send_photo(42, "cat.jpg", Params::new().set("caption", "meow"))
//!     .await?;
//! println!("{}", sent);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod params;
pub mod types;
pub mod upload;

pub use client::{BaleBot, DEFAULT_BASE_URL, Health};
pub use error::{BotError, Result};
pub use params::{ChatId, MessageRef, Params};
pub use upload::{FileInput, InputStream, Uploadable};
