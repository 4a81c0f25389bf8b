//! Banner selection.
//!
//! Given the configured rules, the override switch and a request context,
//! choose at most one banner to display:
//!
//! - **Override**: while the switch is on, the override rule wins everywhere.
//! - **Path match**: otherwise the first rule whose store path occurs in the
//!   request path wins.
//! - **Expiration**: a rule stays live through the whole of its end date.
//! - **Default**: shown when nothing matches or the chosen rule is inactive
//!   or expired.
//!
//! Selection is synchronous and side-effect free. It may be called from any
//! number of threads concurrently.

mod batch;
mod engine;
pub(crate) mod predicates;
mod slot;
mod types;

pub use batch::select_many;
pub use engine::{select_banner, select_banner_traced, BannerSelector};
pub use predicates::{end_of_day, is_expired, match_path, parse_end_date};
pub use slot::BannerSlot;
pub use types::{Selection, SelectionResult, SelectionSource};
