//! Shortener core: pure workflow state machine, input normalization and the
//! observable store that UI layers subscribe to.
mod effect;
mod msg;
mod normalize;
mod page;
mod state;
mod store;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, ShortenOutcome};
pub use normalize::{has_scheme, normalize_url, DEFAULT_SCHEME};
pub use page::PageAddress;
pub use state::{AppState, RequestId, INVALID_URL_MESSAGE, SERVICE_UNAVAILABLE_MESSAGE};
pub use store::{Store, SubscriptionId};
pub use update::update;
pub use view_model::AppViewModel;
