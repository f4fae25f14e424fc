mod peer_import;
mod state;

pub use peer_import::*;
pub use state::*;
