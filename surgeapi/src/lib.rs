pub mod catalog;
mod config;
mod general;
mod id;
mod mitm;
mod proxy_group;
mod rule;
mod subscription;
mod template;
mod wireguard;

pub use config::*;
pub use general::*;
pub use id::*;
pub use mitm::*;
pub use proxy_group::*;
pub use rule::*;
pub use subscription::*;
pub use template::*;
pub use wireguard::*;
