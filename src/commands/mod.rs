pub mod add;
pub mod branch;
pub mod commit;
pub mod log;
pub mod maintenance;
pub mod menu_edit;
pub mod pull;
pub mod push;
pub mod remote;
pub mod settings;
pub mod stash;
pub mod status;
pub mod tag;
pub mod update;
pub mod versioning;

pub use add::*;
pub use branch::*;
pub use commit::*;
pub use log::*;
pub use maintenance::*;
pub use menu_edit::*;
pub use pull::*;
pub use push::*;
pub use remote::*;
pub use settings::*;
pub use stash::*;
pub use status::*;
pub use tag::*;
pub use update::*;
pub use versioning::*;
