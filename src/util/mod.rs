pub mod assets;
pub mod logging;

pub use assets::{demo_catalog, AssetError};
pub use logging::init_logging;
