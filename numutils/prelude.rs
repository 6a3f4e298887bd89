#[allow(unused_imports)]
pub use error_stack::{Report, ResultExt};
#[allow(unused_imports)]
pub use tracing::{debug, error, info, trace, warn};

#[allow(unused_imports)]
pub use crate::errors::prelude::*;
