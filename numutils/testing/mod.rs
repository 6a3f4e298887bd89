/// Useful rstest fixtures.
pub mod fixtures;

/// Default modules to bring into scope within test modules.
pub mod prelude {
    #[allow(unused_imports)]
    pub use rstest::*;

    #[allow(unused_imports)]
    pub use crate::prelude::*;

    #[allow(unused_imports)]
    pub use crate::testing::fixtures::*;
}
