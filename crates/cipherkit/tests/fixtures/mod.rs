use cipherkit::prelude::*;

/// Initializes a kit over the standard charsets for the integration suites.
#[must_use]
pub fn setup_kit() -> CipherKit {
    CipherKit::builder().build()
}
