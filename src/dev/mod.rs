/// Development utilities module
///
/// Mock data sources for running the TUI and tests without dataset files.

pub mod mock_provider;

pub use mock_provider::MockProvider;
