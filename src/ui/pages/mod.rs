pub mod proposal;
pub mod quote;
pub mod settings;

pub use proposal::ProposalPage;
pub use quote::QuotePage;
pub use settings::SettingsPage;
